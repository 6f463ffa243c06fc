mod cli;
mod settings;

use anyhow::Result;
use carrier_search::logging::{self, LoggingGuard};
use carrier_search::ui::theme;
use carrier_search::{SearchWidget, WidgetSnapshot};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _logging = start_logging(&resolved);
	info!(theme = %resolved.theme_name, "configuration loaded");

	let snapshot = run_search(&cli, resolved)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&snapshot),
		OutputFormat::Json => print_json(&snapshot)?,
	}

	Ok(())
}

/// Install file logging. Failure only disables logging.
fn start_logging(settings: &ResolvedConfig) -> Option<LoggingGuard> {
	if !settings.logging.enabled {
		return None;
	}

	let started = settings
		.logging
		.directory()
		.and_then(|dir| logging::initialize(&dir, &settings.logging.level));
	match started {
		Ok(guard) => {
			info!(path = %guard.path.display(), "logging to file");
			Some(guard)
		}
		Err(err) => {
			eprintln!("warning: logging disabled: {err:#}");
			None
		}
	}
}

fn build_widget(settings: &ResolvedConfig) -> SearchWidget {
	let widget = SearchWidget::with_query(settings.dataset.clone(), settings.initial_query.clone());
	info!(carriers = widget.dataset().len(), "search widget ready");
	widget
}

/// Run the interactive screen, or a single search in `--once` mode.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<WidgetSnapshot> {
	let widget = build_widget(&settings);

	if cli.once {
		return Ok(run_once(widget));
	}

	let theme = settings.theme();
	carrier_search::run(widget, settings.ui, theme)
}

/// Search once with the pre-filled query and return the resulting state.
fn run_once(mut widget: SearchWidget) -> WidgetSnapshot {
	let outcome = widget.search();
	info!(?outcome, "single search finished");
	widget.snapshot()
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use config::Map;

	use super::*;
	use crate::cli::format_plain;

	fn once(query: &str) -> WidgetSnapshot {
		let cli = CliArgs::parse_from(["carrier-search", "--no-config", "--once", "-q", query]);
		let settings = settings::load_with_env(&cli, Map::new()).expect("settings load");
		run_search(&cli, settings).expect("single search runs")
	}

	#[test]
	fn once_mode_prints_matches_for_query() {
		let snapshot = once("vi");
		assert!(snapshot.searched);
		insta::assert_snapshot!(format_plain(&snapshot), @"Vivo - Mobile");
	}

	#[test]
	fn once_mode_with_empty_query_prints_fallback() {
		let snapshot = once("");
		assert_eq!(snapshot.query, "");
		assert!(!snapshot.searched);
		assert!(snapshot.results.is_empty());
		insta::assert_snapshot!(format_plain(&snapshot), @"No matching carrier found.");
	}

	#[test]
	fn single_search_does_not_touch_query() {
		let widget = SearchWidget::with_query(carrier_search::Dataset::builtin(), "Oi");
		let snapshot = run_once(widget);
		assert_eq!(snapshot.query, "Oi");
		assert_eq!(snapshot.results.len(), 1);
	}
}
