use std::fmt::Write;

use super::{DatasetSource, ResolvedConfig};

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Title: {}", config.ui.title);
	let _ = writeln!(out, "  Placeholder: {}", config.ui.placeholder);
	let _ = writeln!(out, "  Button label: {}", config.ui.button_label);
	let _ = writeln!(out, "  Theme: {}", config.theme_name);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let source = match config.dataset_source {
		DatasetSource::Builtin => "built-in",
		DatasetSource::Config => "configuration",
	};
	let _ = writeln!(
		out,
		"  Carriers: {} ({source})",
		config
			.dataset
			.iter()
			.map(|record| record.name.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	);
	if config.logging.enabled {
		let directory = match config.logging.directory() {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let _ = writeln!(out, "  Logging: {} -> {directory}", config.logging.level);
	} else {
		let _ = writeln!(out, "  Logging: disabled");
	}
	out
}
