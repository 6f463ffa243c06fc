//! File-based tracing setup.
//!
//! The terminal belongs to the UI while it runs, so log output goes to
//! `<log dir>/carrier-search.log` instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "carrier-search.log";

/// Keeps the non-blocking writer alive. Drop it last in `main`.
#[derive(Debug)]
pub struct LoggingGuard {
	_worker: WorkerGuard,
	pub path: PathBuf,
}

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
	filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_directive)
}

/// An unset, blank or unparsable `directives` selects `default_directive`.
fn filter_from(directives: Option<String>, default_directive: &str) -> EnvFilter {
	directives
		.filter(|value| !value.trim().is_empty())
		.and_then(|value| EnvFilter::try_new(value).ok())
		.unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Install the global subscriber writing to a file inside `dir`.
pub fn initialize(dir: &Path, level: &str) -> Result<LoggingGuard> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
	let (writer, worker) = tracing_appender::non_blocking(appender);

	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_line_number(true);

	tracing_subscriber::registry()
		.with(env_filter(level))
		.with(file_layer)
		.try_init()
		.context("failed to install tracing subscriber")?;

	Ok(LoggingGuard {
		_worker: worker,
		path: dir.join(LOG_FILE_NAME),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_directive_applies_without_override() {
		assert_eq!(filter_from(None, "debug").to_string(), "debug");
		assert_eq!(filter_from(Some("  ".into()), "warn").to_string(), "warn");
	}

	#[test]
	fn override_directives_replace_the_default() {
		let filter = filter_from(Some("carrier_search=trace".into()), "info");
		assert_eq!(filter.to_string(), "carrier_search=trace");
	}

	#[test]
	fn unparsable_override_falls_back() {
		let filter = filter_from(Some("carrier_search=loud".into()), "info");
		assert_eq!(filter.to_string(), "info");
	}

	#[test]
	fn initialize_creates_log_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let logs = dir.path().join("logs");
		let guard = initialize(&logs, "info").expect("subscriber installs");
		assert_eq!(guard.path, logs.join(LOG_FILE_NAME));
		assert!(guard.path.exists());
	}
}
