use std::path::PathBuf;

use anyhow::Result;
use carrier_search::ui::theme::{self, Theme};
use carrier_search::{Dataset, UiConfig, app_dirs};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::validate;

/// Where the carrier records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
	Builtin,
	Config,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
	pub enabled: bool,
	pub level: String,
	pub directory: Option<PathBuf>,
}

impl LoggingSettings {
	/// Configured directory, or the platform log directory.
	pub fn directory(&self) -> Result<PathBuf> {
		match &self.directory {
			Some(dir) => Ok(dir.clone()),
			None => app_dirs::get_log_dir(),
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub dataset: Dataset,
	pub dataset_source: DatasetSource,
	pub ui: UiConfig,
	pub theme_name: String,
	pub initial_query: String,
	pub logging: LoggingSettings,
}

impl ResolvedConfig {
	/// The selected theme. Names are checked during validation.
	pub fn theme(&self) -> Theme {
		theme::by_name(&self.theme_name).unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
