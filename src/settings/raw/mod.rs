use std::path::PathBuf;

use anyhow::Result;
use config::Map;
use serde::Deserialize;

use carrier_search::{CarrierRecord, Dataset, MOBILE_CATEGORY, UiConfig};

use super::resolved::{
	ConfigError, ConfigSources, DatasetSource, LoggingSettings, ResolvedConfig, SettingSource,
	validate,
};
use super::sources::{BUTTON_LABEL_ENV, LOG_LEVEL_ENV, THEME_ENV};
use crate::cli::CliArgs;


const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	logging: LoggingSection,
	carriers: Option<Vec<CarrierSection>>,
	#[serde(skip)]
	sources: ConfigSources,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	button_label: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	enabled: Option<bool>,
	level: Option<String>,
	directory: Option<PathBuf>,
}

/// One `[[carriers]]` entry.
#[derive(Debug, Clone, Deserialize)]
struct CarrierSection {
	id: u32,
	name: String,
	#[serde(default = "default_category")]
	category: String,
}

fn default_category() -> String {
	MOBILE_CATEGORY.to_string()
}

impl RawConfig {
	/// Note which validated settings were supplied through `vars`.
	pub(super) fn record_environment(&mut self, vars: &Map<String, String>) {
		if vars.contains_key(THEME_ENV) {
			self.sources.theme = Some(SettingSource::Environment(THEME_ENV));
		}
		if vars.contains_key(BUTTON_LABEL_ENV) {
			self.sources.button_label = Some(SettingSource::Environment(BUTTON_LABEL_ENV));
		}
		if vars.contains_key(LOG_LEVEL_ENV) {
			self.sources.log_level = Some(SettingSource::Environment(LOG_LEVEL_ENV));
		}
	}

	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(label) = cli.button_label.clone() {
			self.ui.button_label = Some(label);
			self.sources.button_label = Some(SettingSource::CliFlag("--button-label"));
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
			self.sources.theme = Some(SettingSource::CliFlag("--theme"));
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
			self.sources.log_level = Some(SettingSource::CliFlag("--log-level"));
		}
	}

	/// Fill in defaults, build the dataset and validate the result.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let Self {
			ui,
			logging,
			carriers,
			sources,
		} = self;

		let (dataset, dataset_source) = match carriers {
			Some(entries) => {
				let records = entries
					.into_iter()
					.map(|entry| CarrierRecord::new(entry.id, entry.name, entry.category))
					.collect();
				let dataset = Dataset::new(records).map_err(|err| {
					ConfigError::invalid(
						"carriers",
						"[[carriers]]",
						SettingSource::ConfigKey("carriers"),
						err.to_string(),
					)
				})?;
				(dataset, DatasetSource::Config)
			}
			None => (Dataset::builtin(), DatasetSource::Builtin),
		};

		let defaults = UiConfig::default();
		let ui_config = UiConfig {
			title: ui.title.unwrap_or(defaults.title),
			placeholder: ui.placeholder.unwrap_or(defaults.placeholder),
			button_label: ui.button_label.unwrap_or(defaults.button_label),
		};

		let logging = LoggingSettings {
			enabled: logging.enabled.unwrap_or(true),
			level: logging
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			directory: logging.directory,
		};

		let config = ResolvedConfig {
			dataset,
			dataset_source,
			ui: ui_config,
			theme_name: ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			initial_query: ui.initial_query.unwrap_or_default(),
			logging,
		};

		validate(&config, &sources)?;
		Ok(config)
	}
}
