use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use carrier_search::app_dirs;
use config::{Config, ConfigError, Environment, File, Map};

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "CARRIER_SEARCH";

pub(super) const THEME_ENV: &str = "CARRIER_SEARCH__UI__THEME";
pub(super) const BUTTON_LABEL_ENV: &str = "CARRIER_SEARCH__UI__BUTTON_LABEL";
pub(super) const LOG_LEVEL_ENV: &str = "CARRIER_SEARCH__LOGGING__LEVEL";

/// Snapshot of the process variables that belong to this application.
pub(super) fn environment_vars() -> Map<String, String> {
	env::vars()
		.filter(|(key, _)| key.starts_with(ENV_PREFIX))
		.collect()
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
///
/// Values from `vars` stay strings; serde converts them where a field needs
/// another type, so text settings such as the query are kept verbatim.
pub(super) fn build_config(cli: &CliArgs, vars: Map<String, String>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.source(Some(vars)),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".carrier-search.toml"));
		files.push(current_dir.join("carrier-search.toml"));
	}

	files
}
