use anyhow::{Context, Result};
use config::Map;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, environment_vars};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, environment_vars())
}

/// Same as [`load`], reading `CARRIER_SEARCH__*` settings from `vars`.
pub fn load_with_env(cli: &CliArgs, vars: Map<String, String>) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli, vars.clone())?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.record_environment(&vars);
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
		pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect()
	}

	fn bare_cli(extra: &[&str]) -> CliArgs {
		let mut args = vec!["carrier-search", "--no-config"];
		args.extend_from_slice(extra);
		CliArgs::parse_from(args)
	}

	#[test]
	fn explicit_config_file_is_loaded() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("carriers.toml");
		fs::write(
			&path,
			"[ui]\nbutton_label = \"Find\"\n\n[[carriers]]\nid = 9\nname = \"Sercomtel\"\n",
		)
		.expect("write config");

		let cli = bare_cli(&["--config", path.to_str().expect("utf-8 path")]);
		let resolved = load_with_env(&cli, Map::new()).expect("loads");
		assert_eq!(resolved.ui.button_label, "Find");
		assert_eq!(resolved.dataset.len(), 1);
		assert_eq!(resolved.dataset[0].name, "Sercomtel");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent.toml");
		let cli = bare_cli(&["--config", missing.to_str().expect("utf-8 path")]);
		assert!(load_with_env(&cli, Map::new()).is_err());
	}

	#[test]
	fn invalid_carrier_table_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("carriers.toml");
		fs::write(&path, "[[carriers]]\nid = 1\nname = \"\"\n").expect("write config");

		let cli = bare_cli(&["--config", path.to_str().expect("utf-8 path")]);
		let message = load_with_env(&cli, Map::new())
			.expect_err("empty name")
			.to_string();
		assert!(message.contains("carrier 1 has an empty name"), "{message}");
	}

	#[test]
	fn environment_text_settings_are_kept_verbatim() {
		let env = vars(&[
			("CARRIER_SEARCH__UI__INITIAL_QUERY", "007"),
			("CARRIER_SEARCH__UI__TITLE", "true"),
			("CARRIER_SEARCH__UI__BUTTON_LABEL", "1.50"),
		]);
		let resolved = load_with_env(&bare_cli(&[]), env).expect("loads");
		assert_eq!(resolved.initial_query, "007");
		assert_eq!(resolved.ui.title, "true");
		assert_eq!(resolved.ui.button_label, "1.50");
	}

	#[test]
	fn environment_booleans_still_parse() {
		let env = vars(&[("CARRIER_SEARCH__LOGGING__ENABLED", "false")]);
		let resolved = load_with_env(&bare_cli(&[]), env).expect("loads");
		assert!(!resolved.logging.enabled);
	}

	#[test]
	fn invalid_environment_theme_names_the_variable() {
		let env = vars(&[("CARRIER_SEARCH__UI__THEME", "neon")]);
		let message = load_with_env(&bare_cli(&[]), env)
			.expect_err("unknown theme")
			.to_string();
		assert!(
			message.contains("environment variable `CARRIER_SEARCH__UI__THEME`"),
			"{message}"
		);
	}

	#[test]
	fn cli_flag_wins_over_environment_for_error_origin() {
		let env = vars(&[("CARRIER_SEARCH__UI__THEME", "light")]);
		let message = load_with_env(&bare_cli(&["--theme", "neon"]), env)
			.expect_err("unknown theme")
			.to_string();
		assert!(message.contains("CLI flag `--theme`"), "{message}");
	}
}
