use carrier_search::ui::theme;
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(crate) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if theme::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {}", theme::names().join(", ")),
		));
	}

	if config.ui.button_label.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.button_label",
			config.ui.button_label.clone(),
			sources.source_for_button_label(),
			"must not be blank",
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.logging.level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.logging.level.clone(),
			sources.source_for_log_level(),
			err.to_string(),
		));
	}
	Ok(())
}
