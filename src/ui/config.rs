/// Labels used by the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub placeholder: String,
	pub button_label: String,
}

impl UiConfig {
	pub const DEFAULT_TITLE: &'static str = "Search Carrier";
	pub const DEFAULT_PLACEHOLDER: &'static str = "Type the carrier name...";
	pub const DEFAULT_BUTTON_LABEL: &'static str = "Search";
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: Self::DEFAULT_TITLE.to_string(),
			placeholder: Self::DEFAULT_PLACEHOLDER.to_string(),
			button_label: Self::DEFAULT_BUTTON_LABEL.to_string(),
		}
	}
}
