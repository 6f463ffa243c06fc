mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{LIGHT, SLATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub prompt: Style,
	pub placeholder: Style,
	pub button: Style,
	pub button_focused: Style,
	pub item: Style,
	pub empty: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn button_style(&self, focused: bool) -> Style {
		if focused {
			self.button_focused
		} else {
			self.button
		}
	}

	#[must_use]
	pub fn item_style(&self) -> Style {
		self.item
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Border colour for the input field, dimmed while the button has focus.
	#[must_use]
	pub fn input_border_style(&self, focused: bool) -> Style {
		if focused {
			self.prompt_style()
		} else {
			Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.iter().any(|alias| *alias == normalized)
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	builtins::DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&normalized))
		.map(|definition| definition.theme)
}

/// Canonical names of the bundled themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = builtins::DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_whitespace() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("SLATE"), Some(SLATE));
	}

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("day"), Some(LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn input_border_follows_prompt_when_focused() {
		assert_eq!(SLATE.input_border_style(true), SLATE.prompt_style());
		assert_ne!(SLATE.input_border_style(false), SLATE.prompt_style());
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), ["light", "slate"]);
	}
}
