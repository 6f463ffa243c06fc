use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	placeholder: Style::new().fg(Color::DarkGray),
	button: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	button_focused: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(59, 130, 246))
		.add_modifier(Modifier::BOLD),
	item: Style::new().fg(Color::Rgb(226, 232, 240)),
	empty: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	placeholder: Style::new().fg(Color::Rgb(150, 150, 150)),
	button: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	button_focused: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	item: Style::new().fg(Color::Rgb(15, 23, 42)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
};

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
];
