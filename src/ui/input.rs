use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

/// Single-line text field backed by `tui-textarea`.
#[derive(Debug)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_border_style(&mut self, border: Style) {
		self.textarea.set_block(
			Block::default()
				.borders(Borders::ALL)
				.border_style(border),
		);
	}

	/// Show or hide the cursor depending on focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the text field, returning `true` if the text changed.
	///
	/// Keys that would insert a line break are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn breaks_line(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
