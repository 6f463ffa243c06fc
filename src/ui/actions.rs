use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::state::Focus;
use crate::widget::{SearchOutcome, WidgetSnapshot};

impl<'a> App<'a> {
	/// React to a key press. Returns the final state once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<WidgetSnapshot>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.widget.snapshot())),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.widget.snapshot()));
			}
			KeyCode::Enter => self.activate_search(),
			KeyCode::Tab | KeyCode::BackTab => self.set_focus(self.focus.toggled()),
			KeyCode::Char(' ') if self.focus == Focus::Button => self.activate_search(),
			_ if self.focus == Focus::Input => {
				if self.search_input.input(key) {
					self.widget.update_query(self.search_input.text());
				}
				// cursor movement changes the view without touching the query
				self.needs_redraw = true;
			}
			_ => {}
		}
		Ok(None)
	}

	fn activate_search(&mut self) {
		if let SearchOutcome::Skipped = self.widget.search() {
			debug!("search requested with an empty query");
		}
	}
}
