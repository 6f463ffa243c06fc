use std::sync::mpsc::{Receiver, TryRecvError};

use tracing::warn;

use super::config::UiConfig;
use super::input::SearchInput;
use super::theme::Theme;
use crate::widget::{SearchWidget, StateChange};

/// Which control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Button,
}

impl Focus {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Input => Self::Button,
			Self::Button => Self::Input,
		}
	}
}

/// Terminal front end around a [`SearchWidget`].
#[derive(Debug)]
pub struct App<'a> {
	pub widget: SearchWidget,
	pub search_input: SearchInput<'a>,
	pub focus: Focus,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	changes: Receiver<StateChange>,
	pub(crate) needs_redraw: bool,
}

impl<'a> App<'a> {
	pub fn new(mut widget: SearchWidget, ui: UiConfig) -> Self {
		let changes = widget.subscribe();
		let theme = Theme::default();
		let mut search_input = SearchInput::new(widget.query());
		search_input.set_placeholder(ui.placeholder.clone(), theme.placeholder_style());

		let mut app = Self {
			widget,
			search_input,
			focus: Focus::default(),
			ui,
			theme,
			changes,
			needs_redraw: true,
		};
		app.sync_input_chrome();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.ui.placeholder.clone(), theme.placeholder_style());
		self.sync_input_chrome();
		self.needs_redraw = true;
	}

	pub fn set_focus(&mut self, focus: Focus) {
		if self.focus != focus {
			self.focus = focus;
			self.sync_input_chrome();
			self.needs_redraw = true;
		}
	}

	/// Drain widget notifications, returning whether anything arrived.
	pub(crate) fn pump_state_changes(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.changes.try_recv() {
				Ok(_) => changed = true,
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					warn!("search widget change channel disconnected");
					break;
				}
			}
		}
		if changed {
			self.needs_redraw = true;
		}
		changed
	}

	fn sync_input_chrome(&mut self) {
		let focused = self.focus == Focus::Input;
		self.search_input
			.set_border_style(self.theme.input_border_style(focused));
		self.search_input.set_focused(focused);
	}
}
