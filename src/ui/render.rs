use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::Line,
	widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::state::Focus;
use crate::view::{NO_RESULTS_MESSAGE, ResultsView};

const INPUT_ROW_HEIGHT: u16 = 3;
const BUTTON_PADDING: u16 = 4;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(INPUT_ROW_HEIGHT),
				Constraint::Min(1),
			])
			.split(area);

		let title = Paragraph::new(self.ui.title.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.header_style());
		frame.render_widget(title, layout[0]);

		self.render_input_row(frame, layout[1]);
		self.render_results(frame, layout[2]);
		self.needs_redraw = false;
	}

	fn render_input_row(&self, frame: &mut Frame, area: Rect) {
		let button_width = button_width(&self.ui.button_label);
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Min(1), Constraint::Length(button_width)])
			.split(area);

		self.search_input.render(frame, columns[0]);

		let focused = self.focus == Focus::Button;
		let button = Paragraph::new(self.ui.button_label.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.button_style(focused))
			.block(Block::default().borders(Borders::ALL));
		frame.render_widget(button, columns[1]);
	}

	fn render_results(&self, frame: &mut Frame, area: Rect) {
		let area = area.inner(Margin {
			vertical: 1,
			horizontal: 0,
		});
		match ResultsView::from_results(self.widget.results()) {
			ResultsView::Items(items) => {
				let rows: Vec<ListItem> = items
					.into_iter()
					.map(|item| ListItem::new(Line::from(item.label)).style(self.theme.item_style()))
					.collect();
				frame.render_widget(List::new(rows), area);
			}
			ResultsView::Empty => {
				let empty = Paragraph::new(NO_RESULTS_MESSAGE)
					.alignment(Alignment::Center)
					.style(self.theme.empty_style());
				frame.render_widget(empty, area);
			}
		}
	}
}

fn button_width(label: &str) -> u16 {
	u16::try_from(label.width())
		.unwrap_or(u16::MAX)
		.saturating_add(BUTTON_PADDING)
}
