use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use super::App;
use super::config::UiConfig;
use super::theme::Theme;
use crate::widget::{SearchWidget, WidgetSnapshot};

/// Construct an [`App`] around `widget` and run it until the user quits.
pub fn run(widget: SearchWidget, ui: UiConfig, theme: Theme) -> Result<WidgetSnapshot> {
	let mut app = App::new(widget, ui);
	app.set_theme(theme);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<WidgetSnapshot> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		info!("search screen started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<WidgetSnapshot> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => self.needs_redraw = true,
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_snapshot = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(snapshot)) => {
							maybe_snapshot = Some(snapshot);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(snapshot) = maybe_snapshot {
				break Ok(snapshot);
			}

			self.pump_state_changes();
			if self.needs_redraw {
				if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
					break Err(err.into());
				}
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		info!("search screen closed");
		result
	}
}
