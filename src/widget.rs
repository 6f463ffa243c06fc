//! Observable state behind the search screen.
//!
//! [`SearchWidget`] owns the query and the result list. Every mutation goes
//! through [`SearchWidget::update_query`] or [`SearchWidget::search`], and
//! each effective change is announced to subscribers as a [`StateChange`].
//! The terminal front end subscribes and redraws when it hears about one.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::Serialize;
use tracing::{debug, trace};

use crate::dataset::{CarrierRecord, Dataset};
use crate::search::compute_results;

/// Notification sent to subscribers after the widget state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
	QueryChanged { query: String },
	ResultsReplaced { query: String, matches: usize },
}

/// What a call to [`SearchWidget::search`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
	/// The query was empty; results were left untouched.
	Skipped,
	Completed { matches: usize },
}

/// Owned copy of the widget state, used for printing the final outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSnapshot {
	pub query: String,
	pub searched: bool,
	pub results: Vec<CarrierRecord>,
}

#[derive(Debug)]
pub struct SearchWidget {
	dataset: Dataset,
	query: String,
	results: Vec<CarrierRecord>,
	searched: bool,
	subscribers: Vec<Sender<StateChange>>,
}

impl SearchWidget {
	#[must_use]
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			query: String::new(),
			results: Vec::new(),
			searched: false,
			subscribers: Vec::new(),
		}
	}

	/// Start with a pre-filled query. Results stay empty until [`search`](Self::search) runs.
	#[must_use]
	pub fn with_query(dataset: Dataset, query: impl Into<String>) -> Self {
		let mut widget = Self::new(dataset);
		widget.query = query.into();
		widget
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn results(&self) -> &[CarrierRecord] {
		&self.results
	}

	/// Whether a non-empty query has been searched at least once.
	#[must_use]
	pub fn has_searched(&self) -> bool {
		self.searched
	}

	#[must_use]
	pub fn snapshot(&self) -> WidgetSnapshot {
		WidgetSnapshot {
			query: self.query.clone(),
			searched: self.searched,
			results: self.results.clone(),
		}
	}

	/// Register for change notifications.
	pub fn subscribe(&mut self) -> Receiver<StateChange> {
		let (tx, rx) = mpsc::channel();
		self.subscribers.push(tx);
		rx
	}

	/// Replace the query verbatim. Results are not recomputed.
	pub fn update_query(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text == self.query {
			return;
		}
		trace!(query = %text, "query updated");
		self.query = text;
		self.emit(StateChange::QueryChanged {
			query: self.query.clone(),
		});
	}

	/// Filter the dataset with the current query and replace the results.
	///
	/// An empty query is a no-op that keeps the previous results.
	pub fn search(&mut self) -> SearchOutcome {
		if self.query.is_empty() {
			trace!("search skipped for empty query");
			return SearchOutcome::Skipped;
		}

		self.results = compute_results(&self.dataset, &self.query);
		self.searched = true;
		let matches = self.results.len();
		debug!(query = %self.query, matches, "search executed");
		self.emit(StateChange::ResultsReplaced {
			query: self.query.clone(),
			matches,
		});
		SearchOutcome::Completed { matches }
	}

	fn emit(&mut self, change: StateChange) {
		self.subscribers
			.retain(|subscriber| subscriber.send(change.clone()).is_ok());
	}
}

impl Default for SearchWidget {
	fn default() -> Self {
		Self::new(Dataset::builtin())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn searched(query: &str) -> SearchWidget {
		let mut widget = SearchWidget::default();
		widget.update_query(query);
		widget.search();
		widget
	}

	#[test]
	fn starts_with_empty_query_and_results() {
		let widget = SearchWidget::default();
		assert_eq!(widget.query(), "");
		assert!(widget.results().is_empty());
		assert!(!widget.has_searched());
	}

	#[test]
	fn update_query_keeps_text_verbatim_and_does_not_filter() {
		let mut widget = SearchWidget::default();
		widget.update_query("  Vi ");
		assert_eq!(widget.query(), "  Vi ");
		assert!(widget.results().is_empty());
	}

	#[test]
	fn search_replaces_results_for_matching_query() {
		let widget = searched("vivo");
		assert_eq!(widget.results(), [CarrierRecord::mobile(1, "Vivo")]);
		assert!(widget.has_searched());
	}

	#[test]
	fn search_without_matches_empties_results() {
		let mut widget = searched("claro");
		assert_eq!(widget.results().len(), 1);

		widget.update_query("xpto");
		assert_eq!(widget.search(), SearchOutcome::Completed { matches: 0 });
		assert!(widget.results().is_empty());
	}

	#[test]
	fn empty_query_leaves_previous_results_untouched() {
		let mut widget = SearchWidget::default();
		assert_eq!(widget.search(), SearchOutcome::Skipped);
		assert!(widget.results().is_empty());

		let mut widget = searched("oi");
		let before = widget.results().to_vec();
		widget.update_query("");
		assert_eq!(widget.search(), SearchOutcome::Skipped);
		assert_eq!(widget.results(), before.as_slice());
	}

	#[test]
	fn results_follow_last_search_not_live_query() {
		let mut widget = searched("nextel");
		widget.update_query("claro");
		assert_eq!(widget.results()[0].name, "Nextel");
	}

	#[test]
	fn repeated_search_is_idempotent() {
		let mut widget = searched("o");
		let first = widget.results().to_vec();
		widget.search();
		assert_eq!(widget.results(), first.as_slice());
	}

	#[test]
	fn initial_query_does_not_search() {
		let widget = SearchWidget::with_query(Dataset::builtin(), "tim");
		assert_eq!(widget.query(), "tim");
		assert!(widget.results().is_empty());
		assert!(!widget.has_searched());
	}

	#[test]
	fn snapshot_copies_current_state() {
		let mut widget = searched("claro");
		widget.update_query("cl");
		let snapshot = widget.snapshot();
		assert_eq!(snapshot.query, "cl");
		assert!(snapshot.searched);
		assert_eq!(snapshot.results, [CarrierRecord::mobile(2, "Claro")]);
	}

	#[test]
	fn subscribers_receive_changes_in_order() {
		let mut widget = SearchWidget::default();
		let rx = widget.subscribe();

		widget.update_query("vi");
		widget.update_query("vi");
		widget.search();
		widget.update_query("");
		widget.search();

		let changes: Vec<StateChange> = rx.try_iter().collect();
		assert_eq!(
			changes,
			vec![
				StateChange::QueryChanged { query: "vi".into() },
				StateChange::ResultsReplaced {
					query: "vi".into(),
					matches: 1
				},
				StateChange::QueryChanged { query: String::new() },
			]
		);
	}

	#[test]
	fn dropped_subscribers_are_pruned() {
		let mut widget = SearchWidget::default();
		drop(widget.subscribe());
		let live = widget.subscribe();

		widget.update_query("tim");
		assert_eq!(widget.subscribers.len(), 1);
		assert!(live.try_recv().is_ok());
	}
}
