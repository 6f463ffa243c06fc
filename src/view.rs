//! Presentation model derived from the widget results.

use crate::dataset::CarrierRecord;

/// Line shown when the result list is empty.
pub const NO_RESULTS_MESSAGE: &str = "No matching carrier found.";

/// One rendered result, keyed by the carrier id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
	pub key: u32,
	pub label: String,
}

impl From<&CarrierRecord> for ResultItem {
	fn from(record: &CarrierRecord) -> Self {
		Self {
			key: record.id,
			label: format!("{} - {}", record.name, record.category),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
	Items(Vec<ResultItem>),
	Empty,
}

impl ResultsView {
	#[must_use]
	pub fn from_results(results: &[CarrierRecord]) -> Self {
		if results.is_empty() {
			Self::Empty
		} else {
			Self::Items(results.iter().map(ResultItem::from).collect())
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Text lines in display order.
	#[must_use]
	pub fn lines(&self) -> Vec<&str> {
		match self {
			Self::Items(items) => items.iter().map(|item| item.label.as_str()).collect(),
			Self::Empty => vec![NO_RESULTS_MESSAGE],
		}
	}
}
