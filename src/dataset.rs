//! Carrier records and the immutable dataset the widget searches.
//!
//! A [`Dataset`] is validated once when it is built and never mutated
//! afterwards. Clones share the same backing slice, so handing the dataset to
//! the widget, the CLI output and tests costs a reference count bump.

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category shared by every built-in carrier.
pub const MOBILE_CATEGORY: &str = "Mobile";

/// A single telecom carrier entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierRecord {
	pub id: u32,
	pub name: String,
	pub category: String,
}

impl CarrierRecord {
	#[must_use]
	pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			category: category.into(),
		}
	}

	/// Convenience constructor for entries in the [`MOBILE_CATEGORY`].
	#[must_use]
	pub fn mobile(id: u32, name: impl Into<String>) -> Self {
		Self::new(id, name, MOBILE_CATEGORY)
	}
}

/// Reasons a list of records cannot be turned into a [`Dataset`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
	#[error("carrier dataset must contain at least one record")]
	Empty,
	#[error("carrier id {id} is used more than once")]
	DuplicateId { id: u32 },
	#[error("carrier {id} has an empty name")]
	EmptyName { id: u32 },
}

/// Ordered, immutable sequence of [`CarrierRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
	records: Arc<[CarrierRecord]>,
}

impl Dataset {
	/// Validate `records` and freeze them into a dataset, keeping their order.
	pub fn new(records: Vec<CarrierRecord>) -> Result<Self, DatasetError> {
		if records.is_empty() {
			return Err(DatasetError::Empty);
		}

		let mut seen = HashSet::with_capacity(records.len());
		for record in &records {
			if record.name.is_empty() {
				return Err(DatasetError::EmptyName { id: record.id });
			}
			if !seen.insert(record.id) {
				return Err(DatasetError::DuplicateId { id: record.id });
			}
		}

		Ok(Self {
			records: records.into(),
		})
	}

	/// The five carriers bundled with the application.
	#[must_use]
	pub fn builtin() -> Self {
		Self {
			records: builtin_records().into(),
		}
	}

	#[must_use]
	pub fn records(&self) -> &[CarrierRecord] {
		&self.records
	}

	/// Look up a record by its id.
	#[must_use]
	pub fn get(&self, id: u32) -> Option<&CarrierRecord> {
		self.records.iter().find(|record| record.id == id)
	}

	/// Whether `id` belongs to a record in this dataset.
	#[must_use]
	pub fn contains_id(&self, id: u32) -> bool {
		self.get(id).is_some()
	}
}

impl Default for Dataset {
	fn default() -> Self {
		Self::builtin()
	}
}

impl Deref for Dataset {
	type Target = [CarrierRecord];

	fn deref(&self) -> &Self::Target {
		&self.records
	}
}

fn builtin_records() -> Vec<CarrierRecord> {
	vec![
		CarrierRecord::mobile(1, "Vivo"),
		CarrierRecord::mobile(2, "Claro"),
		CarrierRecord::mobile(3, "TIM"),
		CarrierRecord::mobile(4, "Oi"),
		CarrierRecord::mobile(5, "Nextel"),
	]
}
