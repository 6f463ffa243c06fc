//! Pure carrier filtering.

use crate::dataset::CarrierRecord;

/// Return the records whose name contains `query`, ignoring case.
///
/// Matching is plain substring containment on the lowercased strings. The
/// output keeps the relative order of `dataset`. An empty query matches every
/// record; callers decide whether an empty query should search at all.
#[must_use]
pub fn compute_results(dataset: &[CarrierRecord], query: &str) -> Vec<CarrierRecord> {
	let needle = query.to_lowercase();
	dataset
		.iter()
		.filter(|record| record.name.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::Dataset;

	fn names(results: &[CarrierRecord]) -> Vec<&str> {
		results.iter().map(|record| record.name.as_str()).collect()
	}

	#[test]
	fn exact_name_matches_single_record() {
		let results = compute_results(&Dataset::builtin(), "vivo");
		assert_eq!(results, vec![CarrierRecord::mobile(1, "Vivo")]);
	}

	#[test]
	fn matching_ignores_case_on_both_sides() {
		let dataset = Dataset::builtin();
		assert_eq!(names(&compute_results(&dataset, "VI")), ["Vivo"]);
		assert_eq!(names(&compute_results(&dataset, "tim")), ["TIM"]);
		assert_eq!(names(&compute_results(&dataset, "m")), ["TIM"]);
	}

	#[test]
	fn unknown_query_yields_no_records() {
		assert!(compute_results(&Dataset::builtin(), "xpto").is_empty());
	}

	#[test]
	fn category_is_not_searched() {
		assert!(compute_results(&Dataset::builtin(), "mobile").is_empty());
	}

	#[test]
	fn whitespace_is_part_of_the_query() {
		assert!(compute_results(&Dataset::builtin(), " vivo").is_empty());
	}

	#[test]
	fn results_keep_dataset_order() {
		let dataset = Dataset::builtin();
		assert_eq!(names(&compute_results(&dataset, "o")), ["Vivo", "Claro", "Oi"]);
		assert_eq!(names(&compute_results(&dataset, "e")), ["Nextel"]);
	}

	#[test]
	fn every_substring_of_a_name_finds_its_record() {
		let dataset = Dataset::builtin();
		for record in dataset.iter() {
			let name = record.name.as_str();
			for start in 0..name.len() {
				for end in start + 1..=name.len() {
					let results = compute_results(&dataset, &name[start..end].to_uppercase());
					assert!(
						results.iter().any(|found| found.id == record.id),
						"query {:?} should find {name}",
						&name[start..end]
					);
				}
			}
		}
	}

	#[test]
	fn results_are_a_subset_of_the_dataset() {
		let dataset = Dataset::builtin();
		for query in ["a", "i", "l", "x", "Ne", "zz"] {
			for record in compute_results(&dataset, query) {
				assert_eq!(dataset.get(record.id), Some(&record));
			}
		}
	}

	#[test]
	fn empty_query_matches_everything_at_this_level() {
		let dataset = Dataset::builtin();
		assert_eq!(compute_results(&dataset, ""), dataset.records().to_vec());
	}
}
