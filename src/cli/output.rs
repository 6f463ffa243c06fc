use anyhow::Result;
use carrier_search::{ResultsView, WidgetSnapshot};

/// Render the results the way the search screen lists them.
pub(crate) fn format_plain(snapshot: &WidgetSnapshot) -> String {
	ResultsView::from_results(&snapshot.results)
		.lines()
		.join("\n")
}

/// Print a plain-text representation of the final results.
pub(crate) fn print_plain(snapshot: &WidgetSnapshot) {
	println!("{}", format_plain(snapshot));
}

/// Format the final widget state as a JSON string.
pub(crate) fn format_json(snapshot: &WidgetSnapshot) -> Result<String> {
	Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Print the JSON representation of the final widget state.
pub(crate) fn print_json(snapshot: &WidgetSnapshot) -> Result<()> {
	println!("{}", format_json(snapshot)?);
	Ok(())
}
