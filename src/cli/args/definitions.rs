use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `carrier-search` binary.
#[derive(Parser, Debug)]
#[command(
	name = "carrier-search",
	version,
	long_version = long_version(),
	about = "Search telecom carriers by name",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CARRIER_SEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Pre-fill the search field (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the screen title (default: Search Carrier)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the input placeholder (default: Type the carrier name...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "button-label",
		value_name = "TEXT",
		help = "Set the search button label (default: Search)"
	)]
	pub(crate) button_label: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		requires = "initial_query",
		help = "Run a single search for --query and print the results without the UI"
	)]
	pub(crate) once: bool,
	#[arg(
		long = "log-level",
		value_name = "DIRECTIVE",
		help = "Tracing filter directive for the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how the final results are printed"
	)]
	pub(crate) output: OutputFormat,
}
