use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
	let mut matches = CliArgs::command().try_get_matches_from(args)?;
	CliArgs::from_arg_matches_mut(&mut matches)
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["carrier-search"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.initial_query.is_none());
	assert!(!parsed.once);
}

#[test]
fn once_mode_reads_query_and_format() {
	let parsed = parse(&["carrier-search", "--once", "-q", "vivo", "-o", "json"]).expect("parses");
	assert!(parsed.once);
	assert_eq!(parsed.initial_query.as_deref(), Some("vivo"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn once_mode_requires_a_query() {
	assert!(parse(&["carrier-search", "--once"]).is_err());
}

#[test]
fn config_files_accumulate() {
	let parsed = parse(&["carrier-search", "-c", "a.toml", "--config", "b.toml"]).expect("parses");
	assert_eq!(parsed.config.len(), 2);
}
