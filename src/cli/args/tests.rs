use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{CliArgs, Exercise, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parses_subcommand_with_defaults() {
	let parsed = CliArgs::parse_from(["coursework", "search"]);
	assert_eq!(parsed.exercise, Exercise::Search);
	assert_eq!(parsed.output, None);
	assert_eq!(parsed.prompts, None);
	assert!(!parsed.print_config);
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn global_flags_follow_the_subcommand() {
	let parsed = CliArgs::parse_from([
		"coursework",
		"divide",
		"-o",
		"json",
		"--prompts",
		"yes",
		"-vv",
		"--input",
		"numbers.txt",
	]);
	assert_eq!(parsed.exercise, Exercise::Divide);
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert_eq!(parsed.prompts, Some(true));
	assert_eq!(parsed.verbose, 2);
	assert_eq!(parsed.input, Some(PathBuf::from("numbers.txt")));
}

#[test]
fn subcommand_is_required() {
	assert!(CliArgs::try_parse_from(["coursework"]).is_err());
}
