use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{Exercise, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `coursework` binary.
#[derive(Parser, Debug)]
#[command(
	name = "coursework",
	version,
	long_version = long_version(),
	about = "Classroom exercises: binary search, matrix multiply/transpose and guarded division",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COURSEWORK_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'i',
		long = "input",
		value_name = "FILE",
		global = true,
		help = "Read integers from a file instead of standard input (default: stdin)"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		help = "Choose how to print the result (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		long = "prompts",
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Print input prompts to stderr (default: disabled)"
	)]
	pub(crate) prompts: Option<bool>,
	#[arg(
		long = "require-sorted",
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Reject search input that is not in non-decreasing order (default: enabled)"
	)]
	pub(crate) require_sorted: Option<bool>,
	#[arg(
		long = "max-elements",
		value_name = "NUM",
		global = true,
		help = "Largest array length accepted by search (default: 100)"
	)]
	pub(crate) max_elements: Option<usize>,
	#[arg(
		long = "max-dimension",
		value_name = "NUM",
		global = true,
		help = "Largest row or column count accepted for matrices (default: 50)"
	)]
	pub(crate) max_dimension: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity; repeat for more detail"
	)]
	pub(crate) verbose: u8,
	#[command(subcommand)]
	pub(crate) exercise: Exercise,
}
