mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{Exercise, OutputFormat, parse_cli, print_json, print_plain};
use coursework::logging;
use settings::ResolvedConfig;
use workflow::ExerciseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_exercise(cli.exercise, resolved)
}

/// Execute one exercise and print its report in the configured format.
fn run_exercise(exercise: Exercise, settings: ResolvedConfig) -> Result<()> {
	let format = settings.output;
	let workflow = ExerciseWorkflow::from_config(settings);
	let report = workflow.run(exercise)?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
