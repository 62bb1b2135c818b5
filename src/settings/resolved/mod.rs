use std::path::PathBuf;

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) output: OutputFormat,
	pub(crate) prompts: bool,
	pub(crate) input_path: Option<PathBuf>,
	pub(crate) require_sorted: bool,
	pub(crate) max_elements: usize,
	pub(crate) max_dimension: usize,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration to stderr.
	pub(crate) fn print_summary(&self) {
		eprint!("{}", summary::render_summary(self));
	}
}
