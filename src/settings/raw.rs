use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::{CliArgs, OutputFormat};

const DEFAULT_MAX_ELEMENTS: usize = 100;
const DEFAULT_MAX_DIMENSION: usize = 50;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	output: OutputSection,
	input: InputSection,
	search: SearchSection,
	matrix: MatrixSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct InputSection {
	prompts: Option<bool>,
	path: Option<PathBuf>,
	max_elements: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	require_sorted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MatrixSection {
	max_dimension: Option<usize>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(format) = cli.output {
			self.output.format = Some(format);
		}
		if let Some(prompts) = cli.prompts {
			self.input.prompts = Some(prompts);
		}
		if let Some(path) = &cli.input {
			self.input.path = Some(path.clone());
		}
		if let Some(max) = cli.max_elements {
			self.input.max_elements = Some(max);
		}
		if let Some(require) = cli.require_sorted {
			self.search.require_sorted = Some(require);
		}
		if let Some(max) = cli.max_dimension {
			self.matrix.max_dimension = Some(max);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			input_max_elements: detect_source(
				cli.max_elements.is_some(),
				self.input.max_elements.is_some(),
				"COURSEWORK__INPUT__MAX_ELEMENTS",
				"--max-elements",
				"input.max_elements",
			),
			matrix_max_dimension: detect_source(
				cli.max_dimension.is_some(),
				self.matrix.max_dimension.is_some(),
				"COURSEWORK__MATRIX__MAX_DIMENSION",
				"--max-dimension",
				"matrix.max_dimension",
			),
		};

		let config = ResolvedConfig {
			output: self.output.format.unwrap_or_default(),
			prompts: self.input.prompts.unwrap_or(false),
			input_path: self.input.path,
			require_sorted: self.search.require_sorted.unwrap_or(true),
			max_elements: self.input.max_elements.unwrap_or(DEFAULT_MAX_ELEMENTS),
			max_dimension: self.matrix.max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use config::{Config, File, FileFormat};

	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		CliArgs::parse_from(args)
	}

	#[test]
	fn defaults_resolve_without_sources() {
		let cli = parse(&["coursework", "search"]);
		let resolved = RawConfig::default().resolve(&cli).unwrap();

		assert_eq!(resolved.output, OutputFormat::Plain);
		assert!(!resolved.prompts);
		assert!(resolved.require_sorted);
		assert_eq!(resolved.max_elements, DEFAULT_MAX_ELEMENTS);
		assert_eq!(resolved.max_dimension, DEFAULT_MAX_DIMENSION);
		assert_eq!(resolved.input_path, None);
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = parse(&[
			"coursework",
			"search",
			"--output",
			"json",
			"--prompts",
			"true",
			"--require-sorted",
			"false",
			"--max-elements",
			"7",
			"--max-dimension",
			"3",
			"--input",
			"data.txt",
		]);

		let mut config = RawConfig::default();
		config.output.format = Some(OutputFormat::Plain);
		config.input.max_elements = Some(500);
		config.apply_cli_overrides(&cli);
		let resolved = config.resolve(&cli).unwrap();

		assert_eq!(resolved.output, OutputFormat::Json);
		assert!(resolved.prompts);
		assert!(!resolved.require_sorted);
		assert_eq!(resolved.max_elements, 7);
		assert_eq!(resolved.max_dimension, 3);
		assert_eq!(resolved.input_path, Some(PathBuf::from("data.txt")));
	}

	#[test]
	fn file_values_deserialize() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(
			file,
			"[output]\nformat = \"json\"\n\n[search]\nrequire_sorted = false\n\n[matrix]\nmax_dimension = 4\n"
		)
		.unwrap();

		let raw: RawConfig = Config::builder()
			.add_source(File::from(file.path()).format(FileFormat::Toml))
			.build()
			.unwrap()
			.try_deserialize()
			.unwrap();

		let cli = parse(&["coursework", "transpose"]);
		let resolved = raw.resolve(&cli).unwrap();
		assert_eq!(resolved.output, OutputFormat::Json);
		assert!(!resolved.require_sorted);
		assert_eq!(resolved.max_dimension, 4);
	}

	#[test]
	fn zero_limit_from_file_names_config_key() {
		let mut config = RawConfig::default();
		config.matrix.max_dimension = Some(0);

		let cli = parse(&["coursework", "multiply"]);
		let err = config.resolve(&cli).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("matrix.max_dimension"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn zero_limit_from_cli_names_flag() {
		let cli = parse(&["coursework", "search", "--max-elements", "0"]);
		let mut config = RawConfig::default();
		config.apply_cli_overrides(&cli);

		let err = config.resolve(&cli).unwrap_err();
		assert!(err.to_string().contains("CLI flag `--max-elements`"));
	}
}
