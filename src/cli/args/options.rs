use clap::{Subcommand, ValueEnum};
use serde::Deserialize;

/// Exercises runnable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Subcommand)]
pub(crate) enum Exercise {
	/// Binary search: reads a length, that many sorted integers, then a target
	Search,
	/// Matrix product: reads two shapes (rows cols) followed by both matrices
	Multiply,
	/// Matrix transpose: reads a shape (rows cols) followed by the matrix
	Transpose,
	/// Guarded division a / (b - c): reads a, b and c
	Divide,
}

impl Exercise {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Exercise::Search => "search",
			Exercise::Multiply => "multiply",
			Exercise::Transpose => "transpose",
			Exercise::Divide => "divide",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}
}
