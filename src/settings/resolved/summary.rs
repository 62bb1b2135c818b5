use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Output format: {}", config.output.as_str());
	let _ = writeln!(out, "  Prompts: {}", bool_to_word(config.prompts));
	match &config.input_path {
		Some(path) => {
			let _ = writeln!(out, "  Input: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Input: (stdin)");
		}
	}
	let _ = writeln!(
		out,
		"  Require sorted search input: {}",
		bool_to_word(config.require_sorted)
	);
	let _ = writeln!(out, "  Max elements: {}", config.max_elements);
	let _ = writeln!(out, "  Max matrix dimension: {}", config.max_dimension);
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;
	use crate::cli::OutputFormat;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			output: OutputFormat::Json,
			prompts: true,
			input_path: Some(PathBuf::from("/tmp/numbers.txt")),
			require_sorted: false,
			max_elements: 10,
			max_dimension: 5,
		};

		let summary = render_summary(&config);
		assert!(summary.contains("Output format: json"));
		assert!(summary.contains("Prompts: yes"));
		assert!(summary.contains("Input: /tmp/numbers.txt"));
		assert!(summary.contains("Require sorted search input: no"));
		assert!(summary.contains("Max elements: 10"));
		assert!(summary.contains("Max matrix dimension: 5"));
	}
}
