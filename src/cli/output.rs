use anyhow::Result;
use coursework::{ArithmeticError, Matrix, SearchResult};
use serde_json::{Value, json};

use crate::workflow::Report;

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &Report) -> String {
	match report {
		Report::Search { result, .. } => match result {
			SearchResult::Found(index) => format!("Element found at index {index}\n"),
			SearchResult::NotFound => "Not found\n".to_string(),
		},
		Report::Multiply { product } => format!("The product of matrix is:\n{product}"),
		Report::Transpose { transposed } => {
			format!("The transpose of matrix is:\n{transposed}")
		}
		Report::Divide { outcome, .. } => {
			let line = match outcome {
				Ok(value) => format!("Result: {value}"),
				Err(ArithmeticError::DivisionByZero) => "Division by zero".to_string(),
				Err(ArithmeticError::Overflow) => "Arithmetic overflow".to_string(),
			};
			// Printed whether or not the division succeeded.
			format!("{line}\nEvaluation finished\n")
		}
	}
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &Report) -> Result<String> {
	let payload = match report {
		Report::Search { target, result } => json!({
			"exercise": "search",
			"target": target,
			"found": result.is_found(),
			"index": result.index(),
		}),
		Report::Multiply { product } => json!({
			"exercise": "multiply",
			"matrix": matrix_json(product),
		}),
		Report::Transpose { transposed } => json!({
			"exercise": "transpose",
			"matrix": matrix_json(transposed),
		}),
		Report::Divide { operands, outcome } => {
			let [a, b, c] = *operands;
			json!({
				"exercise": "divide",
				"a": a,
				"b": b,
				"c": c,
				"result": outcome.ok(),
				"error": outcome.err().map(|err| err.to_string()),
			})
		}
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

fn matrix_json(matrix: &Matrix) -> Value {
	json!({
		"rows": matrix.rows(),
		"cols": matrix.cols(),
		"data": matrix.to_rows(),
	})
}
