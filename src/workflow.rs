use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result, bail};
use coursework::input::check_limit;
use coursework::{
	ArithmeticError, Matrix, MatrixError, SearchResult, TokenReader, is_ordered, quotient,
	search_all,
};
use log::info;

use crate::cli::Exercise;
use crate::settings::ResolvedConfig;

/// Result of one exercise, ready to be rendered.
#[derive(Debug)]
pub(crate) enum Report {
	Search {
		target: i64,
		result: SearchResult,
	},
	Multiply {
		product: Matrix,
	},
	Transpose {
		transposed: Matrix,
	},
	Divide {
		operands: [i64; 3],
		outcome: Result<i64, ArithmeticError>,
	},
}

/// Reads an exercise's input, runs the library routine and collects a [`Report`].
pub(crate) struct ExerciseWorkflow {
	config: ResolvedConfig,
}

impl ExerciseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Run against the configured input file, or stdin when none is set.
	pub(crate) fn run(&self, exercise: Exercise) -> Result<Report> {
		match &self.config.input_path {
			Some(path) => {
				let file = File::open(path)
					.with_context(|| format!("failed to open input file {}", path.display()))?;
				self.run_with(exercise, BufReader::new(file))
			}
			None => self.run_with(exercise, io::stdin().lock()),
		}
	}

	pub(crate) fn run_with<R: BufRead>(&self, exercise: Exercise, source: R) -> Result<Report> {
		info!("running {} exercise", exercise.as_str());
		let mut session = Session {
			reader: TokenReader::new(source),
			prompts: self.config.prompts,
		};

		match exercise {
			Exercise::Search => self.search(&mut session),
			Exercise::Multiply => self.multiply(&mut session),
			Exercise::Transpose => self.transpose(&mut session),
			Exercise::Divide => self.divide(&mut session),
		}
	}

	fn search<R: BufRead>(&self, session: &mut Session<R>) -> Result<Report> {
		session.prompt("Enter the length of array:");
		let len = session.reader.next_usize("array length")?;
		check_limit("array length", len, self.config.max_elements)?;

		session.prompt("Enter the elements of array:");
		let elements = session.reader.read_vec(len, "array element")?;

		session.prompt("Enter element to be searched:");
		let target = session.reader.next_i64("search target")?;

		if self.config.require_sorted && !is_ordered(&elements) {
			bail!("array elements must be in non-decreasing order for binary search");
		}

		let result = search_all(&elements, &target);
		info!("searched {len} elements for {target}: {result:?}");
		Ok(Report::Search { target, result })
	}

	fn multiply<R: BufRead>(&self, session: &mut Session<R>) -> Result<Report> {
		session.prompt("Enter the number of rows and columns in 1st matrix:");
		let (rows1, cols1) = self.read_shape(session)?;
		session.prompt("Enter the number of rows and columns in 2nd matrix:");
		let (rows2, cols2) = self.read_shape(session)?;

		// Reject before reading any elements.
		if cols1 != rows2 {
			return Err(MatrixError::DimensionMismatch {
				left_cols: cols1,
				right_rows: rows2,
			}
			.into());
		}

		session.prompt("Enter the elements of 1st matrix:");
		let left = session.reader.read_matrix(rows1, cols1)?;
		session.prompt("Enter the elements of 2nd matrix:");
		let right = session.reader.read_matrix(rows2, cols2)?;

		let product = left.multiply(&right)?;
		Ok(Report::Multiply { product })
	}

	fn transpose<R: BufRead>(&self, session: &mut Session<R>) -> Result<Report> {
		session.prompt("Enter the number of rows and columns:");
		let (rows, cols) = self.read_shape(session)?;
		session.prompt("Enter the elements of the matrix:");
		let matrix = session.reader.read_matrix(rows, cols)?;

		Ok(Report::Transpose {
			transposed: matrix.transpose(),
		})
	}

	fn divide<R: BufRead>(&self, session: &mut Session<R>) -> Result<Report> {
		session.prompt("Evaluating a / (b - c). Enter a, b and c:");
		let a = session.reader.next_i64("a")?;
		let b = session.reader.next_i64("b")?;
		let c = session.reader.next_i64("c")?;

		Ok(Report::Divide {
			operands: [a, b, c],
			outcome: quotient(a, b, c),
		})
	}

	fn read_shape<R: BufRead>(&self, session: &mut Session<R>) -> Result<(usize, usize)> {
		let limit = self.config.max_dimension;
		let rows = session.reader.next_usize("row count")?;
		let cols = session.reader.next_usize("column count")?;
		check_limit("row count", rows, limit)?;
		check_limit("column count", cols, limit)?;
		Ok((rows, cols))
	}
}

struct Session<R> {
	reader: TokenReader<R>,
	prompts: bool,
}

impl<R: BufRead> Session<R> {
	fn prompt(&self, text: &str) {
		if self.prompts {
			eprintln!("{text}");
		}
	}
}
