//! Whitespace-separated integer input.
//!
//! [`TokenReader`] pulls tokens across line boundaries from any [`BufRead`],
//! so values may be laid out one per line or several to a line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

use crate::matrix::{Matrix, MatrixError};

#[derive(Debug, Error)]
pub enum InputError {
	#[error("unexpected end of input while reading {expected}")]
	UnexpectedEof { expected: &'static str },

	#[error("'{token}' is not a valid integer")]
	InvalidInteger { token: String },

	#[error("{what} must not be negative (got {value})")]
	Negative { what: &'static str, value: i64 },

	#[error("{what} of {value} exceeds the limit of {limit}")]
	TooLarge {
		what: &'static str,
		value: usize,
		limit: usize,
	},

	#[error(transparent)]
	Matrix(#[from] MatrixError),

	#[error("failed to read input")]
	Io(#[from] io::Error),
}

/// Token-at-a-time reader over a buffered source.
pub struct TokenReader<R> {
	source: R,
	pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
	pub fn new(source: R) -> Self {
		Self {
			source,
			pending: VecDeque::new(),
		}
	}

	/// Next raw token, or `None` once the source is exhausted.
	pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
		while self.pending.is_empty() {
			let mut line = String::new();
			if self.source.read_line(&mut line)? == 0 {
				return Ok(None);
			}
			self.pending
				.extend(line.split_whitespace().map(str::to_owned));
		}
		Ok(self.pending.pop_front())
	}

	pub fn next_i64(&mut self, expected: &'static str) -> Result<i64, InputError> {
		let token = self
			.next_token()?
			.ok_or(InputError::UnexpectedEof { expected })?;
		token
			.parse()
			.map_err(|_| InputError::InvalidInteger { token })
	}

	/// Read a count or dimension. Negative values are rejected.
	pub fn next_usize(&mut self, expected: &'static str) -> Result<usize, InputError> {
		let value = self.next_i64(expected)?;
		usize::try_from(value).map_err(|_| InputError::Negative {
			what: expected,
			value,
		})
	}

	/// Read exactly `count` integers.
	pub fn read_vec(&mut self, count: usize, expected: &'static str) -> Result<Vec<i64>, InputError> {
		(0..count).map(|_| self.next_i64(expected)).collect()
	}

	pub fn read_matrix(&mut self, rows: usize, cols: usize) -> Result<Matrix, InputError> {
		let count = Matrix::element_count(rows, cols)?;
		let data = self.read_vec(count, "matrix element")?;
		Ok(Matrix::new(rows, cols, data)?)
	}
}

/// Reject `value` when it is larger than `limit`.
pub fn check_limit(what: &'static str, value: usize, limit: usize) -> Result<usize, InputError> {
	if value > limit {
		return Err(InputError::TooLarge { what, value, limit });
	}
	Ok(value)
}
