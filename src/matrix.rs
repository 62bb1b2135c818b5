//! Dense integer matrices with multiplication and transposition.

use std::fmt;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
	#[error("expected {expected} elements for a {rows}x{cols} matrix, got {actual}")]
	Shape {
		rows: usize,
		cols: usize,
		expected: usize,
		actual: usize,
	},

	/// A `rows x cols` element count does not fit in `usize`.
	#[error("a {rows}x{cols} matrix is too large to allocate")]
	TooLarge { rows: usize, cols: usize },

	/// The left operand's column count differs from the right operand's row count.
	#[error("Multiplication not possible: left has {left_cols} columns, right has {right_rows} rows")]
	DimensionMismatch { left_cols: usize, right_rows: usize },

	#[error("arithmetic overflow while computing element ({row}, {col})")]
	Overflow { row: usize, col: usize },
}

/// Row-major `rows x cols` grid of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
	rows: usize,
	cols: usize,
	data: Vec<i64>,
}

impl Matrix {
	/// Number of elements in a `rows x cols` matrix.
	pub fn element_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
		rows.checked_mul(cols)
			.ok_or(MatrixError::TooLarge { rows, cols })
	}

	pub fn new(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self, MatrixError> {
		let expected = Self::element_count(rows, cols)?;
		if data.len() != expected {
			return Err(MatrixError::Shape {
				rows,
				cols,
				expected,
				actual: data.len(),
			});
		}
		Ok(Self { rows, cols, data })
	}

	pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
		let len = Self::element_count(rows, cols)?;
		Ok(Self {
			rows,
			cols,
			data: vec![0; len],
		})
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Element at `(row, col)`, or `None` when out of range.
	pub fn get(&self, row: usize, col: usize) -> Option<i64> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.data.get(row * self.cols + col).copied()
	}

	/// Elements of row `row`.
	///
	/// # Panics
	///
	/// Panics if `row >= self.rows()`; use [`Matrix::get`] for a checked lookup.
	pub fn row(&self, row: usize) -> &[i64] {
		assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
		let start = row * self.cols;
		&self.data[start..start + self.cols]
	}

	pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
		(0..self.rows).map(move |row| self.row(row))
	}

	/// Classic triple-loop product. Overflow is reported instead of wrapping.
	pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
		if self.cols != rhs.rows {
			return Err(MatrixError::DimensionMismatch {
				left_cols: self.cols,
				right_rows: rhs.rows,
			});
		}
		debug!(
			"multiplying {}x{} by {}x{}",
			self.rows, self.cols, rhs.rows, rhs.cols
		);

		let mut product = Matrix::zeros(self.rows, rhs.cols)?;
		for i in 0..self.rows {
			for j in 0..rhs.cols {
				let mut sum: i64 = 0;
				for k in 0..self.cols {
					sum = self.data[i * self.cols + k]
						.checked_mul(rhs.data[k * rhs.cols + j])
						.and_then(|term| sum.checked_add(term))
						.ok_or(MatrixError::Overflow { row: i, col: j })?;
				}
				product.data[i * rhs.cols + j] = sum;
			}
		}
		Ok(product)
	}

	pub fn transpose(&self) -> Matrix {
		// Same element count as `self`, so the shape is always valid.
		let mut transposed = Matrix {
			rows: self.cols,
			cols: self.rows,
			data: vec![0; self.data.len()],
		};
		for i in 0..self.rows {
			for j in 0..self.cols {
				transposed.data[j * self.rows + i] = self.data[i * self.cols + j];
			}
		}
		transposed
	}

	pub fn to_rows(&self) -> Vec<Vec<i64>> {
		self.iter_rows().map(<[i64]>::to_vec).collect()
	}
}

impl fmt::Display for Matrix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.iter_rows() {
			let line: Vec<String> = row.iter().map(i64::to_string).collect();
			writeln!(f, "{}", line.join(" "))?;
		}
		Ok(())
	}
}
