//! Guarded evaluation of `a / (b - c)`.

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
	#[error("division by zero")]
	DivisionByZero,

	#[error("arithmetic overflow")]
	Overflow,
}

/// Compute `a / (b - c)` with truncating division.
///
/// ```
/// use coursework::arith::{ArithmeticError, quotient};
///
/// assert_eq!(quotient(10, 5, 3), Ok(5));
/// assert_eq!(quotient(1, 4, 4), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn quotient(a: i64, b: i64, c: i64) -> Result<i64, ArithmeticError> {
	debug!("evaluating {a} / ({b} - {c})");
	let divisor = b.checked_sub(c).ok_or(ArithmeticError::Overflow)?;
	if divisor == 0 {
		return Err(ArithmeticError::DivisionByZero);
	}
	a.checked_div(divisor).ok_or(ArithmeticError::Overflow)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn divides_by_difference() {
		assert_eq!(quotient(10, 5, 3), Ok(5));
		assert_eq!(quotient(7, 0, 2), Ok(-3));
	}

	#[test]
	fn equal_operands_divide_by_zero() {
		assert_eq!(quotient(9, 3, 3), Err(ArithmeticError::DivisionByZero));
	}

	#[test]
	fn overflow_is_reported() {
		assert_eq!(quotient(i64::MIN, 0, 1), Err(ArithmeticError::Overflow));
		assert_eq!(quotient(1, i64::MIN, 1), Err(ArithmeticError::Overflow));
	}
}
