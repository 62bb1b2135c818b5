//! Textbook exercises packaged as a library.
//!
//! The centrepiece is [`search::search`], an iterative binary search that
//! returns a [`SearchResult`] instead of a sentinel index. The remaining
//! modules cover matrix products and transposes, a guarded division, and the
//! integer token reader used by the `coursework` binary.

pub mod app_dirs;
pub mod arith;
pub mod input;
pub mod logging;
pub mod matrix;
pub mod search;

pub use arith::{ArithmeticError, quotient};
pub use input::{InputError, TokenReader};
pub use matrix::{Matrix, MatrixError};
pub use search::{SearchRequest, SearchResult, is_ordered, search, search_all};
