//! # lti-math
//!
//! Dense linear algebra for the LTI workspace: `Matrix` / `Array` newtypes
//! over nalgebra, the matrix exponential, the truncated convolution integral,
//! and SVD-based numerical rank.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional vector of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Two-dimensional matrix of reals.
pub mod matrix;

/// Matrix exponential, convolution integral, singular values and rank.
pub mod matrix_utilities;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::close;
pub use matrix::Matrix;
pub use matrix_utilities::{
    matrix_exponential, numerical_rank, numerical_rank_with, singular_values,
    truncated_convolution_integral,
};
