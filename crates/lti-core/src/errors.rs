//! Error types for the LTI workspace.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Scalar preconditions are
//! checked with the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A matrix or vector does not have the shape an operation requires.
    ///
    /// Mismatched inputs are never padded or truncated.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A matrix expected to be square is not.
    #[error("matrix is not square ({rows}×{cols})")]
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// A matrix decomposition could not be computed.
    #[error("factorization failed: {0}")]
    Factorization(String),

    /// A result is too large to represent: `exp(M·t)` or the series
    /// integral left the range of `f64`.
    #[error("numerical overflow: {0}")]
    Overflow(String),

    /// One of the discretization sub-steps failed.
    #[error("discretization of {stage} failed: {source}")]
    Discretization {
        /// Which matrix was being discretized (`"A"`, `"B"`, `"M"`).
        stage: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Precondition on a scalar argument or setting violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Wrap `self` as the cause of a failed discretization `stage`.
    pub fn in_discretization(self, stage: &'static str) -> Self {
        Error::Discretization {
            stage,
            source: Box::new(self),
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lti_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lti_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::DimensionMismatch(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lti_core::{ensure_dims, errors::Error};
/// fn same_len(a: &[f64], b: &[f64]) -> lti_core::errors::Result<()> {
///     ensure_dims!(a.len() == b.len(), "lengths {} and {} differ", a.len(), b.len());
///     Ok(())
/// }
/// assert!(same_len(&[1.0], &[2.0]).is_ok());
/// assert!(matches!(same_len(&[1.0], &[]), Err(Error::DimensionMismatch(_))));
/// ```
#[macro_export]
macro_rules! ensure_dims {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::DimensionMismatch(
                format!($($msg)*)
            ));
        }
    };
}
