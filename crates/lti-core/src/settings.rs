//! Numerical settings shared by the matrix utilities and the LTI analyzers.
//!
//! There is no process-wide state: a [`NumericalSettings`] value is passed to
//! the operations that need it, and the zero-argument convenience methods use
//! [`NumericalSettings::default`].

use crate::{ensure, errors::Result, Real};

/// Singular values strictly above this count toward the numerical rank.
pub const DEFAULT_RANK_TOLERANCE: Real = 1e-8;

/// Truncation order of the convolution-integral power series.
pub const DEFAULT_SERIES_TERMS: usize = 10;

/// Iteration cap handed to the singular value decomposition.
pub const DEFAULT_SVD_MAX_ITERATIONS: usize = 10_000;

/// Tolerances and truncation orders used by the numerical routines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericalSettings {
    /// Threshold for counting a singular value as non-zero.
    pub rank_tolerance: Real,
    /// Number of terms `N` of `t · Σ_{n=1}^{N} (A·t)^{n-1} / n!`.
    pub series_terms: usize,
    /// Maximum SVD iterations; `0` lets the decomposition run until it
    /// converges.
    pub svd_max_iterations: usize,
}

impl Default for NumericalSettings {
    fn default() -> Self {
        Self {
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
            series_terms: DEFAULT_SERIES_TERMS,
            svd_max_iterations: DEFAULT_SVD_MAX_ITERATIONS,
        }
    }
}

impl NumericalSettings {
    /// Replace the rank tolerance.
    pub fn with_rank_tolerance(mut self, tolerance: Real) -> Self {
        self.rank_tolerance = tolerance;
        self
    }

    /// Replace the series truncation order.
    pub fn with_series_terms(mut self, terms: usize) -> Self {
        self.series_terms = terms;
        self
    }

    /// Replace the SVD iteration cap.
    pub fn with_svd_max_iterations(mut self, iterations: usize) -> Self {
        self.svd_max_iterations = iterations;
        self
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rank_tolerance.is_finite() && self.rank_tolerance >= 0.0,
            "rank tolerance must be finite and non-negative, got {}",
            self.rank_tolerance
        );
        ensure!(
            self.series_terms >= 1,
            "series truncation order must be at least 1"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn defaults() {
        let s = NumericalSettings::default();
        assert_eq!(s.rank_tolerance, 1e-8);
        assert_eq!(s.series_terms, 10);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn builders() {
        let s = NumericalSettings::default()
            .with_rank_tolerance(1e-12)
            .with_series_terms(20)
            .with_svd_max_iterations(0);
        assert_eq!(s.rank_tolerance, 1e-12);
        assert_eq!(s.series_terms, 20);
        assert_eq!(s.svd_max_iterations, 0);
    }

    #[test]
    fn invalid_settings() {
        let s = NumericalSettings::default().with_series_terms(0);
        assert!(matches!(s.validate(), Err(Error::Precondition(_))));
        let s = NumericalSettings::default().with_rank_tolerance(-1.0);
        assert!(matches!(s.validate(), Err(Error::Precondition(_))));
        let s = NumericalSettings::default().with_rank_tolerance(Real::NAN);
        assert!(s.validate().is_err());
    }
}
