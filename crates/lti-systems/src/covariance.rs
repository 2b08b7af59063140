//! One-step covariance propagation.
//!
//! ```text
//! P(k+1) = Md·P(k)·Mdᵀ + N
//! ```
//!
//! This is the time update of a Kalman-style estimator built on a
//! [`Discrete`] system; the measurement update is left to the caller.
//! Symmetry of `P` follows from the formula and is not checked, nor is the
//! noise term checked for positive semi-definiteness.

use crate::discrete::Discrete;
use lti_core::{ensure_dims, Result};
use lti_math::Matrix;

/// Propagate `p` through `md`, adding `noise` when given.
pub fn predict_covariance(p: &Matrix, md: &Matrix, noise: Option<&Matrix>) -> Result<Matrix> {
    ensure_dims!(
        p.rows() == md.cols() && p.cols() == md.cols(),
        "covariance is {}×{}, transition matrix needs {}×{}",
        p.rows(),
        p.cols(),
        md.cols(),
        md.cols()
    );
    let propagated = md.checked_mul(&p.checked_mul(&md.transpose())?)?;
    match noise {
        Some(n) => propagated.checked_add(n),
        None => Ok(propagated),
    }
}

/// Covariance propagator bound to a fixed discretized matrix `Md`.
#[derive(Debug, Clone, PartialEq)]
pub struct Covariance {
    md: Matrix,
}

impl Covariance {
    /// Create a propagator for the square transition matrix `md`.
    pub fn new(md: Matrix) -> Result<Self> {
        md.ensure_square()?;
        Ok(Self { md })
    }

    /// Propagator using the state transition `Ad` of a discrete system.
    pub fn from_discrete(system: &Discrete) -> Self {
        Self {
            md: system.ad().clone(),
        }
    }

    /// The transition matrix.
    pub fn md(&self) -> &Matrix {
        &self.md
    }

    /// `Md·P·Mdᵀ [+ noise]`.
    pub fn predict(&self, p: &Matrix, noise: Option<&Matrix>) -> Result<Matrix> {
        predict_covariance(p, &self.md, noise)
    }
}
