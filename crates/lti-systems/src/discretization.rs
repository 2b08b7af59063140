//! Zero-order-hold discretization.
//!
//! With the input held constant between samples, sampling `x' = A·x + B·u`
//! every `dt` gives
//!
//! ```text
//! x(k+1) = Ad·x(k) + Bd·u(k),   Ad = exp(A·dt),   Bd = ∫₀^dt exp(A·τ)·B dτ
//! ```
//!
//! while `C` and `D` are unaffected.  `Bd` comes from the truncated series in
//! [`truncated_convolution_integral`]; a warning is logged when `‖A·dt‖₁`
//! is large enough for the truncation to cost precision.

use crate::discrete::Discrete;
use lti_core::{NumericalSettings, Real, Result, Time};
use lti_math::{matrix_exponential, truncated_convolution_integral, Matrix};

/// Above this value of `‖A·dt‖₁` the default ten-term series is no longer
/// accurate to about `1e-8`.
const SERIES_NORM_WARNING: Real = 1.0;

/// Discretize `(A, B, C, D)` with sampling interval `dt`.
///
/// Failures of the exponential or of the integral are wrapped in
/// [`Error::Discretization`](lti_core::Error::Discretization) naming the
/// matrix being discretized (`"A"` or `"B"`), including an
/// [`Error::Overflow`](lti_core::Error::Overflow) when `‖A·dt‖` is too large
/// for the result to be represented.
///
/// `C` and `D` are copied unchanged and checked against the discretized
/// matrices.  A wrong `C` or `D` shape is returned as a plain
/// [`Error::DimensionMismatch`](lti_core::Error::DimensionMismatch), not
/// wrapped in `Discretization`.
pub fn discretize(
    a: &Matrix,
    b: &Matrix,
    c: &Matrix,
    d: &Matrix,
    dt: Time,
    settings: &NumericalSettings,
) -> Result<Discrete> {
    settings.validate()?;
    tracing::debug!(
        states = a.rows(),
        inputs = b.cols(),
        dt,
        terms = settings.series_terms,
        "discretizing LTI system"
    );

    let ad = matrix_exponential(a, dt).map_err(|e| e.in_discretization("A"))?;
    let bd = integrate(a, b, dt, settings).map_err(|e| e.in_discretization("B"))?;

    Discrete::from_matrices(ad, bd, c.clone(), d.clone())
}

/// `exp(A·dt)·M`, or `exp(A·dt)` when `m` is `None`.
///
/// # Example
/// ```
/// use lti_math::Matrix;
/// use lti_systems::ideal_discretization;
///
/// let a = Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
/// let ad = ideal_discretization(&a, 0.1, None).unwrap();
/// assert!(ad.close_to(&Matrix::from_row_slice(2, 2, &[1.0, 0.1, 0.0, 1.0]), 1e-12));
/// ```
pub fn ideal_discretization(a: &Matrix, dt: Time, m: Option<&Matrix>) -> Result<Matrix> {
    let ad = matrix_exponential(a, dt).map_err(|e| e.in_discretization("A"))?;
    match m {
        Some(m) => ad.checked_mul(m).map_err(|e| e.in_discretization("M")),
        None => Ok(ad),
    }
}

/// `∫₀^dt exp(A·τ)·M dτ` with the default series order.
pub fn real_discretization(a: &Matrix, dt: Time, m: &Matrix) -> Result<Matrix> {
    real_discretization_with(a, dt, m, &NumericalSettings::default())
}

/// [`real_discretization`] with an explicit series order.
pub fn real_discretization_with(
    a: &Matrix,
    dt: Time,
    m: &Matrix,
    settings: &NumericalSettings,
) -> Result<Matrix> {
    settings.validate()?;
    integrate(a, m, dt, settings).map_err(|e| e.in_discretization("M"))
}

fn integrate(a: &Matrix, m: &Matrix, dt: Time, settings: &NumericalSettings) -> Result<Matrix> {
    let scaled_norm = a.norm_one() * dt.abs();
    if scaled_norm > SERIES_NORM_WARNING {
        tracing::warn!(
            norm = scaled_norm,
            terms = settings.series_terms,
            "‖A·dt‖ is large for a truncated series; the integral may lose precision"
        );
    }
    truncated_convolution_integral(a, m, dt, settings.series_terms)
}
