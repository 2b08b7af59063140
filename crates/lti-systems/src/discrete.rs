//! Discrete-time LTI system obtained by sampling a continuous one.
//!
//! ```text
//! x(k+1) = Ad·x(k) + Bd·u(k)
//! y(k)   = C·x(k)  + D·u(k)
//! ```

use crate::analysis;
use crate::discretization;
use crate::system::{check_dimensions, mul_add};
use crate::traits::{Lti, Predictor};
use lti_core::{NumericalSettings, Result, Time};
use lti_math::{Array, Matrix};

/// A discretized LTI system.
///
/// The sampling interval is a property of the discretization that produced
/// the matrices and is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrete {
    ad: Matrix,
    bd: Matrix,
    c: Matrix,
    d: Matrix,
}

impl Discrete {
    /// Discretize `(A, B, C, D)` with sampling interval `dt` and default
    /// settings.
    pub fn new(a: &Matrix, b: &Matrix, c: &Matrix, d: &Matrix, dt: Time) -> Result<Self> {
        discretization::discretize(a, b, c, d, dt, &NumericalSettings::default())
    }

    /// Assemble a discrete system from already-discretized matrices.
    ///
    /// The shapes are checked exactly as for a continuous
    /// [`System`](crate::System), with `Ad` in place of `A`.
    pub fn from_matrices(ad: Matrix, bd: Matrix, c: Matrix, d: Matrix) -> Result<Self> {
        check_dimensions(&ad, &bd, &c, &d)?;
        Ok(Self { ad, bd, c, d })
    }

    /// Discretized system matrix `Ad = exp(A·dt)`.
    pub fn ad(&self) -> &Matrix {
        &self.ad
    }

    /// Discretized control matrix `Bd`.
    pub fn bd(&self) -> &Matrix {
        &self.bd
    }

    /// Output matrix `C`.
    pub fn c(&self) -> &Matrix {
        &self.c
    }

    /// Feedforward matrix `D`.
    pub fn d(&self) -> &Matrix {
        &self.d
    }

    /// Number of states.
    pub fn states(&self) -> usize {
        self.ad.rows()
    }

    /// Number of inputs.
    pub fn inputs(&self) -> usize {
        self.bd.cols()
    }

    /// Number of outputs.
    pub fn outputs(&self) -> usize {
        self.c.rows()
    }

    /// Next state `x(k+1) = Ad·x(k) + Bd·u(k)`.
    pub fn predict(&self, x: &Array, u: &Array) -> Result<Array> {
        mul_add(&self.ad, x, &self.bd, u)
    }

    /// Output `y(k) = C·x(k) + D·u(k)`.
    pub fn response(&self, x: &Array, u: &Array) -> Result<Array> {
        mul_add(&self.c, x, &self.d, u)
    }

    /// Controllability of `(Ad, Bd)`.
    pub fn controllable(&self) -> Result<bool> {
        self.controllable_with(&NumericalSettings::default())
    }

    /// [`controllable`](Self::controllable) with explicit settings.
    pub fn controllable_with(&self, settings: &NumericalSettings) -> Result<bool> {
        analysis::controllable(&self.ad, &self.bd, settings)
    }

    /// Like [`controllable`](Self::controllable) but panics on failure.
    pub fn must_controllable(&self) -> bool {
        analysis::must_controllable(&self.ad, &self.bd, &NumericalSettings::default())
    }

    /// Observability of `(Ad, C)`.
    pub fn observable(&self) -> Result<bool> {
        self.observable_with(&NumericalSettings::default())
    }

    /// [`observable`](Self::observable) with explicit settings.
    pub fn observable_with(&self, settings: &NumericalSettings) -> Result<bool> {
        analysis::observable(&self.ad, &self.c, settings)
    }

    /// Like [`observable`](Self::observable) but panics on failure.
    pub fn must_observable(&self) -> bool {
        analysis::must_observable(&self.ad, &self.c, &NumericalSettings::default())
    }
}

impl Lti for Discrete {
    fn controllable(&self) -> Result<bool> {
        Discrete::controllable(self)
    }

    fn observable(&self) -> Result<bool> {
        Discrete::observable(self)
    }

    fn response(&self, x: &Array, u: &Array) -> Result<Array> {
        Discrete::response(self, x, u)
    }
}

impl Predictor for Discrete {
    fn predict(&self, x: &Array, u: &Array) -> Result<Array> {
        Discrete::predict(self, x, u)
    }
}
