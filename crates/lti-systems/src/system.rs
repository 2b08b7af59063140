//! Continuous-time LTI system in state-space form.
//!
//! ```text
//! x'(t) = A·x(t) + B·u(t)
//! y(t)  = C·x(t) + D·u(t)
//! ```
//!
//! with `A` (n×n) the system matrix, `B` (n×k) the control matrix, `C` (l×n)
//! the output matrix and `D` (l×k) the feedforward matrix.

use crate::analysis;
use crate::discrete::Discrete;
use crate::discretization;
use crate::traits::Lti;
use lti_core::{ensure_dims, NumericalSettings, Result, Time};
use lti_math::{Array, Matrix};

/// A continuous-time, linear, time-invariant system.
///
/// The matrix shapes are checked once, at construction; afterwards the
/// contents may be replaced through the `set_*` methods as long as the shape
/// is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    a: Matrix,
    b: Matrix,
    c: Matrix,
    d: Matrix,
}

impl System {
    /// Create a system, checking in order that `A` is square, that `B` has
    /// as many rows as `A`, that `C` has as many columns as `A` has rows,
    /// and that `D` has as many rows as `C` and as many columns as `B`.
    ///
    /// The first violated check is reported as a
    /// [`DimensionMismatch`](lti_core::Error::DimensionMismatch).
    ///
    /// # Example
    /// ```
    /// use lti_math::Matrix;
    /// use lti_systems::System;
    ///
    /// // double integrator: position, velocity
    /// let sys = System::new(
    ///     Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]),
    ///     Matrix::from_row_slice(2, 1, &[0.0, 1.0]),
    ///     Matrix::from_row_slice(1, 2, &[1.0, 0.0]),
    ///     Matrix::zeros(1, 1),
    /// )
    /// .unwrap();
    /// assert!(sys.must_controllable());
    /// assert!(sys.must_observable());
    /// ```
    pub fn new(a: Matrix, b: Matrix, c: Matrix, d: Matrix) -> Result<Self> {
        check_dimensions(&a, &b, &c, &d)?;
        Ok(Self { a, b, c, d })
    }

    /// System matrix `A`.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Control matrix `B`.
    pub fn b(&self) -> &Matrix {
        &self.b
    }

    /// Output matrix `C`.
    pub fn c(&self) -> &Matrix {
        &self.c
    }

    /// Feedforward matrix `D`.
    pub fn d(&self) -> &Matrix {
        &self.d
    }

    /// Number of states `n`.
    pub fn states(&self) -> usize {
        self.a.rows()
    }

    /// Number of inputs `k`.
    pub fn inputs(&self) -> usize {
        self.b.cols()
    }

    /// Number of outputs `l`.
    pub fn outputs(&self) -> usize {
        self.c.rows()
    }

    /// Replace `A` with a matrix of the same shape.
    pub fn set_a(&mut self, a: Matrix) -> Result<()> {
        replace("A", &mut self.a, a)
    }

    /// Replace `B` with a matrix of the same shape.
    pub fn set_b(&mut self, b: Matrix) -> Result<()> {
        replace("B", &mut self.b, b)
    }

    /// Replace `C` with a matrix of the same shape.
    pub fn set_c(&mut self, c: Matrix) -> Result<()> {
        replace("C", &mut self.c, c)
    }

    /// Replace `D` with a matrix of the same shape.
    pub fn set_d(&mut self, d: Matrix) -> Result<()> {
        replace("D", &mut self.d, d)
    }

    /// State derivative `x' = A·x + B·u`.
    pub fn derivative(&self, x: &Array, u: &Array) -> Result<Array> {
        mul_add(&self.a, x, &self.b, u)
    }

    /// Output `y = C·x + D·u`.
    pub fn response(&self, x: &Array, u: &Array) -> Result<Array> {
        mul_add(&self.c, x, &self.d, u)
    }

    /// `true` if `rank [B, AB, …, A^{n-1}B] = n`.
    pub fn controllable(&self) -> Result<bool> {
        self.controllable_with(&NumericalSettings::default())
    }

    /// [`controllable`](Self::controllable) with explicit settings.
    pub fn controllable_with(&self, settings: &NumericalSettings) -> Result<bool> {
        analysis::controllable(&self.a, &self.b, settings)
    }

    /// Like [`controllable`](Self::controllable) but panics if the rank
    /// cannot be computed.
    pub fn must_controllable(&self) -> bool {
        analysis::must_controllable(&self.a, &self.b, &NumericalSettings::default())
    }

    /// `true` if `rank [C; CA; …; CA^{n-1}] = n`.
    pub fn observable(&self) -> Result<bool> {
        self.observable_with(&NumericalSettings::default())
    }

    /// [`observable`](Self::observable) with explicit settings.
    pub fn observable_with(&self, settings: &NumericalSettings) -> Result<bool> {
        analysis::observable(&self.a, &self.c, settings)
    }

    /// Like [`observable`](Self::observable) but panics if the rank cannot
    /// be computed.
    pub fn must_observable(&self) -> bool {
        analysis::must_observable(&self.a, &self.c, &NumericalSettings::default())
    }

    /// Zero-order-hold discretization with sampling interval `dt`.
    pub fn discretize(&self, dt: Time) -> Result<Discrete> {
        self.discretize_with(dt, &NumericalSettings::default())
    }

    /// [`discretize`](Self::discretize) with explicit settings.
    pub fn discretize_with(&self, dt: Time, settings: &NumericalSettings) -> Result<Discrete> {
        discretization::discretize(&self.a, &self.b, &self.c, &self.d, dt, settings)
    }
}

impl Lti for System {
    fn controllable(&self) -> Result<bool> {
        System::controllable(self)
    }

    fn observable(&self) -> Result<bool> {
        System::observable(self)
    }

    fn response(&self, x: &Array, u: &Array) -> Result<Array> {
        System::response(self, x, u)
    }
}

/// Shape invariants shared by continuous and discrete systems.
pub(crate) fn check_dimensions(a: &Matrix, b: &Matrix, c: &Matrix, d: &Matrix) -> Result<()> {
    let (ar, ac) = a.shape();
    ensure_dims!(ar == ac, "A should be square, got {ar}×{ac}");
    ensure_dims!(
        b.rows() == ar,
        "B rows ({}) should equal A rows ({ar})",
        b.rows()
    );
    ensure_dims!(
        c.cols() == ar,
        "C cols ({}) should equal A rows ({ar})",
        c.cols()
    );
    ensure_dims!(
        d.rows() == c.rows(),
        "D rows ({}) should equal C rows ({})",
        d.rows(),
        c.rows()
    );
    ensure_dims!(
        d.cols() == b.cols(),
        "D cols ({}) should equal B cols ({})",
        d.cols(),
        b.cols()
    );
    Ok(())
}

/// `m·x + n·u`, failing on any length mismatch.
pub(crate) fn mul_add(m: &Matrix, x: &Array, n: &Matrix, u: &Array) -> Result<Array> {
    let mx = m.checked_mul_vec(x)?;
    let nu = n.checked_mul_vec(u)?;
    mx.checked_add(&nu)
}

fn replace(name: &str, slot: &mut Matrix, value: Matrix) -> Result<()> {
    ensure_dims!(
        value.shape() == slot.shape(),
        "{name} must stay {}×{}, got {}×{}",
        slot.rows(),
        slot.cols(),
        value.rows(),
        value.cols()
    );
    *slot = value;
    Ok(())
}
