//! `Matrix` — a dense two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` exposing the operations the
//! state-space code needs: products, transpose, powers, horizontal and
//! vertical concatenation, and shape-checked variants of the arithmetic that
//! report a [`DimensionMismatch`](lti_core::Error::DimensionMismatch) instead
//! of panicking.

use crate::array::Array;
use crate::comparison::close;
use lti_core::{ensure_dims, Error, Real, Result};
use nalgebra::DMatrix;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Return `true` if the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` if no entry is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Fail with [`Error::NotSquare`] unless the matrix is square.
    pub fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Induced 1-norm (maximum absolute column sum).
    pub fn norm_one(&self) -> Real {
        self.0
            .column_iter()
            .map(|c| c.iter().map(|x| x.abs()).sum::<Real>())
            .fold(0.0, Real::max)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self(&self.0 * scalar)
    }

    /// Matrix product `self * rhs`, checking the inner dimensions.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            self.cols() == rhs.rows(),
            "cannot multiply {}×{} by {}×{}",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols()
        );
        Ok(Matrix(&self.0 * &rhs.0))
    }

    /// Element-wise sum `self + rhs`, checking that the shapes agree.
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            self.shape() == rhs.shape(),
            "cannot add {}×{} and {}×{}",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols()
        );
        Ok(Matrix(&self.0 + &rhs.0))
    }

    /// Matrix-vector product `M * v`, checking that `v` has `cols()` entries.
    pub fn checked_mul_vec(&self, v: &Array) -> Result<Array> {
        ensure_dims!(
            self.cols() == v.size(),
            "cannot multiply {}×{} matrix by vector of length {}",
            self.rows(),
            self.cols(),
            v.size()
        );
        Ok(Array::from(&self.0 * v.inner()))
    }

    /// `self^exponent` by repeated squaring; `self^0` is the identity.
    pub fn pow(&self, exponent: u32) -> Result<Matrix> {
        self.ensure_square()?;
        let mut result = DMatrix::identity(self.rows(), self.rows());
        let mut base = self.0.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        Ok(Matrix(result))
    }

    /// Horizontal concatenation `[self, right]`.
    pub fn augment(&self, right: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            self.rows() == right.rows(),
            "cannot augment {}×{} with {}×{}: row counts differ",
            self.rows(),
            self.cols(),
            right.rows(),
            right.cols()
        );
        let (r, c1, c2) = (self.rows(), self.cols(), right.cols());
        let mut m = DMatrix::zeros(r, c1 + c2);
        m.view_mut((0, 0), (r, c1)).copy_from(&self.0);
        m.view_mut((0, c1), (r, c2)).copy_from(&right.0);
        Ok(Matrix(m))
    }

    /// Vertical concatenation `[self; below]`.
    pub fn stack(&self, below: &Matrix) -> Result<Matrix> {
        ensure_dims!(
            self.cols() == below.cols(),
            "cannot stack {}×{} on {}×{}: column counts differ",
            self.rows(),
            self.cols(),
            below.rows(),
            below.cols()
        );
        let (r1, r2, c) = (self.rows(), below.rows(), self.cols());
        let mut m = DMatrix::zeros(r1 + r2, c);
        m.view_mut((0, 0), (r1, c)).copy_from(&self.0);
        m.view_mut((r1, 0), (r2, c)).copy_from(&below.0);
        Ok(Matrix(m))
    }

    /// `true` if both matrices have the same shape and every pair of entries
    /// is within `epsilon`.
    pub fn close_to(&self, other: &Matrix, epsilon: Real) -> bool {
        self.shape() == other.shape()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(&a, &b)| close(a, b, epsilon))
    }
}

// ── From / Into ───────────────────────────────────────────────────────────────

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────
//
// The operator forms panic on shape mismatch (nalgebra asserts); use the
// `checked_*` methods for caller-supplied operands.

impl Add for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 + &rhs.0)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 - &rhs.0)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Real) -> Matrix {
        Matrix(&self.0 * rhs)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
