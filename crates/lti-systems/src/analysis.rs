//! Controllability and observability tests.
//!
//! A system is controllable iff the augmented matrix
//! `[B, A·B, A²·B, …, A^{n-1}·B]` has rank `n`, and observable iff the
//! stacked matrix `[C; C·A; C·A²; …; C·A^{n-1}]` has rank `n`.  Ranks are
//! numerical (SVD with the tolerance from [`NumericalSettings`]).
//!
//! The functions work on bare matrices so they apply equally to `(A, B, C)`
//! of a continuous system and `(Ad, Bd, C)` of a discretized one.

use lti_core::{ensure_dims, NumericalSettings, Result};
use lti_math::{numerical_rank_with, Matrix};

/// Build `[B, A·B, …, A^{n-1}·B]` where `n` is the number of rows of `B`.
pub fn controllability_matrix(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.ensure_square()?;
    ensure_dims!(
        b.rows() == a.rows(),
        "B rows ({}) should equal A rows ({})",
        b.rows(),
        a.rows()
    );
    let n = b.rows();
    let mut augmented = b.clone();
    let mut block = b.clone();
    for _ in 1..n {
        block = a.checked_mul(&block)?;
        augmented = augmented.augment(&block)?;
    }
    Ok(augmented)
}

/// Build `[C; C·A; …; C·A^{n-1}]` where `n` is the number of columns of `C`.
pub fn observability_matrix(a: &Matrix, c: &Matrix) -> Result<Matrix> {
    a.ensure_square()?;
    ensure_dims!(
        c.cols() == a.rows(),
        "C cols ({}) should equal A rows ({})",
        c.cols(),
        a.rows()
    );
    let n = c.cols();
    let mut stacked = c.clone();
    let mut block = c.clone();
    for _ in 1..n {
        block = block.checked_mul(a)?;
        stacked = stacked.stack(&block)?;
    }
    Ok(stacked)
}

/// `true` if the pair `(A, B)` is controllable.
///
/// Factorization failures are returned, never reported as `false`.
pub fn controllable(a: &Matrix, b: &Matrix, settings: &NumericalSettings) -> Result<bool> {
    settings.validate()?;
    let augmented = controllability_matrix(a, b)?;
    let rank = numerical_rank_with(&augmented, settings)?;
    tracing::debug!(states = b.rows(), rank, "controllability rank");
    Ok(rank == b.rows())
}

/// `true` if the pair `(A, C)` is observable.
///
/// Factorization failures are returned, never reported as `false`.
pub fn observable(a: &Matrix, c: &Matrix, settings: &NumericalSettings) -> Result<bool> {
    settings.validate()?;
    let stacked = observability_matrix(a, c)?;
    let rank = numerical_rank_with(&stacked, settings)?;
    tracing::debug!(states = c.cols(), rank, "observability rank");
    Ok(rank == c.cols())
}

/// [`controllable`], panicking if the check itself fails.
pub fn must_controllable(a: &Matrix, b: &Matrix, settings: &NumericalSettings) -> bool {
    controllable(a, b, settings)
        .unwrap_or_else(|err| panic!("controllability check failed: {err}"))
}

/// [`observable`], panicking if the check itself fails.
pub fn must_observable(a: &Matrix, c: &Matrix, settings: &NumericalSettings) -> bool {
    observable(a, c, settings).unwrap_or_else(|err| panic!("observability check failed: {err}"))
}
