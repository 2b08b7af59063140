//! Matrix functions used by the discretization and rank tests.
//!
//! * [`matrix_exponential`]: `exp(M·t)` from nalgebra's Padé approximant on
//!   `M·t / 2^s` followed by `s` squarings, valid for any square (including
//!   defective) matrix.
//! * [`truncated_convolution_integral`]: `∫₀ᵗ exp(A·τ)·B dτ` from the
//!   truncated power series `t · Σ_{n=1}^{N} (A·t)^{n-1} / n! · B`.
//! * [`numerical_rank`]: number of singular values above a tolerance.
//!
//! The series is truncated at a fixed order regardless of `‖A·t‖`; large
//! spectral radius times `t` loses precision silently.  Raise
//! [`NumericalSettings::series_terms`] for such systems.

use crate::array::Array;
use crate::matrix::Matrix;
use lti_core::settings::DEFAULT_SVD_MAX_ITERATIONS;
use lti_core::{ensure, ensure_dims, Error, NumericalSettings, Real, Result, Time};

/// Largest `‖M·t‖₁` passed to nalgebra's Padé approximant; larger
/// arguments are halved until they fit and the result is squared back.
const PADE_NORM_LIMIT: Real = 1.0;

/// Matrix exponential `exp(M·t)`.
///
/// Fails with [`Error::NotSquare`] if `m` is not square, and with a
/// precondition error if `t` or an entry of `m` is not finite.  A result
/// that does not fit in `f64` is an [`Error::Overflow`]; a stiff stable
/// matrix whose exponential underflows yields zeros.  The number of
/// squarings is bounded by the binary exponent range of `f64`.
///
/// # Example
/// ```
/// use lti_math::{matrix_exponential, Matrix};
/// let a = Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
/// let e = matrix_exponential(&a, 0.5).unwrap();
/// assert!((e[(0, 1)] - 0.5).abs() < 1e-12);
/// ```
pub fn matrix_exponential(m: &Matrix, t: Time) -> Result<Matrix> {
    m.ensure_square()?;
    ensure!(t.is_finite(), "time must be finite, got {t}");
    ensure!(
        m.is_finite(),
        "matrix exponential requires finite entries"
    );
    if m.is_empty() {
        return Ok(Matrix::zeros(0, 0));
    }

    let mt = m.scale(t);
    let norm = mt.norm_one();
    if !norm.is_finite() {
        return Err(Error::Overflow(format!(
            "‖M·t‖ is not representable for t = {t}"
        )));
    }
    // norm < 2^1024, so at most 1024 halvings
    let squarings = if norm > PADE_NORM_LIMIT {
        (norm / PADE_NORM_LIMIT).log2().ceil() as i32
    } else {
        0
    };

    let reduced = mt.scale(0.5_f64.powi(squarings));
    let mut e = Matrix::from(reduced.inner().clone().exp());
    for _ in 0..squarings {
        e = &e * &e;
        if !e.is_finite() {
            break;
        }
    }
    if !e.is_finite() {
        return Err(Error::Overflow(format!(
            "exp(M·t) exceeds the range of f64 (‖M·t‖₁ = {norm:e})"
        )));
    }
    tracing::trace!(norm, squarings, "matrix exponential");
    Ok(e)
}

/// Convolution integral `∫₀ᵗ exp(A·τ)·B dτ`, truncated after `terms` terms:
///
/// ```text
/// t · Σ_{n=1}^{terms} (A·t)^{n-1} / n! · B
/// ```
///
/// `b` may have any number of columns but must have as many rows as `a`.
pub fn truncated_convolution_integral(
    a: &Matrix,
    b: &Matrix,
    t: Time,
    terms: usize,
) -> Result<Matrix> {
    a.ensure_square()?;
    ensure_dims!(
        b.rows() == a.rows(),
        "input matrix has {} rows, system matrix has {}",
        b.rows(),
        a.rows()
    );
    ensure!(t.is_finite(), "time must be finite, got {t}");
    ensure!(terms >= 1, "series needs at least one term");

    let n = a.rows();
    let at = a.scale(t);
    let mut power = Matrix::identity(n); // (A·t)^{k-1}
    let mut sum = Matrix::zeros(n, n);
    let mut factorial = 1.0;
    for k in 1..=terms {
        factorial *= k as Real;
        sum = &sum + &power.scale(1.0 / factorial);
        if k < terms {
            power = &power * &at;
        }
    }
    let integral = (&sum * b).scale(t);
    if !integral.is_finite() {
        return Err(Error::Overflow(format!(
            "series integral exceeds the range of f64 (‖A·t‖₁ = {:e})",
            at.norm_one()
        )));
    }
    Ok(integral)
}

/// Singular values of `m` in descending order.
///
/// `max_iterations == 0` lets the decomposition iterate until convergence.
pub fn singular_values(m: &Matrix, max_iterations: usize) -> Result<Array> {
    if !m.is_finite() {
        return Err(Error::Factorization(format!(
            "{}×{} matrix has non-finite entries",
            m.rows(),
            m.cols()
        )));
    }
    if m.is_empty() {
        return Ok(Array::zeros(0));
    }
    let svd = m
        .inner()
        .clone()
        .try_svd(false, false, Real::EPSILON, max_iterations)
        .ok_or_else(|| {
            Error::Factorization(format!(
                "SVD of {}×{} matrix did not converge in {max_iterations} iterations",
                m.rows(),
                m.cols()
            ))
        })?;
    Ok(Array::from(svd.singular_values))
}

/// Rank of a matrix (number of singular values strictly above `tolerance`).
pub fn numerical_rank(m: &Matrix, tolerance: Real) -> Result<usize> {
    rank_of(m, tolerance, DEFAULT_SVD_MAX_ITERATIONS)
}

/// [`numerical_rank`] with tolerance and iteration cap taken from `settings`.
pub fn numerical_rank_with(m: &Matrix, settings: &NumericalSettings) -> Result<usize> {
    rank_of(m, settings.rank_tolerance, settings.svd_max_iterations)
}

fn rank_of(m: &Matrix, tolerance: Real, max_iterations: usize) -> Result<usize> {
    let sv = singular_values(m, max_iterations)?;
    let rank = sv.iter().filter(|&&s| s > tolerance).count();
    tracing::trace!(
        rows = m.rows(),
        cols = m.cols(),
        tolerance,
        rank,
        "numerical rank"
    );
    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn exponential_at_zero_is_identity() {
        let a = Matrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, -4.0, 5.0, 6.0, 7.0, 8.0, -9.0]);
        let e = matrix_exponential(&a, 0.0).unwrap();
        assert!(e.close_to(&Matrix::identity(3), 1e-12), "exp(0) = {e}");
    }

    #[test]
    fn exponential_of_diagonal() {
        let a = Matrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, -2.0]);
        let e = matrix_exponential(&a, 0.5).unwrap();
        assert_abs_diff_eq!(e[(0, 0)], 0.5_f64.exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(e[(1, 1)], (-1.0_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(e[(0, 1)], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn exponential_of_rotation_generator() {
        // exp([[0, -w], [w, 0]] t) is a rotation by w·t
        let w = 2.0;
        let t = 0.3;
        let a = Matrix::from_row_slice(2, 2, &[0.0, -w, w, 0.0]);
        let e = matrix_exponential(&a, t).unwrap();
        let (s, c) = (w * t).sin_cos();
        let expected = Matrix::from_row_slice(2, 2, &[c, -s, s, c]);
        assert!(e.close_to(&expected, 1e-10), "got {e}");
    }

    #[test]
    fn exponential_of_defective_matrix() {
        // Jordan block: exp([[l, 1], [0, l]] t) = e^{lt} [[1, t], [0, 1]]
        let l = -0.7;
        let t = 1.5;
        let a = Matrix::from_row_slice(2, 2, &[l, 1.0, 0.0, l]);
        let e = matrix_exponential(&a, t).unwrap();
        let f = (l * t).exp();
        let expected = Matrix::from_row_slice(2, 2, &[f, f * t, 0.0, f]);
        assert!(e.close_to(&expected, 1e-10), "got {e}");
    }

    #[test]
    fn exponential_rejects_bad_input() {
        let rect = Matrix::zeros(2, 3);
        assert_eq!(
            matrix_exponential(&rect, 1.0),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
        let a = Matrix::identity(2);
        assert!(matches!(
            matrix_exponential(&a, Real::INFINITY),
            Err(Error::Precondition(_))
        ));
        let mut nan = Matrix::identity(2);
        nan[(1, 0)] = Real::NAN;
        assert!(matrix_exponential(&nan, 1.0).is_err());
    }

    #[test]
    fn exponential_of_empty_matrix() {
        let e = matrix_exponential(&Matrix::zeros(0, 0), 1.0).unwrap();
        assert!(e.is_empty());
    }

    #[test]
    fn exponential_of_large_argument_matches_closed_form() {
        // e^700 is close to the top of the f64 range
        let a = Matrix::from_row_slice(2, 2, &[700.0, 0.0, 0.0, -700.0]);
        let e = matrix_exponential(&a, 1.0).unwrap();
        assert!((e[(0, 0)] / 700.0_f64.exp() - 1.0).abs() < 1e-10, "got {e}");
        assert!(((e[(1, 1)] / (-700.0_f64).exp()) - 1.0).abs() < 1e-10, "got {e}");
        assert_eq!(e[(0, 1)], 0.0);
    }

    #[test]
    fn exponential_of_scaled_triangular_matrix() {
        // exp([[a, 1], [0, b]] t) has off-diagonal (e^{at} - e^{bt}) / (a - b)
        let (a, b, t) = (-2.0, -3.0, 5.0);
        let m = Matrix::from_row_slice(2, 2, &[a, 1.0, 0.0, b]);
        let e = matrix_exponential(&m, t).unwrap();
        let (ea, eb) = ((a * t).exp(), (b * t).exp());
        let expected = Matrix::from_row_slice(2, 2, &[ea, (ea - eb) / (a - b), 0.0, eb]);
        assert!(e.close_to(&expected, 1e-14), "got {e}");
    }

    #[test]
    fn exponential_overflow_is_an_error() {
        let cases = [
            Matrix::identity(2).scale(1e20),
            Matrix::from_row_slice(2, 2, &[1e10; 4]),
            Matrix::from_row_slice(2, 2, &[1e50; 4]),
            Matrix::from_row_slice(2, 2, &[1e150; 4]),
            Matrix::from_row_slice(2, 2, &[1e300; 4]),
        ];
        for a in &cases {
            assert!(
                matches!(matrix_exponential(a, 1.0), Err(Error::Overflow(_))),
                "A =\n{a}"
            );
        }
        // M·t is itself out of range
        let a = Matrix::identity(2).scale(1e300);
        assert!(matches!(
            matrix_exponential(&a, 1e10),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn stiff_stable_exponential_decays_to_zero() {
        for rate in [-1e20, -1e50, -1e300] {
            let a = Matrix::identity(2).scale(rate);
            let e = matrix_exponential(&a, 1.0).unwrap();
            assert!(e.close_to(&Matrix::zeros(2, 2), 1e-300), "rate {rate}: {e}");
        }
    }

    #[test]
    fn integral_overflow_is_an_error() {
        let a = Matrix::identity(2).scale(-1e50);
        let b = Matrix::from_row_slice(2, 1, &[0.0, 1.0]);
        assert!(matches!(
            truncated_convolution_integral(&a, &b, 1.0, 10),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn integral_of_double_integrator() {
        let dt = 0.1;
        let a = Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let b = Matrix::from_row_slice(2, 1, &[0.0, 1.0]);
        let bd = truncated_convolution_integral(&a, &b, dt, 10).unwrap();
        assert_eq!(bd.shape(), (2, 1));
        assert_abs_diff_eq!(bd[(0, 0)], 0.5 * dt * dt, epsilon = 1e-12);
        assert_abs_diff_eq!(bd[(1, 0)], dt, epsilon = 1e-12);
    }

    #[test]
    fn integral_of_scalar_decay_matches_closed_form() {
        // ∫₀ᵗ e^{aτ} dτ = (e^{at} - 1) / a
        let (a, t) = (-0.5, 0.2);
        let am = Matrix::from_row_slice(1, 1, &[a]);
        let b = Matrix::from_row_slice(1, 2, &[1.0, 3.0]);
        let bd = truncated_convolution_integral(&am, &b, t, 10).unwrap();
        let exact = ((a * t).exp() - 1.0) / a;
        assert_abs_diff_eq!(bd[(0, 0)], exact, epsilon = 1e-12);
        assert_abs_diff_eq!(bd[(0, 1)], 3.0 * exact, epsilon = 1e-12);
    }

    #[test]
    fn integral_with_one_term_is_rectangle_rule() {
        let a = Matrix::from_row_slice(1, 1, &[4.0]);
        let b = Matrix::from_row_slice(1, 1, &[2.0]);
        let bd = truncated_convolution_integral(&a, &b, 0.5, 1).unwrap();
        assert_abs_diff_eq!(bd[(0, 0)], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn integral_rejects_bad_shapes() {
        let a = Matrix::identity(2);
        let b = Matrix::zeros(3, 1);
        assert!(matches!(
            truncated_convolution_integral(&a, &b, 0.1, 10),
            Err(Error::DimensionMismatch(_))
        ));
        assert!(matches!(
            truncated_convolution_integral(&Matrix::zeros(2, 3), &b, 0.1, 10),
            Err(Error::NotSquare { .. })
        ));
        assert!(truncated_convolution_integral(&a, &Matrix::zeros(2, 1), 0.1, 0).is_err());
    }

    #[test]
    fn singular_values_descending() {
        let m = Matrix::from_row_slice(2, 2, &[3.0, 0.0, 0.0, 4.0]);
        let sv = singular_values(&m, 0).unwrap();
        assert_abs_diff_eq!(sv[0], 4.0, epsilon = 1e-10);
        assert_abs_diff_eq!(sv[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn rank_test() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(numerical_rank(&m, 1e-8).unwrap(), 1);
        let m2 = Matrix::identity(2);
        assert_eq!(numerical_rank(&m2, 1e-8).unwrap(), 2);
        let wide = Matrix::from_row_slice(2, 3, &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(numerical_rank(&wide, 1e-8).unwrap(), 2);
        assert_eq!(numerical_rank(&Matrix::zeros(3, 2), 1e-8).unwrap(), 0);
        assert_eq!(numerical_rank(&Matrix::zeros(0, 0), 1e-8).unwrap(), 0);
    }

    #[test]
    fn rank_counts_strictly_above_tolerance() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1e-9]);
        assert_eq!(numerical_rank(&m, 1e-8).unwrap(), 1);
        let settings = NumericalSettings::default().with_rank_tolerance(1e-10);
        assert_eq!(numerical_rank_with(&m, &settings).unwrap(), 2);
    }

    #[test]
    fn rank_of_non_finite_matrix_fails() {
        let mut m = Matrix::identity(2);
        m[(0, 0)] = Real::INFINITY;
        assert!(matches!(
            numerical_rank(&m, 1e-8),
            Err(Error::Factorization(_))
        ));
    }
}
