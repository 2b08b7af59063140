//! # lti-systems
//!
//! Continuous- and discrete-time linear time-invariant systems:
//!
//! * [`System`]: `x' = A·x + B·u`, `y = C·x + D·u`, validated at
//!   construction;
//! * [`Discrete`]: its zero-order-hold discretization, able to
//!   [`predict`](Discrete::predict) the next state;
//! * controllability and observability tests in [`analysis`];
//! * one-step covariance propagation in [`covariance`].
//!
//! ```
//! use lti_math::{Array, Matrix};
//! use lti_systems::{Covariance, System};
//!
//! let sys = System::new(
//!     Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]),
//!     Matrix::from_row_slice(2, 1, &[0.0, 1.0]),
//!     Matrix::from_row_slice(1, 2, &[1.0, 0.0]),
//!     Matrix::zeros(1, 1),
//! )?;
//! let discrete = sys.discretize(0.1)?;
//!
//! let x = discrete.predict(&Array::from_slice(&[0.0, 1.0]), &Array::from_slice(&[2.0]))?;
//! assert!((x[0] - 0.11).abs() < 1e-10);
//!
//! let p = Covariance::from_discrete(&discrete).predict(&Matrix::identity(2), None)?;
//! assert!(p.close_to(&p.transpose(), 1e-14));
//! # Ok::<(), lti_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Controllability and observability tests.
pub mod analysis;

/// Covariance propagation.
pub mod covariance;

/// Discrete-time systems.
pub mod discrete;

/// Zero-order-hold discretization.
pub mod discretization;

/// Continuous-time systems.
pub mod system;

/// `Lti` and `Predictor` capability traits.
pub mod traits;

pub use analysis::{controllable, must_controllable, must_observable, observable};
pub use covariance::{predict_covariance, Covariance};
pub use discrete::Discrete;
pub use discretization::{
    discretize, ideal_discretization, real_discretization, real_discretization_with,
};
pub use system::System;
pub use traits::{Lti, Predictor};
