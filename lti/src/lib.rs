//! # lti
//!
//! Linear time-invariant systems in state-space form:
//!
//! ```text
//! x' = A·x + B·u        x(k+1) = Ad·x(k) + Bd·u(k)
//! y  = C·x + D·u        y(k)   = C·x(k)  + D·u(k)
//! ```
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on the individual `lti-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! lti = "0.1"
//! ```
//!
//! ```rust
//! use lti::{Array, Matrix, Predictor, System};
//!
//! // double integrator: position and velocity driven by acceleration
//! let sys = System::new(
//!     Matrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]),
//!     Matrix::from_row_slice(2, 1, &[0.0, 1.0]),
//!     Matrix::from_row_slice(1, 2, &[1.0, 0.0]),
//!     Matrix::zeros(1, 1),
//! )?;
//! assert!(sys.controllable()? && sys.observable()?);
//!
//! let discrete = sys.discretize(0.1)?;
//! let next = Predictor::predict(&discrete, &Array::from_slice(&[0.0, 1.0]), &Array::from_slice(&[2.0]))?;
//! assert!((next[1] - 1.2).abs() < 1e-10);
//! # Ok::<(), lti::Error>(())
//! ```
//!
//! ## Logging
//!
//! Discretization and rank checks emit [`tracing`](https://docs.rs/tracing)
//! events (`debug`/`trace`, plus a `warn` when `‖A·dt‖` is too large for the
//! truncated series). Install any subscriber to see them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and numerical settings.
pub use lti_core as core;

/// Dense matrices and vectors, matrix exponential, series integral, rank.
pub use lti_math as math;

/// Continuous and discrete systems, discretization, covariance.
pub use lti_systems as systems;

pub use lti_core::{Error, NumericalSettings, Real, Result, Time};
pub use lti_math::{Array, Matrix};
pub use lti_systems::{Covariance, Discrete, Lti, Predictor, System};
