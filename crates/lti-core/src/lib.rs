//! # lti-core
//!
//! Core types and error definitions for the LTI workspace.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – type aliases, the error taxonomy and the explicit
//! numerical settings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_dims!` macros.
pub mod errors;

/// Numerical tolerances and truncation orders.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement (sampling interval, horizon).
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::NumericalSettings;
