//! Capability traits shared by continuous and discrete systems.
//!
//! Code that only needs to step or inspect a model (a filter, a simulator)
//! takes `impl Predictor` or `&dyn Lti` instead of a concrete system type.

use lti_core::Result;
use lti_math::Array;

/// A linear time-invariant system in state-space form.
pub trait Lti {
    /// Whether every state can be reached through the inputs.
    fn controllable(&self) -> Result<bool>;

    /// Whether the state can be reconstructed from the outputs.
    fn observable(&self) -> Result<bool>;

    /// Output `y = C·x + D·u`.
    fn response(&self, x: &Array, u: &Array) -> Result<Array>;
}

/// A discretized system that can advance its state by one sample.
pub trait Predictor: Lti {
    /// Next state `x(k+1)` from the current state and input.
    fn predict(&self, x: &Array, u: &Array) -> Result<Array>;
}
