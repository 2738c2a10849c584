//! Error types for the state-advance core.

use thiserror::Error;

/// A run was configured with values the integrator cannot divide by or step with.
///
/// These surface at the call that received them (`start` or `step`) and leave the
/// rocket state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    /// Mass is zero, negative or NaN.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// Moment of inertia is zero, negative or NaN.
    #[error("moment of inertia must be positive, got {0}")]
    NonPositiveInertia(f64),

    /// Time step is zero, negative or not finite.
    #[error("time step must be positive and finite, got {0}")]
    BadTimeStep(f64),
}
