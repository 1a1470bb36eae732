//! Error types for the optimization engines.

use thiserror::Error;

/// Error raised by a problem callback.
///
/// Callbacks that talk to external numerical solvers box whatever error
/// the solver produces; the engines hand it back unmodified.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by problem callbacks.
pub type CallbackResult<T> = Result<T, CallbackError>;

/// Errors that abort an optimization run.
///
/// Hitting the iteration cap is not an error; it is reported through
/// [`Status::MaxIterations`](crate::Status::MaxIterations).
#[derive(Error, Debug)]
pub enum MonoError {
    /// Configuration rejected before the first iteration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Search domain has a lower bound above its upper bound (or a
    /// non-finite coordinate).
    #[error("Invalid bounds in dimension {dim}: lb = {lb}, ub = {ub}")]
    InvalidBounds {
        /// Offending coordinate index.
        dim: usize,
        /// Lower bound in that coordinate.
        lb: f64,
        /// Upper bound in that coordinate.
        ub: f64,
    },

    /// A problem callback failed; the run was aborted.
    #[error("Callback failed: {0}")]
    Callback(#[from] CallbackError),
}

/// Result type for engine operations.
pub type MonoResult<T> = Result<T, MonoError>;

/// Checks that `lb <= ub` holds coordinate-wise and that every coordinate
/// is finite.
pub(crate) fn check_bounds<const D: usize>(lb: &[f64; D], ub: &[f64; D]) -> MonoResult<()> {
    for dim in 0..D {
        let (l, u) = (lb[dim], ub[dim]);
        if !l.is_finite() || !u.is_finite() || l > u {
            return Err(MonoError::InvalidBounds { dim, lb: l, ub: u });
        }
    }
    Ok(())
}
