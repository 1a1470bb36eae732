//! Acceptance threshold shared by both engines.
//!
//! A box or vertex whose upper bound falls strictly below
//! [`threshold`] cannot improve on the incumbent by more than the
//! requested precision and is discarded for good.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the precision `epsilon` is applied to the incumbent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tolerance {
    /// Multiplicative: `(1 + epsilon) * optval`.
    #[default]
    Relative,
    /// Additive: `optval + epsilon`.
    Absolute,
}

/// Minimum bound a box or vertex must keep to stay relevant.
///
/// With [`Tolerance::Relative`] and a zero incumbent the multiplicative
/// form would be a no-op, so machine epsilon is added instead.
///
/// # Examples
///
/// ```
/// use u_monotonic::{threshold, Tolerance};
///
/// assert_eq!(threshold(Tolerance::Absolute, 1.0, 0.5), 1.5);
/// assert_eq!(threshold(Tolerance::Relative, 2.0, 0.5), 3.0);
/// assert_eq!(threshold(Tolerance::Relative, 0.0, 0.5), f64::EPSILON);
/// ```
#[inline]
pub fn threshold(mode: Tolerance, optval: f64, epsilon: f64) -> f64 {
    match mode {
        Tolerance::Relative => {
            if optval != 0.0 {
                (1.0 + epsilon) * optval
            } else {
                optval + f64::EPSILON
            }
        }
        Tolerance::Absolute => optval + epsilon,
    }
}
