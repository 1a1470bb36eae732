//! Run status and statistics shared by both engines.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of an optimization run.
///
/// `Unsolved` is the only non-terminal state; a finished run always
/// reports one of the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The run has not finished.
    Unsolved,
    /// The incumbent is optimal within the requested precision.
    Optimal,
    /// The search space was exhausted without finding a feasible point.
    Infeasible,
    /// The iteration cap was reached; the incumbent is the best found so far.
    MaxIterations,
}

impl Status {
    /// Whether the run ended in a state with a certified result.
    pub fn is_solved(&self) -> bool {
        matches!(self, Status::Optimal | Status::Infeasible)
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unsolved => "Unsolved",
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::MaxIterations => "Max Iterations",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters reported by both engines.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStats {
    /// Number of iterations executed.
    pub iterations: u64,

    /// Iteration in which the incumbent was last replaced (0 if never, or
    /// if it came from the start point).
    pub last_update: u64,

    /// Wall-clock time spent in the run.
    pub runtime: Duration,

    /// Peak number of boxes (frontier plus recycled buffers) or vertices
    /// held at once.
    pub peak_working_set: usize,
}

/// Writes a point as `[ x0 x1 ... ]`.
pub(crate) fn fmt_point(f: &mut fmt::Formatter<'_>, x: &[f64]) -> fmt::Result {
    f.write_str("[")?;
    for v in x {
        write!(f, " {v}")?;
    }
    f.write_str(" ]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Optimal.to_string(), "Optimal");
        assert_eq!(Status::MaxIterations.to_string(), "Max Iterations");
    }

    #[test]
    fn test_is_solved() {
        assert!(Status::Optimal.is_solved());
        assert!(Status::Infeasible.is_solved());
        assert!(!Status::Unsolved.is_solved());
        assert!(!Status::MaxIterations.is_solved());
    }
}
