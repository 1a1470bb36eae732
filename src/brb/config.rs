//! BRB configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frontier::Traversal;
use crate::tolerance::Tolerance;

/// Configuration for the Branch-Reduce-Bound algorithm.
///
/// # Examples
///
/// ```
/// use u_monotonic::brb::BrbConfig;
/// use u_monotonic::Tolerance;
///
/// let config = BrbConfig::default()
///     .with_epsilon(1e-3)
///     .with_tolerance(Tolerance::Absolute)
///     .with_pruning(true)
///     .with_max_iterations(1_000_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrbConfig {
    /// Requested precision. Interpreted according to [`tolerance`](Self::tolerance).
    pub epsilon: f64,

    /// Relative or absolute precision.
    pub tolerance: Tolerance,

    /// Shrink boxes before queueing them.
    pub reduction: bool,

    /// Bisection stopping width for box reduction, as a fraction of the
    /// unit search interval. 0.1 means about four predicate evaluations
    /// per bound.
    pub reduction_tol: f64,

    /// Periodically sweep the frontier for boxes that fell below the
    /// acceptance threshold after an incumbent improvement.
    pub pruning: bool,

    /// Iterations without improvement before a pruning sweep runs.
    pub prune_interval: u64,

    /// Frontier ordering.
    pub traversal: Traversal,

    /// Maximum number of iterations. 0 = no limit.
    pub max_iterations: u64,

    /// Log a progress line every this many iterations (if `verbose`).
    pub output_every: u64,

    /// Emit progress and summary lines through `log`.
    pub verbose: bool,
}

impl Default for BrbConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-2,
            tolerance: Tolerance::Relative,
            reduction: true,
            reduction_tol: 0.1,
            pruning: false,
            prune_interval: 10_000,
            traversal: Traversal::BestBound,
            max_iterations: 0,
            output_every: 1_000_000,
            verbose: false,
        }
    }
}

impl BrbConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_reduction(mut self, enabled: bool) -> Self {
        self.reduction = enabled;
        self
    }

    pub fn with_reduction_tol(mut self, tol: f64) -> Self {
        self.reduction_tol = tol;
        self
    }

    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn with_prune_interval(mut self, n: u64) -> Self {
        self.prune_interval = n;
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_output_every(mut self, n: u64) -> Self {
        self.output_every = n;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if !(self.reduction_tol > 0.0 && self.reduction_tol < 1.0) {
            return Err(format!(
                "reduction_tol must be in (0, 1), got {}",
                self.reduction_tol
            ));
        }
        if self.prune_interval == 0 {
            return Err("prune_interval must be at least 1".into());
        }
        if self.output_every == 0 {
            return Err("output_every must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrbConfig::default();
        assert!((config.epsilon - 1e-2).abs() < 1e-15);
        assert_eq!(config.tolerance, Tolerance::Relative);
        assert!(config.reduction);
        assert!(!config.pruning);
        assert_eq!(config.prune_interval, 10_000);
        assert!((config.reduction_tol - 0.1).abs() < 1e-15);
        assert_eq!(config.traversal, Traversal::BestBound);
        assert_eq!(config.max_iterations, 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(BrbConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        assert!(BrbConfig::default().with_epsilon(0.0).validate().is_err());
        assert!(BrbConfig::default().with_epsilon(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_bad_reduction_tol() {
        assert!(BrbConfig::default().with_reduction_tol(0.0).validate().is_err());
        assert!(BrbConfig::default().with_reduction_tol(1.0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_intervals() {
        assert!(BrbConfig::default().with_prune_interval(0).validate().is_err());
        assert!(BrbConfig::default().with_output_every(0).validate().is_err());
    }
}
