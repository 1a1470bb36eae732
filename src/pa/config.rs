//! PA configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tolerance::Tolerance;

/// Configuration for Polyblock Approximation.
///
/// # Examples
///
/// ```
/// use u_monotonic::pa::PaConfig;
///
/// let config = PaConfig::default()
///     .with_epsilon(1e-3)
///     .with_partition_tol(1e-4)
///     .with_max_iterations(50_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaConfig {
    /// Requested precision.
    pub epsilon: f64,

    /// Relative or absolute precision.
    pub tolerance: Tolerance,

    /// Relative slack for the near-best vertex set: every vertex `v` with
    /// `(1 + partition_tol) * v.obj >= z.obj` is projected alongside the
    /// selected vertex `z`.
    pub partition_tol: f64,

    /// Maximum number of iterations. 0 = no limit.
    pub max_iterations: u64,

    /// Log a progress line every this many iterations (if `verbose`).
    pub output_every: u64,

    /// Emit progress and summary lines through `log`.
    pub verbose: bool,
}

impl Default for PaConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-2,
            tolerance: Tolerance::Relative,
            partition_tol: 1e-3,
            max_iterations: 0,
            output_every: 100,
            verbose: false,
        }
    }
}

impl PaConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_partition_tol(mut self, tol: f64) -> Self {
        self.partition_tol = tol;
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
        if !self.partition_tol.is_finite() || self.partition_tol < 0.0 {
            return Err(format!(
                "partition_tol must be non-negative, got {}",
                self.partition_tol
            ));
        }
        if self.output_every == 0 {
            return Err("output_every must be at least 1".into());
        }
        Ok(())
    }
}
