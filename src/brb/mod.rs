//! Branch-Reduce-Bound (BRB).
//!
//! An exact branch-and-bound procedure over boxes. Every box carries an
//! admissible upper bound of the objective; boxes that cannot beat the
//! incumbent by the requested precision are discarded, the rest are
//! shrunk using monotonicity and queued. The best box is bisected along
//! its longest edge until no queued bound beats the incumbent.
//!
//! The engine consumes problems through the [`BrbProblem`] trait. Problems
//! in monotonic canonical form usually implement
//! [`MmpObjective`](crate::mmp::MmpObjective) and go through the
//! [`Mmp`](crate::mmp::Mmp) / [`MmpConstrained`](crate::mmp::MmpConstrained)
//! adapters instead.
//!
//! # References
//!
//! - Tuy, Al-Khayyal & Thach (2005), "Monotonic Optimization: Branch and
//!   Cut Methods"
//! - Matthiesen, Hellings, Jorswieck & Utschick (2020), "Mixed Monotonic
//!   Programming for Fast Global Optimization"

mod config;
mod runner;
mod types;

pub use config::BrbConfig;
pub use runner::{BrbResult, BrbRunner};
pub use types::{BrbProblem, WorkingSet};
