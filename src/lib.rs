//! Global optimization for monotonic programs.
//!
//! Provides two exact engines for maximization problems with monotone
//! structure:
//!
//! - **Branch-Reduce-Bound (BRB)**: best-first branch-and-bound over boxes
//!   with admissible bounds, bisection-based box reduction and a recycled
//!   box arena. Problems in mixed monotonic canonical form plug in through
//!   the [`mmp`] adapters.
//! - **Polyblock Approximation (PA)**: vertex-based outer approximation of
//!   a normal feasible set, driven by a caller-supplied projection oracle.
//!
//! Both engines share the [`threshold`] acceptance rule, report the same
//! [`Status`] and [`RunStats`], and propagate callback failures unchanged
//! as [`MonoError::Callback`].
//!
//! # Architecture
//!
//! Leaves first: [`tolerance`] and [`arena`] have no dependencies,
//! [`frontier`] orders arena slots, [`brb`] drives both, [`mmp`] adapts
//! canonical-form problems to [`brb`]. [`pa`] only shares the tolerance
//! rule and result vocabulary. Everything runs on the calling thread.
//!
//! # Example
//!
//! ```
//! use u_monotonic::brb::{BrbConfig, BrbRunner};
//! use u_monotonic::mmp::{Mmp, MmpObjective};
//! use u_monotonic::{CallbackResult, Status};
//!
//! /// Sum rate of two interfering links, each link's power interferes
//! /// with the other.
//! struct SumRate;
//!
//! impl MmpObjective<2> for SumRate {
//!     fn mmp_obj(&self, x: &[f64; 2], y: &[f64; 2]) -> CallbackResult<f64> {
//!         let r0 = (1.0 + x[0] / (1.0 + 0.5 * y[1])).log2();
//!         let r1 = (1.0 + x[1] / (1.0 + 0.5 * y[0])).log2();
//!         Ok(r0 + r1)
//!     }
//! }
//!
//! let result = BrbRunner::run(&Mmp::new(SumRate), [0.0; 2], [10.0; 2], &BrbConfig::default())?;
//! assert_eq!(result.status, Status::Optimal);
//! # Ok::<(), u_monotonic::MonoError>(())
//! ```

pub mod arena;
pub mod brb;
pub mod error;
pub mod frontier;
pub mod mmp;
pub mod pa;
pub mod region;
pub mod status;
pub mod tolerance;

pub use arena::{BoxArena, Slot};
pub use error::{CallbackError, CallbackResult, MonoError, MonoResult};
pub use frontier::{Frontier, Ranked, Traversal};
pub use region::{PBox, Region, Storage};
pub use status::{RunStats, Status};
pub use tolerance::{threshold, Tolerance};
