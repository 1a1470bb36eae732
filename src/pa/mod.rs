//! Polyblock Approximation (PA).
//!
//! Outer approximation for monotonic optimization: the normal feasible set
//! is enclosed by a polyblock, a union of boxes `[0, v]` spanned by a
//! finite vertex set. Each iteration projects the most promising vertex
//! onto the boundary of the normal set and replaces the vertices above the
//! projection by tighter ones, until the best vertex is feasible or cannot
//! beat the incumbent by the requested precision.
//!
//! Problems implement [`PolyblockProblem`]; the projection oracle is often
//! an external solver, [`radial_projection`] covers the case where only a
//! membership test is available.
//!
//! # References
//!
//! - Tuy (2000), "Monotonic Optimization: Problems and Solution
//!   Approaches", SIAM J. Optim.
//! - Tuy, Minoux & Hoai-Phuong (2006), "Discrete Monotonic Optimization
//!   with Application to a Discrete Location Problem", SIAM J. Optim.

mod config;
mod projection;
mod runner;
mod types;

pub use config::PaConfig;
pub use projection::radial_projection;
pub use runner::{PaResult, PaRunner};
pub use types::{remove_dominated, PolyblockProblem, Projection, Vertex};
