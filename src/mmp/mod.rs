//! Mixed monotonic programs in canonical form.
//!
//! A problem `max f(x) s.t. g(x) <= 0, x in [lb, ub]` is in mixed
//! monotonic canonical form if there is a bifunction `F(x, y)`,
//! non-decreasing in `x` and non-increasing in `y`, with `F(x, x) = f(x)`,
//! and likewise for every constraint. Then `F(ub, lb)` bounds `f` over
//! the box and the box can be reduced by bisecting along each edge.
//!
//! Implement [`MmpObjective`] (and [`MmpConstraints`] if there are
//! constraints beyond the box), wrap the problem in [`Mmp`] or
//! [`MmpConstrained`] and hand it to [`BrbRunner`](crate::brb::BrbRunner).
//!
//! # References
//!
//! - Matthiesen, Hellings, Jorswieck & Utschick (2020), "Mixed Monotonic
//!   Programming for Fast Global Optimization", IEEE Trans. Signal Process.

mod adapter;
mod reduction;
mod types;

pub use adapter::{Mmp, MmpConstrained};
pub use reduction::{bisect_bracket, bisect_zero, DEFAULT_TOL};
pub use types::{MmpConstraints, MmpObjective};
