//! Canonical-form traits for mixed monotonic programs.

use crate::error::CallbackResult;
use crate::region::Region;

/// Objective of a mixed monotonic program in canonical form.
///
/// `mmp_obj(x, y)` must be non-decreasing in `x` and non-increasing in
/// `y`, and `mmp_obj(x, x)` must equal the true objective at `x`. Then
/// `mmp_obj(ub, lb)` bounds the objective over the box `[lb, ub]`.
///
/// # Examples
///
/// ```
/// use u_monotonic::mmp::MmpObjective;
/// use u_monotonic::CallbackResult;
///
/// /// log2(1 + x0 / (1 + x1)) with interference x1
/// struct Rate;
///
/// impl MmpObjective<2> for Rate {
///     fn mmp_obj(&self, x: &[f64; 2], y: &[f64; 2]) -> CallbackResult<f64> {
///         Ok((1.0 + x[0] / (1.0 + y[1])).log2())
///     }
/// }
/// ```
pub trait MmpObjective<const D: usize> {
    /// Canonical bifunction.
    fn mmp_obj(&self, x: &[f64; D], y: &[f64; D]) -> CallbackResult<f64>;
}

/// Monotone constraints on top of an [`MmpObjective`].
///
/// `constraints(x, y)` must be true exactly when every canonical
/// constraint function `g_i(x, y) <= 0`, with each `g_i` non-decreasing in
/// `x` and non-increasing in `y`. A point `x` is feasible iff
/// `constraints(x, x)`; a box `[lb, ub]` contains no feasible point if
/// `constraints(lb, ub)` fails.
pub trait MmpConstraints<const D: usize>: MmpObjective<D> {
    /// Whether all canonical constraints hold for the pair `(x, y)`.
    fn constraints(&self, x: &[f64; D], y: &[f64; D]) -> CallbackResult<bool>;

    /// Candidate feasible point inside `region`. Its feasibility is checked
    /// with [`constraints`](Self::constraints) before it is used.
    ///
    /// Defaults to the lower corner.
    fn feasible_point(&self, region: &Region<D>) -> [f64; D] {
        region.lb
    }
}
