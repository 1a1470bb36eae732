//! Capability trait consumed by the BRB engine.

use crate::error::CallbackResult;
use crate::region::Region;

/// Defines a maximization problem for Branch-Reduce-Bound.
///
/// The engine only talks to the problem through these hooks. Most problems
/// do not implement this trait directly but go through one of the
/// canonical-form adapters, [`Mmp`](crate::mmp::Mmp) or
/// [`MmpConstrained`](crate::mmp::MmpConstrained).
///
/// # Contract
///
/// - [`bound`](Self::bound) must never underestimate the best feasible
///   objective value inside the box. Pruning is only sound if it holds.
/// - [`is_empty`](Self::is_empty) may only return `true` for boxes that
///   contain no feasible point.
/// - [`reduce`](Self::reduce) may only shrink the box, and only cut off
///   points that are infeasible or whose objective lies below `gamma`.
///
/// Callbacks are evaluated in order and the first error aborts the run.
pub trait BrbProblem<const D: usize> {
    /// Admissible upper bound of the objective over `region`.
    fn bound(&self, region: &Region<D>) -> CallbackResult<f64>;

    /// Cheap test proving that `region` holds no feasible point.
    fn is_empty(&self, _region: &Region<D>) -> CallbackResult<bool> {
        Ok(false)
    }

    /// Candidate point inside `region`. Only trusted after
    /// [`is_feasible`](Self::is_feasible) accepts it.
    fn feasible_point(&self, region: &Region<D>) -> [f64; D];

    /// Whether `x` is feasible.
    fn is_feasible(&self, x: &[f64; D]) -> CallbackResult<bool>;

    /// True objective value at `x`.
    fn objective(&self, x: &[f64; D]) -> CallbackResult<f64>;

    /// Fraction `alpha` in `[0, 1]` of the edge in coordinate `i` that has
    /// to stay above the lower bound: `lb[i] = ub[i] - alpha * (ub[i] - lb[i])`.
    ///
    /// `1.0` keeps the lower bound.
    fn reduce_lower(
        &self,
        _i: usize,
        _gamma: f64,
        _region: &Region<D>,
        _tol: f64,
    ) -> CallbackResult<f64> {
        Ok(1.0)
    }

    /// Fraction `beta` in `[0, 1]` of the edge in coordinate `i` that has
    /// to stay below the upper bound: `ub[i] = lb[i] + beta * (ub[i] - lb[i])`.
    ///
    /// `1.0` keeps the upper bound.
    fn reduce_upper(
        &self,
        _i: usize,
        _gamma: f64,
        _region: &Region<D>,
        _tol: f64,
    ) -> CallbackResult<f64> {
        Ok(1.0)
    }

    /// Shrinks `region` towards the part that can still beat `gamma`.
    ///
    /// Lower bounds are tightened first for all coordinates, then upper
    /// bounds, each step seeing the box as already updated. The box never
    /// grows: fractions are clamped to `[0, 1]` and rounding cannot move a
    /// bound outwards.
    fn reduce(&self, region: &mut Region<D>, gamma: f64, tol: f64) -> CallbackResult<()> {
        for i in 0..D {
            let alpha = self.reduce_lower(i, gamma, region, tol)?.clamp(0.0, 1.0);
            let lb = region.ub[i] - alpha * region.width(i);
            region.lb[i] = lb.max(region.lb[i]);
        }

        for i in 0..D {
            let beta = self.reduce_upper(i, gamma, region, tol)?.clamp(0.0, 1.0);
            let ub = region.lb[i] + beta * region.width(i);
            region.ub[i] = ub.min(region.ub[i]);
        }

        Ok(())
    }
}

/// Boxes produced by the latest branching step.
///
/// The root iteration processes one box, every later iteration the two
/// halves of the popped box; neither case touches the heap.
#[derive(Debug, Clone, Copy)]
pub enum WorkingSet<const D: usize> {
    /// The initial box.
    One(Region<D>),
    /// Both halves of a split box.
    Two([Region<D>; 2]),
}

impl<const D: usize> WorkingSet<D> {
    /// Boxes in processing order.
    pub fn as_slice(&self) -> &[Region<D>] {
        match self {
            WorkingSet::One(r) => std::slice::from_ref(r),
            WorkingSet::Two(rs) => rs,
        }
    }
}
