//! Adapters from canonical form to [`BrbProblem`].

use super::reduction::bisect_zero;
use super::types::{MmpConstraints, MmpObjective};
use crate::brb::BrbProblem;
use crate::error::CallbackResult;
use crate::region::Region;

/// Upper corner with coordinate `i` pulled down by `t` of the edge.
fn pulled_down<const D: usize>(region: &Region<D>, i: usize, t: f64) -> [f64; D] {
    let mut p = region.ub;
    p[i] -= t * region.width(i);
    p
}

/// Lower corner with coordinate `i` pushed up by `t` of the edge.
fn pushed_up<const D: usize>(region: &Region<D>, i: usize, t: f64) -> [f64; D] {
    let mut p = region.lb;
    p[i] += t * region.width(i);
    p
}

/// Mixed monotonic program constrained only by the search box.
///
/// Every box is feasible and its lower corner serves as feasible witness.
#[derive(Debug, Clone)]
pub struct Mmp<P> {
    inner: P,
}

impl<P> Mmp<P> {
    /// Wraps a canonical objective.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped objective.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the objective.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: MmpObjective<D>, const D: usize> BrbProblem<D> for Mmp<P> {
    fn bound(&self, region: &Region<D>) -> CallbackResult<f64> {
        self.inner.mmp_obj(&region.ub, &region.lb)
    }

    fn feasible_point(&self, region: &Region<D>) -> [f64; D] {
        region.lb
    }

    fn is_feasible(&self, _x: &[f64; D]) -> CallbackResult<bool> {
        Ok(true)
    }

    fn objective(&self, x: &[f64; D]) -> CallbackResult<f64> {
        self.inner.mmp_obj(x, x)
    }

    fn reduce_lower(
        &self,
        i: usize,
        gamma: f64,
        region: &Region<D>,
        tol: f64,
    ) -> CallbackResult<f64> {
        bisect_zero(
            |alpha| {
                let p = pulled_down(region, i, alpha);
                Ok(self.inner.mmp_obj(&p, &region.lb)? >= gamma)
            },
            tol,
        )
    }

    fn reduce_upper(
        &self,
        i: usize,
        gamma: f64,
        region: &Region<D>,
        tol: f64,
    ) -> CallbackResult<f64> {
        bisect_zero(
            |beta| {
                let p = pushed_up(region, i, beta);
                Ok(self.inner.mmp_obj(&region.ub, &p)? >= gamma)
            },
            tol,
        )
    }
}

/// Mixed monotonic program with monotone constraints.
///
/// Boxes failing `constraints(lb, ub)` are discarded as empty; the feasible
/// witness comes from [`MmpConstraints::feasible_point`].
#[derive(Debug, Clone)]
pub struct MmpConstrained<P> {
    inner: P,
}

impl<P> MmpConstrained<P> {
    /// Wraps a constrained canonical problem.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped problem.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the problem.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: MmpConstraints<D>, const D: usize> BrbProblem<D> for MmpConstrained<P> {
    fn bound(&self, region: &Region<D>) -> CallbackResult<f64> {
        self.inner.mmp_obj(&region.ub, &region.lb)
    }

    fn is_empty(&self, region: &Region<D>) -> CallbackResult<bool> {
        Ok(!self.inner.constraints(&region.lb, &region.ub)?)
    }

    fn feasible_point(&self, region: &Region<D>) -> [f64; D] {
        self.inner.feasible_point(region)
    }

    fn is_feasible(&self, x: &[f64; D]) -> CallbackResult<bool> {
        self.inner.constraints(x, x)
    }

    fn objective(&self, x: &[f64; D]) -> CallbackResult<f64> {
        self.inner.mmp_obj(x, x)
    }

    fn reduce_lower(
        &self,
        i: usize,
        gamma: f64,
        region: &Region<D>,
        tol: f64,
    ) -> CallbackResult<f64> {
        bisect_zero(
            |alpha| {
                let p = pulled_down(region, i, alpha);
                Ok(self.inner.mmp_obj(&p, &region.lb)? >= gamma
                    && self.inner.constraints(&region.lb, &p)?)
            },
            tol,
        )
    }

    fn reduce_upper(
        &self,
        i: usize,
        gamma: f64,
        region: &Region<D>,
        tol: f64,
    ) -> CallbackResult<f64> {
        bisect_zero(
            |beta| {
                let p = pushed_up(region, i, beta);
                Ok(self.inner.mmp_obj(&region.ub, &p)? >= gamma
                    && self.inner.constraints(&p, &region.ub)?)
            },
            tol,
        )
    }
}
