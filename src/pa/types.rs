//! Problem trait and vertex types for Polyblock Approximation.

use crate::error::CallbackResult;
use crate::region::le_all;

/// Defines a monotonic maximization problem for Polyblock Approximation.
///
/// The problem is `max f(x) s.t. x in G ∩ H` where `f` is increasing,
/// `G` is a normal (downward closed) set inside the box `[0, ub]` and `H`
/// is a reverse normal (upward closed) set.
pub trait PolyblockProblem<const D: usize> {
    /// Increasing objective `f`.
    fn objective(&self, x: &[f64; D]) -> CallbackResult<f64>;

    /// Membership in the normal set `G`.
    fn in_normal_set(&self, x: &[f64; D]) -> CallbackResult<bool>;

    /// Membership in the reverse normal set `H`. Defaults to everything.
    fn in_feasible_set(&self, _x: &[f64; D]) -> CallbackResult<bool> {
        Ok(true)
    }

    /// Projects `vertex` (outside `G`) onto the upper boundary of `G`.
    ///
    /// Must be deterministic for a fixed vertex, and the boundary point
    /// must lie strictly below `vertex` in every coordinate for the
    /// vertex to be refined. Problems without a dedicated oracle can use
    /// [`radial_projection`](super::radial_projection).
    fn project(&self, vertex: &[f64; D]) -> CallbackResult<Projection<D>>;
}

/// Output of a projection oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<const D: usize> {
    /// Point on (or just outside) the upper boundary of `G`. New vertices
    /// are generated from its coordinates.
    pub boundary: [f64; D],
    /// Point of `G` close to `boundary`, tried as incumbent if it lies in
    /// `H`.
    pub candidate: [f64; D],
}

/// Polyblock vertex with its cached objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<const D: usize> {
    pub point: [f64; D],
    pub obj: f64,
}

impl<const D: usize> Vertex<D> {
    pub fn new(point: [f64; D], obj: f64) -> Self {
        Self { point, obj }
    }

    /// Whether the box `[0, self]` lies inside `[0, other]` without being
    /// equal to it, i.e. `self <= other` componentwise and `self != other`.
    pub fn dominated_by(&self, other: &Vertex<D>) -> bool {
        le_all(&self.point, &other.point) && self.point != other.point
    }
}

/// Removes every vertex whose box is contained in another vertex's box.
///
/// Vertices dominated by another vertex of the set are dropped, and of
/// several vertices at the same point only the first is kept. Afterwards
/// no vertex is componentwise below another one. Relative order of the
/// survivors is preserved.
pub fn remove_dominated<const D: usize>(vertices: &mut Vec<Vertex<D>>) {
    let points: Vec<[f64; D]> = vertices.iter().map(|v| v.point).collect();

    let mut idx = 0;
    vertices.retain(|v| {
        let i = idx;
        idx += 1;

        !points.iter().enumerate().any(|(j, p)| {
            j != i && le_all(&v.point, p) && (v.point != *p || j < i)
        })
    });
}
