//! Axis-aligned boxes.
//!
//! - [`Region`]: a box in working precision (`f64`), handed to callbacks.
//! - [`PBox`]: a compact copy in a configurable [`Storage`] width, held by
//!   the [`BoxArena`](crate::BoxArena) while the box waits in the frontier.
//!
//! Both keep `lb[i] <= ub[i]` in every coordinate. The invariant is a
//! logic invariant: it is debug-asserted, never checked at runtime.

use std::fmt;

/// Scalar type used to store queued boxes.
///
/// Narrower storage shrinks the frontier's memory footprint; all
/// arithmetic still happens in `f64`.
pub trait Storage: Copy + Default + PartialOrd + fmt::Debug + 'static {
    /// Narrows a working value to storage width.
    fn from_f64(v: f64) -> Self;

    /// Widens a stored value to working precision.
    fn to_f64(self) -> f64;
}

impl Storage for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Storage for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// A box `[lb, ub]` in working precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region<const D: usize> {
    /// Lower corner.
    pub lb: [f64; D],
    /// Upper corner.
    pub ub: [f64; D],
}

impl<const D: usize> Region<D> {
    /// Creates a box from its corners.
    pub fn new(lb: [f64; D], ub: [f64; D]) -> Self {
        debug_assert!(
            lb.iter().zip(ub.iter()).all(|(l, u)| l <= u),
            "lb must not exceed ub"
        );
        Self { lb, ub }
    }

    /// Edge length in coordinate `i`.
    #[inline]
    pub fn width(&self, i: usize) -> f64 {
        self.ub[i] - self.lb[i]
    }

    /// Index and length of the longest edge. Ties go to the lowest index.
    pub fn widest(&self) -> (usize, f64) {
        let mut best = (0, f64::NEG_INFINITY);
        for i in 0..D {
            let w = self.width(i);
            if w > best.1 {
                best = (i, w);
            }
        }
        best
    }

    /// Bisects the longest edge, returning the lower and upper halves.
    pub fn split(&self) -> [Region<D>; 2] {
        let (jk, w) = self.widest();
        let mid = self.lb[jk] + w / 2.0;

        let mut lower = *self;
        lower.ub[jk] = mid;

        let mut upper = *self;
        upper.lb[jk] = mid;

        [lower, upper]
    }

    /// Whether `x` lies inside the box (boundary included).
    pub fn contains(&self, x: &[f64; D]) -> bool {
        (0..D).all(|i| self.lb[i] <= x[i] && x[i] <= self.ub[i])
    }

    /// Whether `other` lies inside this box.
    pub fn encloses(&self, other: &Region<D>) -> bool {
        self.contains(&other.lb) && self.contains(&other.ub)
    }
}

/// A box stored at reduced width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PBox<S: Storage, const D: usize> {
    /// Lower corner.
    pub lb: [S; D],
    /// Upper corner.
    pub ub: [S; D],
}

impl<S: Storage, const D: usize> Default for PBox<S, D> {
    fn default() -> Self {
        Self {
            lb: [S::default(); D],
            ub: [S::default(); D],
        }
    }
}

impl<S: Storage, const D: usize> PBox<S, D> {
    /// Overwrites this buffer with `region`.
    pub fn store(&mut self, region: &Region<D>) {
        for i in 0..D {
            self.lb[i] = S::from_f64(region.lb[i]);
            self.ub[i] = S::from_f64(region.ub[i]);
        }
    }

    /// Widens the stored box back to working precision.
    pub fn load(&self) -> Region<D> {
        let mut region = Region {
            lb: [0.0; D],
            ub: [0.0; D],
        };
        for i in 0..D {
            region.lb[i] = self.lb[i].to_f64();
            region.ub[i] = self.ub[i].to_f64();
        }
        region
    }
}

/// Elementwise comparison helpers for points.
pub(crate) fn le_all<const D: usize>(a: &[f64; D], b: &[f64; D]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x <= y)
}
