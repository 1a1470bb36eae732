//! Line-search projection onto a normal set.

use super::types::{PolyblockProblem, Projection};
use crate::error::CallbackResult;
use crate::mmp::bisect_bracket;

/// Projects `vertex` onto the boundary of the normal set along the segment
/// from `origin`, using only [`PolyblockProblem::in_normal_set`].
///
/// The segment parameter is bisected until the bracket is narrower than
/// `tol`. The returned `boundary` is the outer end of the bracket (outside
/// the normal set unless `vertex` itself is inside) and `candidate` the
/// inner end (inside the normal set). If `vertex` is inside, both are
/// `vertex`; if `origin` is outside, both are `origin`.
///
/// `origin` should lie strictly below the lower corner of the search
/// domain. A vertex sharing a coordinate with `origin` projects onto a
/// point with the same coordinate and is never refined, so the run stalls
/// on it. Pair a shifted origin with a
/// [`PolyblockProblem::in_feasible_set`] that rejects points below the
/// domain.
///
/// # Examples
///
/// ```
/// use u_monotonic::pa::{radial_projection, PolyblockProblem, Projection};
/// use u_monotonic::CallbackResult;
///
/// /// Unit simplex in two dimensions.
/// struct Simplex;
///
/// impl PolyblockProblem<2> for Simplex {
///     fn objective(&self, x: &[f64; 2]) -> CallbackResult<f64> {
///         Ok(x[0] + x[1])
///     }
///
///     fn in_normal_set(&self, x: &[f64; 2]) -> CallbackResult<bool> {
///         Ok(x[0] + x[1] <= 1.0)
///     }
///
///     fn project(&self, v: &[f64; 2]) -> CallbackResult<Projection<2>> {
///         radial_projection(self, v, &[0.0; 2], 1e-9)
///     }
/// }
///
/// let p = Simplex.project(&[1.0, 1.0])?;
/// assert!((p.boundary[0] - 0.5).abs() < 1e-8);
/// assert!(p.candidate[0] + p.candidate[1] <= 1.0);
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
/// ```
pub fn radial_projection<P, const D: usize>(
    problem: &P,
    vertex: &[f64; D],
    origin: &[f64; D],
    tol: f64,
) -> CallbackResult<Projection<D>>
where
    P: PolyblockProblem<D> + ?Sized,
{
    if problem.in_normal_set(vertex)? {
        return Ok(Projection {
            boundary: *vertex,
            candidate: *vertex,
        });
    }
    if !problem.in_normal_set(origin)? {
        return Ok(Projection {
            boundary: *origin,
            candidate: *origin,
        });
    }

    let at = |t: f64| -> [f64; D] {
        let mut x = *origin;
        for i in 0..D {
            x[i] += t * (vertex[i] - origin[i]);
        }
        x
    };

    let (lo, hi) = bisect_bracket(|t| problem.in_normal_set(&at(t)), tol)?;

    Ok(Projection {
        boundary: at(hi),
        candidate: at(lo),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quarter disc of radius 1.
    struct Disc;

    impl PolyblockProblem<2> for Disc {
        fn objective(&self, x: &[f64; 2]) -> CallbackResult<f64> {
            Ok(x[0] + x[1])
        }

        fn in_normal_set(&self, x: &[f64; 2]) -> CallbackResult<bool> {
            Ok(x[0] * x[0] + x[1] * x[1] <= 1.0)
        }

        fn project(&self, v: &[f64; 2]) -> CallbackResult<Projection<2>> {
            radial_projection(self, v, &[0.0; 2], 1e-10)
        }
    }

    #[test]
    fn test_projects_onto_circle() {
        let p = Disc.project(&[2.0, 2.0]).unwrap();
        let r = std::f64::consts::FRAC_1_SQRT_2;
        assert!((p.boundary[0] - r).abs() < 1e-8);
        assert!((p.boundary[1] - r).abs() < 1e-8);
        assert!(Disc.in_normal_set(&p.candidate).unwrap());
        assert!(!Disc.in_normal_set(&p.boundary).unwrap());
    }

    #[test]
    fn test_inside_vertex_is_its_own_projection() {
        let p = Disc.project(&[0.5, 0.5]).unwrap();
        assert_eq!(p.boundary, [0.5, 0.5]);
        assert_eq!(p.candidate, [0.5, 0.5]);
    }

    #[test]
    fn test_outside_origin() {
        let p = radial_projection(&Disc, &[3.0, 3.0], &[2.0, 0.0], 1e-6).unwrap();
        assert_eq!(p.boundary, [2.0, 0.0]);
        assert_eq!(p.candidate, [2.0, 0.0]);
    }

    #[test]
    fn test_oracle_error_propagates() {
        struct Broken;
        impl PolyblockProblem<1> for Broken {
            fn objective(&self, x: &[f64; 1]) -> CallbackResult<f64> {
                Ok(x[0])
            }
            fn in_normal_set(&self, x: &[f64; 1]) -> CallbackResult<bool> {
                if x[0] > 0.0 && x[0] < 1.0 {
                    Err("membership oracle failed".into())
                } else {
                    Ok(x[0] <= 0.0)
                }
            }
            fn project(&self, v: &[f64; 1]) -> CallbackResult<Projection<1>> {
                radial_projection(self, v, &[0.0], 1e-3)
            }
        }

        assert!(Broken.project(&[1.0]).is_err());
    }
}
