//! Bisection used by box reduction.

/// Default stopping width of [`bisect_zero`].
pub const DEFAULT_TOL: f64 = 0.1;

/// Locates the switch point of a monotone predicate on `[0, 1]`.
///
/// `pred` must hold on an initial segment of `[0, 1]` and fail beyond it.
/// The bracket is halved until it is narrower than `tol`, keeping the
/// lower end where `pred` holds. The **upper** end of the final bracket is
/// returned, so the result never lies below the true switch point: a box
/// edge cut at this fraction keeps every point that satisfies `pred`.
///
/// With `tol = 0.1` the predicate is evaluated four times. If `pred` holds
/// everywhere the result is `1.0`.
///
/// # Examples
///
/// ```
/// use u_monotonic::mmp::bisect_zero;
///
/// let t = bisect_zero(|t| Ok::<_, ()>(t <= 0.3), 0.1).unwrap();
/// assert!(t >= 0.3 && t - 0.3 <= 0.1);
/// ```
pub fn bisect_zero<F, E>(pred: F, tol: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<bool, E>,
{
    bisect_bracket(pred, tol).map(|(_, hi)| hi)
}

/// Like [`bisect_zero`] but returns the whole final bracket `(lo, hi)`.
///
/// `pred` held at every visited `lo` (or `lo == 0.0`) and failed at every
/// visited `hi` (or `hi == 1.0`).
pub fn bisect_bracket<F, E>(mut pred: F, tol: f64) -> Result<(f64, f64), E>
where
    F: FnMut(f64) -> Result<bool, E>,
{
    let mut lo = 0.0;
    let mut hi = 1.0;

    while hi - lo > tol {
        let mid = (lo + hi) / 2.0;
        if pred(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok((lo, hi))
}
