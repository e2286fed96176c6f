//! Numeric helper functions

use ndarray::{Array1, ArrayView1};
use num_traits::Float;

/// Relative tolerance for float comparison
pub const RTOL: f64 = 1e-5;

/// Absolute tolerance for float comparison
pub const ATOL: f64 = 1e-8;

/// Whether two floats agree within the given tolerances
pub fn close<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= atol + rtol * b.abs()
}

/// [`close`] with the crate default tolerances
pub fn allclose(a: f64, b: f64) -> bool {
    close(a, b, RTOL, ATOL)
}

/// Consecutive differences of a sequence, one element shorter than the input
pub fn diffs(values: ArrayView1<'_, f64>) -> Array1<f64> {
    values
        .windows(2)
        .into_iter()
        .map(|w| w[1] - w[0])
        .collect()
}

/// Median of a non-empty slice. NaN values sort last.
pub fn median(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Piecewise-linear interpolation of sample points `(xp, fp)` at positions
/// `x`, with `xp` strictly increasing. Positions outside `xp` clamp to the
/// boundary values.
pub fn interp(x: ArrayView1<'_, f64>, xp: &[f64], fp: &[f64]) -> Array1<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());
    x.iter().map(|&xi| interp_one(xi, xp, fp)).collect()
}

fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }
    // First index with xp[hi] > x; the bracket is then [hi - 1, hi].
    let hi = xp.partition_point(|&v| v <= x);
    let (x0, x1) = (xp[hi - 1], xp[hi]);
    let (f0, f1) = (fp[hi - 1], fp[hi]);
    f0 + (f1 - f0) * (x - x0) / (x1 - x0)
}
