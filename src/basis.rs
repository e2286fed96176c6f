//! Sampling bases and the resolver that regularizes them.
//!
//! A [`Basis`] is the ordered depth/time coordinate array a curve is
//! indexed against. [`resolve`] builds one from whatever partial sampling
//! information a caller has: an explicit coordinate array, or start/stop/
//! step parameters. Irregularly-sampled coordinate arrays are not
//! accepted as-is; the resolver warns, regenerates a regular basis from
//! the median step, and linearly resamples the accompanying data onto it.
//! Callers must therefore take the data back from [`ResolvedBasis`]: it
//! may differ in both content and length from what they passed in.

use crate::error::BasisError;
use crate::utils::{allclose, diffs, interp, median};
use log::{debug, warn};
use ndarray::{Array1, ArrayView1};
use std::ops::Range;

/// Epsilon added past the last coordinate when regenerating an irregular
/// basis, so the final sample survives half-open range generation.
const STOP_EPS: f64 = 1e-9;

/// A strictly monotonic 1-D coordinate array
#[derive(Debug, Clone, PartialEq)]
pub struct Basis(Array1<f64>);

impl Basis {
    /// Wrap a coordinate array, validating strict monotonicity.
    ///
    /// A single coordinate is allowed (its step is undefined); an empty
    /// array is not.
    pub fn new(values: Array1<f64>) -> Result<Self, BasisError> {
        if values.is_empty() {
            return Err(BasisError::Empty);
        }
        if values.len() >= 2 && !is_strictly_monotonic(values.view()) {
            return Err(BasisError::NotMonotonic);
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View of the coordinate values
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// First coordinate
    pub fn start(&self) -> f64 {
        self.0[0]
    }

    /// Last coordinate
    pub fn stop(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// The common step, or `None` when the coordinates are irregular or
    /// there are fewer than two of them
    pub fn step(&self) -> Option<f64> {
        regular_step(self.0.view())
    }

    /// Subset of the basis over an index range. Bounds are the caller's
    /// responsibility; `Curve` checks them before delegating here.
    pub(crate) fn subset(&self, range: Range<usize>) -> Basis {
        Basis(self.0.slice(ndarray::s![range]).to_owned())
    }

    /// Subset of the basis keeping positions where `keep` is true
    pub(crate) fn masked(&self, keep: &[bool]) -> Basis {
        let values = self
            .0
            .iter()
            .zip(keep)
            .filter(|(_, &k)| k)
            .map(|(&v, _)| v)
            .collect();
        Basis(values)
    }
}

/// Partial sampling information accepted by [`resolve`]
#[derive(Debug, Clone, Default)]
pub struct BasisSpec {
    /// Explicit coordinate array; takes precedence over the scalars
    pub coords: Option<Array1<f64>>,
    pub start: Option<f64>,
    pub stop: Option<f64>,
    pub step: Option<f64>,
}

/// The outcome of basis resolution.
///
/// `data` is the caller's sample array, resampled whenever the input
/// coordinates were irregular (`resampled` is then true and the lengths
/// of `basis` and `data` may both differ from the input, though they
/// always match each other).
#[derive(Debug, Clone)]
pub struct ResolvedBasis {
    pub basis: Basis,
    pub data: Array1<f64>,
    pub step: f64,
    pub resampled: bool,
}

/// Build a complete, validated, regular basis for `data` from partial
/// sampling information.
///
/// Either `spec.coords` or `spec.start` must be present. With explicit
/// coordinates, regular sampling is returned unchanged and irregular
/// sampling triggers the resample path described at the module level.
/// Without coordinates, the basis is synthesized from `start` and
/// `step`, deriving `step = (stop - start) / (len - 1)` when absent.
pub fn resolve(data: ArrayView1<'_, f64>, spec: &BasisSpec) -> Result<ResolvedBasis, BasisError> {
    if data.is_empty() {
        return Err(BasisError::Empty);
    }

    if let Some(coords) = &spec.coords {
        return resolve_coords(data, coords.view());
    }

    let start = spec.start.ok_or(BasisError::Underspecified)?;
    let step = match spec.step {
        Some(step) if step != 0.0 => {
            if !step.is_finite() {
                return Err(BasisError::BadStep(step));
            }
            step
        }
        _ => {
            let stop = spec.stop.ok_or(BasisError::Underspecified)?;
            derive_step(start, stop, data.len())?
        }
    };

    // Half-open arange over [start, start + step * len) with an exact
    // point count, immune to floating-point drift at the boundary.
    let basis = arange_n(start, step, data.len());
    Ok(ResolvedBasis {
        basis: Basis::new(basis)?,
        data: data.to_owned(),
        step,
        resampled: false,
    })
}

fn resolve_coords(
    data: ArrayView1<'_, f64>,
    coords: ArrayView1<'_, f64>,
) -> Result<ResolvedBasis, BasisError> {
    if coords.len() != data.len() {
        return Err(BasisError::LengthMismatch {
            expected: data.len(),
            found: coords.len(),
        });
    }
    if coords.len() < 2 {
        return Err(BasisError::TooShort(coords.len()));
    }
    if !is_strictly_monotonic(coords) {
        return Err(BasisError::NotMonotonic);
    }

    let deltas = diffs(coords);
    let first = deltas[0];
    if deltas.iter().all(|&d| allclose(d, first)) {
        debug!("basis of {} samples is regular, step {}", coords.len(), first);
        return Ok(ResolvedBasis {
            basis: Basis::new(coords.to_owned())?,
            data: data.to_owned(),
            step: first,
            resampled: false,
        });
    }

    // Irregular sampling: regenerate a regular basis from the median step
    // and resample the data onto it.
    let step = median(&deltas.to_vec());
    let start = coords[0];
    let stop = coords[coords.len() - 1] + STOP_EPS.copysign(step);
    let basis = arange(start, stop, step);
    warn!(
        "irregular sampling: resampling {} samples onto a regular basis of {} (step {})",
        coords.len(),
        basis.len(),
        step,
    );

    // Linear interpolation needs increasing abscissae; flip decreasing
    // bases for the lookup only.
    let increasing = step > 0.0;
    let (xp, fp): (Vec<f64>, Vec<f64>) = if increasing {
        (coords.to_vec(), data.to_vec())
    } else {
        (
            coords.iter().rev().copied().collect(),
            data.iter().rev().copied().collect(),
        )
    };
    let resampled = interp(basis.view(), &xp, &fp);

    Ok(ResolvedBasis {
        basis: Basis::new(basis)?,
        data: resampled,
        step,
        resampled: true,
    })
}

/// The common step of a regular coordinate array, or `None` when the
/// differences are unequal or there are fewer than two coordinates
pub fn regular_step(values: ArrayView1<'_, f64>) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let deltas = diffs(values);
    let first = deltas[0];
    if deltas.iter().all(|&d| allclose(d, first)) {
        Some(first)
    } else {
        None
    }
}

fn is_strictly_monotonic(values: ArrayView1<'_, f64>) -> bool {
    let deltas = diffs(values);
    let increasing = deltas[0] > 0.0;
    deltas
        .iter()
        .all(|&d| d != 0.0 && d.is_finite() && (d > 0.0) == increasing)
}

fn derive_step(start: f64, stop: f64, len: usize) -> Result<f64, BasisError> {
    let step = (stop - start) / (len - 1) as f64;
    if !step.is_finite() || step == 0.0 {
        return Err(BasisError::BadStep(step));
    }
    Ok(step)
}

/// `start, start + step, ...` while strictly before `stop` (half-open,
/// both step signs)
fn arange(start: f64, stop: f64, step: f64) -> Array1<f64> {
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    arange_n(start, step, n)
}

fn arange_n(start: f64, step: f64, n: usize) -> Array1<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}
