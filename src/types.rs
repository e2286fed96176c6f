//! Core data types shared by curves and seismic volumes

use crate::error::CurveError;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Null sentinel used by most wireline log formats for missing samples.
///
/// This is the in-band marker of the *source* format. Ingestion rewrites
/// matching samples to NaN, the in-memory missing-value representation.
pub const DEFAULT_NULL: f64 = -999.25;

/// Default depth step for synthesized bases, in metres (half a foot).
pub const DEFAULT_STEP: f64 = 0.1524;

/// Measurement frame a curve's basis is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Measured depth
    #[default]
    Md,
    /// True vertical depth
    Tvd,
    /// True vertical depth sub-sea
    Tvdss,
    /// True vertical depth below kelly bushing
    Tvdkb,
    /// Two-way travel time
    Twt,
    /// One-way travel time
    Owt,
}

impl Domain {
    /// Conventional uppercase tag for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Md => "MD",
            Domain::Tvd => "TVD",
            Domain::Tvdss => "TVDSS",
            Domain::Tvdkb => "TVDKB",
            Domain::Twt => "TWT",
            Domain::Owt => "OWT",
        }
    }
}

impl FromStr for Domain {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD" => Ok(Domain::Md),
            "TVD" => Ok(Domain::Tvd),
            "TVDSS" => Ok(Domain::Tvdss),
            "TVDKB" => Ok(Domain::Tvdkb),
            "TWT" => Ok(Domain::Twt),
            "OWT" => Ok(Domain::Owt),
            _ => Err(CurveError::UnknownDomain(s.to_string())),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named coordinate axis of a seismic volume
#[derive(Debug, Clone, PartialEq)]
pub struct CoordAxis {
    /// Axis name (e.g. "ilines", "xlines", "samples")
    pub name: String,
    /// Coordinate labels, one per sample along the axis
    pub coords: Array1<f64>,
}

impl CoordAxis {
    /// Create a new named axis
    pub fn new(name: impl Into<String>, coords: Array1<f64>) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Number of coordinate labels along this axis
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// View of the coordinate labels
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.coords.view()
    }

    /// A new axis keeping only `range` of the coordinates
    pub(crate) fn subset(&self, range: std::ops::Range<usize>) -> CoordAxis {
        CoordAxis {
            name: self.name.clone(),
            coords: self.coords.slice(ndarray::s![range]).to_owned(),
        }
    }
}

/// Summary statistics of a curve, as returned by [`Curve::describe`]
///
/// `nulls` counts NaN samples, the in-memory missing-value marker. The
/// source-format sentinel (see [`DEFAULT_NULL`]) is never counted here;
/// ingestion has already rewritten it to NaN.
///
/// [`Curve::describe`]: crate::curve::Curve::describe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveStats {
    /// Total number of samples, NaN included
    pub samples: usize,
    /// Number of NaN samples
    pub nulls: usize,
    /// Mean of the non-NaN samples
    pub mean: f64,
    /// Minimum of the non-NaN samples
    pub min: f64,
    /// Maximum of the non-NaN samples
    pub max: f64,
}
