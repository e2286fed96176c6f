//! A compact registry of physical units for seismic data.
//!
//! Units here are metadata with just enough structure for conversion:
//! a display symbol, a scale factor to SI base units, and integer
//! exponents over the length and time dimensions. Compound units are
//! built with `*` and `/` (e.g. `Unit::kilometre() / Unit::second()`).
//! Attaching a unit does not rescale any data by itself; conversion
//! happens where a caller asks for it (see `Seismic::convert_units`).

use crate::error::SeismicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// A physical unit: symbol, SI scale, and dimension exponents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    symbol: String,
    scale: f64,
    length: i8,
    time: i8,
}

impl Unit {
    fn new(symbol: &str, scale: f64, length: i8, time: i8) -> Self {
        Self {
            symbol: symbol.to_string(),
            scale,
            length,
            time,
        }
    }

    /// The unit of unitless data
    pub fn dimensionless() -> Self {
        Self::new("dimensionless", 1.0, 0, 0)
    }

    /// Metres
    pub fn metre() -> Self {
        Self::new("m", 1.0, 1, 0)
    }

    /// Kilometres
    pub fn kilometre() -> Self {
        Self::new("km", 1000.0, 1, 0)
    }

    /// International feet
    pub fn foot() -> Self {
        Self::new("ft", 0.3048, 1, 0)
    }

    /// Seconds
    pub fn second() -> Self {
        Self::new("s", 1.0, 0, 1)
    }

    /// Milliseconds
    pub fn millisecond() -> Self {
        Self::new("ms", 1e-3, 0, 1)
    }

    /// Display symbol of this unit
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_dimensionless(&self) -> bool {
        self.length == 0 && self.time == 0
    }

    /// Multiplicative factor taking values in `self` to values in `other`.
    ///
    /// Fails when the dimensions disagree; the factor for e.g. km/s to
    /// m/s is 1000.
    pub fn factor_to(&self, other: &Unit) -> Result<f64, SeismicError> {
        if self.length != other.length || self.time != other.time {
            return Err(SeismicError::IncompatibleUnits {
                from: self.symbol.clone(),
                to: other.symbol.clone(),
            });
        }
        Ok(self.scale / other.scale)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        Unit {
            symbol: format!("{}.{}", self.symbol, rhs.symbol),
            scale: self.scale * rhs.scale,
            length: self.length + rhs.length,
            time: self.time + rhs.time,
        }
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        Unit {
            symbol: format!("{}/{}", self.symbol, rhs.symbol),
            scale: self.scale / rhs.scale,
            length: self.length - rhs.length,
            time: self.time - rhs.time,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
