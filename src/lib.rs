//! Subsurface - well-log curves and seismic volumes
//!
//! In-memory representations of two geophysical data types over
//! [`ndarray`]: well-log curves (1-D depth/time series bound to a
//! sampling basis) and seismic volumes (N-D cubes with named coordinate
//! axes and a physical unit).
//!
//! # Features
//!
//! - Basis resolution from partial sampling information (explicit
//!   coordinates, or start/stop/step), with automatic regularization of
//!   irregularly-sampled input
//! - Alignment-preserving slicing for curves and volumes
//! - Unit-aware volume metadata backed by a compact unit registry
//! - Ingestion adapters for external log records and cube containers
//!
//! # Example
//!
//! ```rust,ignore
//! use subsurface::{Curve, LogIngestOptions};
//!
//! # fn example(record: &impl subsurface::LogRecord) -> Result<(), subsurface::CurveError> {
//! let curve = Curve::from_log_record(record, &LogIngestOptions {
//!     start: Some(1500.0),
//!     ..Default::default()
//! })?;
//! println!("{}: {:?}", curve, curve.describe());
//! # Ok(())
//! # }
//! ```

pub mod basis;
pub mod curve;
pub mod error;
pub mod io;
pub mod metadata;
pub mod seismic;
pub mod types;
pub mod units;
pub mod utils;

// Re-exports
pub use basis::{resolve, Basis, BasisSpec, ResolvedBasis};
pub use curve::{Curve, LogIngestOptions};
pub use error::{BasisError, CurveError, SeismicError};
pub use io::{CubeAxes, CubeReader, CubeWriter, InMemoryCube, LogRecord};
pub use metadata::CurveMeta;
pub use seismic::{Seismic, CUBE_AXIS_NAMES};
pub use types::{CoordAxis, CurveStats, Domain, DEFAULT_NULL, DEFAULT_STEP};
pub use units::Unit;

/// Version of the subsurface crate
pub const SUBSURFACE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!SUBSURFACE_VERSION.is_empty());
    }
}
