//! Interfaces to external log-record and cube-format collaborators.
//!
//! The crate has no file format of its own. Log curves arrive through
//! [`LogRecord`] (one curve of a LAS-style log), and seismic volumes
//! move through [`CubeReader`] / [`CubeWriter`] (a SEG-Y-style cube
//! container). Implementations own whatever file handles they need and
//! release them on drop; the library never holds one across calls.
//! [`InMemoryCube`] is the shipped backend, enough for tests and demos.

use crate::error::SeismicError;
use ndarray::{Array1, Array3, ArrayView1, ArrayView3};
use std::collections::HashMap;
use std::path::Path;

/// One curve record of an external well-log file.
///
/// The ingestion adapter reads exactly these fields and nothing else.
pub trait LogRecord {
    /// Sample values, in source order
    fn data(&self) -> ArrayView1<'_, f64>;

    /// Declared unit string (e.g. "gAPI")
    fn unit(&self) -> &str;

    /// Short curve name (e.g. "GR")
    fn mnemonic(&self) -> &str;

    /// Free-text description
    fn description(&self) -> &str;

    /// Curve type code, where the format carries one
    fn api_code(&self) -> Option<&str>;
}

/// The three ordered coordinate sequences of a cube volume
#[derive(Debug, Clone, PartialEq)]
pub struct CubeAxes {
    pub ilines: Vec<f64>,
    pub xlines: Vec<f64>,
    pub samples: Vec<f64>,
}

/// Read access to an external cube container.
///
/// `volume` bulk-reads the full cube shaped
/// `(ilines, xlines, samples)`, matching the axis lengths of `axes`.
pub trait CubeReader {
    fn axes(&mut self) -> Result<CubeAxes, SeismicError>;

    /// Header/bin block of the container, preserved opaquely
    fn header(&mut self) -> Result<HashMap<String, i32>, SeismicError>;

    fn volume(&mut self) -> Result<Array3<f32>, SeismicError>;
}

/// Write access to an external cube container
pub trait CubeWriter {
    fn write_volume(&mut self, path: &Path, volume: ArrayView3<'_, f32>)
        -> Result<(), SeismicError>;
}

/// An in-memory cube, readable and writable.
///
/// Writes replace the stored volume and reset the axis labels to plain
/// sample indices, the same surface a bare array-to-cube export leaves
/// behind. The path argument is ignored.
#[derive(Debug, Clone)]
pub struct InMemoryCube {
    axes: CubeAxes,
    header: HashMap<String, i32>,
    volume: Array3<f32>,
}

impl InMemoryCube {
    /// Create a cube from axes and a volume of matching shape
    pub fn new(axes: CubeAxes, volume: Array3<f32>) -> Result<Self, SeismicError> {
        let (ni, nx, ns) = volume.dim();
        for (name, len, dim) in [
            ("ilines", axes.ilines.len(), ni),
            ("xlines", axes.xlines.len(), nx),
            ("samples", axes.samples.len(), ns),
        ] {
            if len != dim {
                return Err(SeismicError::AxisLengthMismatch {
                    name: name.to_string(),
                    expected: dim,
                    found: len,
                });
            }
        }
        Ok(Self {
            axes,
            header: HashMap::new(),
            volume,
        })
    }

    /// Attach a header block
    pub fn with_header(mut self, header: HashMap<String, i32>) -> Self {
        self.header = header;
        self
    }
}

impl CubeReader for InMemoryCube {
    fn axes(&mut self) -> Result<CubeAxes, SeismicError> {
        Ok(self.axes.clone())
    }

    fn header(&mut self) -> Result<HashMap<String, i32>, SeismicError> {
        Ok(self.header.clone())
    }

    fn volume(&mut self) -> Result<Array3<f32>, SeismicError> {
        Ok(self.volume.clone())
    }
}

impl CubeWriter for InMemoryCube {
    fn write_volume(
        &mut self,
        _path: &Path,
        volume: ArrayView3<'_, f32>,
    ) -> Result<(), SeismicError> {
        let (ni, nx, ns) = volume.dim();
        self.axes = CubeAxes {
            ilines: index_coords(ni),
            xlines: index_coords(nx),
            samples: index_coords(ns),
        };
        self.volume = volume.to_owned();
        Ok(())
    }
}

fn index_coords(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Index-labelled axes for a volume of the given shape
pub fn default_axes(shape: (usize, usize, usize)) -> CubeAxes {
    CubeAxes {
        ilines: index_coords(shape.0),
        xlines: index_coords(shape.1),
        samples: index_coords(shape.2),
    }
}

/// A minimal [`LogRecord`] value, for callers that assemble records by
/// hand rather than reading a log file
#[derive(Debug, Clone)]
pub struct OwnedLogRecord {
    pub data: Array1<f64>,
    pub unit: String,
    pub mnemonic: String,
    pub description: String,
    pub api_code: Option<String>,
}

impl LogRecord for OwnedLogRecord {
    fn data(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    fn unit(&self) -> &str {
        &self.unit
    }

    fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn api_code(&self) -> Option<&str> {
        self.api_code.as_deref()
    }
}
