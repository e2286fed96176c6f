//! Error types for basis resolution, curves, and seismic volumes

use thiserror::Error;

/// Errors raised while resolving a sampling basis
#[derive(Error, Debug)]
pub enum BasisError {
    #[error("cannot build a basis for zero samples")]
    Empty,

    #[error("a basis of {0} samples is too short for a regularity check")]
    TooShort(usize),

    #[error("basis length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("basis coordinates are not strictly monotonic")]
    NotMonotonic,

    #[error("no usable combination of coordinates, start, stop and step")]
    Underspecified,

    #[error("step {0} is not usable")]
    BadStep(f64),
}

/// Errors raised by curve construction, slicing, and ingestion
#[derive(Error, Debug)]
pub enum CurveError {
    #[error(transparent)]
    Basis(#[from] BasisError),

    #[error("curve length mismatch: {expected} basis samples, {found} data samples")]
    LengthMismatch { expected: usize, found: usize },

    #[error("mnemonic must not be empty")]
    EmptyMnemonic,

    #[error("unknown curve domain \"{0}\"")]
    UnknownDomain(String),

    #[error("the step sizes are not equal")]
    IrregularSteps,

    #[error("slice {start}..{end} is out of bounds for {len} samples")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("selector produces an empty curve")]
    EmptySelection,
}

/// Errors raised by seismic construction, slicing, and unit handling
#[derive(Error, Debug)]
pub enum SeismicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {expected} coordinate axes, found {found}")]
    AxisCountMismatch { expected: usize, found: usize },

    #[error("axis \"{name}\" has {found} coordinates for a dimension of length {expected}")]
    AxisLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate axis name \"{0}\"")]
    DuplicateAxis(String),

    #[error("axis {0} does not exist")]
    InvalidAxis(usize),

    #[error("index {index} is out of bounds for axis {axis} of length {len}")]
    OutOfBounds {
        axis: usize,
        index: usize,
        len: usize,
    },

    #[error("selector produces an empty axis")]
    EmptySelection,

    #[error("shape mismatch: {expected:?} vs {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("unit mismatch: {left} vs {right}")]
    UnitMismatch { left: String, right: String },

    #[error("volume is {0}-dimensional, cube export needs 3")]
    NotACube(usize),
}
