//! Seismic volumes with named coordinate axes and a physical unit.
//!
//! A [`Seismic`] owns an N-D sample array plus one [`CoordAxis`] per
//! dimension, in order. Slicing preserves the coordinate subsets of the
//! axes that survive; indexing an axis at a single position drops it,
//! matching ordinary array-indexing semantics. Every volume carries a
//! [`Unit`] tag, dimensionless by default.

use crate::error::SeismicError;
use crate::io::{CubeReader, CubeWriter};
use crate::types::CoordAxis;
use crate::units::Unit;
use ndarray::{Array1, ArrayD, ArrayViewD, Axis, Ix3, Slice};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::path::Path;

/// Default axis names bound to the three cube-reader axes
pub const CUBE_AXIS_NAMES: [&str; 3] = ["ilines", "xlines", "samples"];

/// An N-D seismic volume
#[derive(Debug, Clone)]
pub struct Seismic {
    data: ArrayD<f32>,
    axes: Vec<CoordAxis>,
    units: Unit,
    header: Option<HashMap<String, i32>>,
}

impl Seismic {
    /// Create a volume from data and one named coordinate axis per
    /// dimension.
    ///
    /// Every axis must match the length of its dimension exactly, and
    /// axis names must be unique.
    pub fn new(data: ArrayD<f32>, axes: Vec<CoordAxis>, units: Unit) -> Result<Self, SeismicError> {
        if axes.len() != data.ndim() {
            return Err(SeismicError::AxisCountMismatch {
                expected: data.ndim(),
                found: axes.len(),
            });
        }
        for (axis, &dim) in axes.iter().zip(data.shape()) {
            if axis.len() != dim {
                return Err(SeismicError::AxisLengthMismatch {
                    name: axis.name.clone(),
                    expected: dim,
                    found: axis.len(),
                });
            }
        }
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|a| a.name == axis.name) {
                return Err(SeismicError::DuplicateAxis(axis.name.clone()));
            }
        }
        Ok(Self {
            data,
            axes,
            units,
            header: None,
        })
    }

    /// Read a full volume from an external cube container, binding the
    /// reader's three axes under [`CUBE_AXIS_NAMES`]. The container
    /// header is preserved opaquely on the result.
    pub fn from_cube<R: CubeReader>(reader: &mut R, units: Unit) -> Result<Self, SeismicError> {
        Self::from_cube_named(reader, CUBE_AXIS_NAMES, units)
    }

    /// [`Seismic::from_cube`] with caller-chosen axis names
    pub fn from_cube_named<R: CubeReader>(
        reader: &mut R,
        axis_names: [&str; 3],
        units: Unit,
    ) -> Result<Self, SeismicError> {
        let axes = reader.axes()?;
        let header = reader.header()?;
        let volume = reader.volume()?;

        let coord_axes = vec![
            CoordAxis::new(axis_names[0], Array1::from_vec(axes.ilines)),
            CoordAxis::new(axis_names[1], Array1::from_vec(axes.xlines)),
            CoordAxis::new(axis_names[2], Array1::from_vec(axes.samples)),
        ];
        let mut seismic = Seismic::new(volume.into_dyn(), coord_axes, units)?;
        seismic.header = Some(header);
        Ok(seismic)
    }

    /// Hand the raw volume to an external cube writer. Marshalling only;
    /// the volume must be 3-D.
    pub fn to_cube<W: CubeWriter>(&self, writer: &mut W, path: &Path) -> Result<(), SeismicError> {
        let view = self
            .data
            .view()
            .into_dimensionality::<Ix3>()
            .map_err(|_| SeismicError::NotACube(self.ndim()))?;
        writer.write_volume(path, view)
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Length of each dimension
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// View of the sample values
    pub fn values(&self) -> ArrayViewD<'_, f32> {
        self.data.view()
    }

    /// The coordinate axes, in dimension order
    pub fn axes(&self) -> &[CoordAxis] {
        &self.axes
    }

    /// The axis with the given name
    pub fn axis(&self, name: &str) -> Option<&CoordAxis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Dimension position of the axis with the given name
    pub fn axis_position(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.name == name)
    }

    /// The unit tag
    pub fn units(&self) -> &Unit {
        &self.units
    }

    /// Header block preserved from cube ingestion, if any
    pub fn header(&self) -> Option<&HashMap<String, i32>> {
        self.header.as_ref()
    }

    /// Replace the unit tag without touching the data. Declarative: the
    /// samples are asserted to already be expressed in `units`.
    pub fn set_units(&mut self, units: Unit) {
        self.units = units;
    }

    /// Convert to another unit, rescaling the samples by the registry
    /// factor and replacing the tag.
    ///
    /// The tag and the values can never disagree: conversion is applied
    /// at this moment, not deferred. Converting to the current unit is
    /// an exact no-op. On dimension mismatch the volume is untouched.
    pub fn convert_units(&mut self, target: Unit) -> Result<(), SeismicError> {
        let factor = self.units.factor_to(&target)?;
        if factor != 1.0 {
            let factor = factor as f32;
            self.data.mapv_inplace(|v| v * factor);
        }
        self.units = target;
        Ok(())
    }

    /// A new volume over `range` along one axis; the axis survives with
    /// the matching coordinate subset.
    pub fn slice_axis(&self, axis: usize, range: Range<usize>) -> Result<Seismic, SeismicError> {
        let len = self.axis_len(axis)?;
        if range.start > range.end || range.end > len {
            return Err(SeismicError::OutOfBounds {
                axis,
                index: range.end,
                len,
            });
        }
        if range.is_empty() {
            return Err(SeismicError::EmptySelection);
        }

        let data = self
            .data
            .slice_axis(Axis(axis), Slice::from(range.clone()))
            .to_owned();
        let axes = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, a)| if i == axis { a.subset(range.clone()) } else { a.clone() })
            .collect();
        Ok(Seismic {
            data,
            axes,
            units: self.units.clone(),
            header: self.header.clone(),
        })
    }

    /// A new volume at a single position along one axis. The axis is
    /// consumed and dropped from the coordinate list.
    pub fn index_axis(&self, axis: usize, index: usize) -> Result<Seismic, SeismicError> {
        let len = self.axis_len(axis)?;
        if index >= len {
            return Err(SeismicError::OutOfBounds { axis, index, len });
        }

        let data = self.data.index_axis(Axis(axis), index).to_owned();
        let axes = self
            .axes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != axis)
            .map(|(_, a)| a.clone())
            .collect();
        Ok(Seismic {
            data,
            axes,
            units: self.units.clone(),
            header: self.header.clone(),
        })
    }

    /// Element-wise sum. Units and shapes must agree exactly.
    pub fn add(&self, other: &Seismic) -> Result<Seismic, SeismicError> {
        self.check_compatible(other)?;
        Ok(Seismic {
            data: &self.data + &other.data,
            axes: self.axes.clone(),
            units: self.units.clone(),
            header: self.header.clone(),
        })
    }

    /// Element-wise difference. Units and shapes must agree exactly.
    pub fn sub(&self, other: &Seismic) -> Result<Seismic, SeismicError> {
        self.check_compatible(other)?;
        Ok(Seismic {
            data: &self.data - &other.data,
            axes: self.axes.clone(),
            units: self.units.clone(),
            header: self.header.clone(),
        })
    }

    /// A new volume with every sample multiplied by `factor`
    pub fn scale(&self, factor: f32) -> Seismic {
        Seismic {
            data: &self.data * factor,
            axes: self.axes.clone(),
            units: self.units.clone(),
            header: self.header.clone(),
        }
    }

    /// One-line description of shape and units
    pub fn summary(&self) -> String {
        let shape = self
            .shape()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" x ");
        let names = self
            .axes
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}D volume: {} ({}), units {}", self.ndim(), shape, names, self.units)
    }

    fn axis_len(&self, axis: usize) -> Result<usize, SeismicError> {
        if axis >= self.ndim() {
            return Err(SeismicError::InvalidAxis(axis));
        }
        Ok(self.data.shape()[axis])
    }

    fn check_compatible(&self, other: &Seismic) -> Result<(), SeismicError> {
        if self.units != other.units {
            return Err(SeismicError::UnitMismatch {
                left: self.units.to_string(),
                right: other.units.to_string(),
            });
        }
        if self.shape() != other.shape() {
            return Err(SeismicError::ShapeMismatch {
                expected: self.shape().to_vec(),
                found: other.shape().to_vec(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Seismic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seismic(shape={:?}, units={})",
            self.data.shape(),
            self.units,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{default_axes, InMemoryCube};
    use ndarray::{Array3, ArrayD};

    fn index_axis_coords(n: usize) -> Array1<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn cube_axes(shape: (usize, usize, usize)) -> Vec<CoordAxis> {
        vec![
            CoordAxis::new("ilines", index_axis_coords(shape.0)),
            CoordAxis::new("xlines", index_axis_coords(shape.1)),
            CoordAxis::new("samples", index_axis_coords(shape.2)),
        ]
    }

    fn volume(shape: (usize, usize, usize)) -> ArrayD<f32> {
        Array3::from_shape_fn(shape, |(i, j, k)| (i + j + k) as f32).into_dyn()
    }

    fn simple_seismic() -> Seismic {
        Seismic::new(volume((10, 10, 100)), cube_axes((10, 10, 100)), Unit::default()).unwrap()
    }

    #[test]
    fn test_construction_validates_axis_lengths() {
        let mut axes = cube_axes((10, 10, 100));
        axes[2] = CoordAxis::new("samples", index_axis_coords(99));
        let err = Seismic::new(volume((10, 10, 100)), axes, Unit::default()).unwrap_err();
        assert!(matches!(
            err,
            SeismicError::AxisLengthMismatch {
                expected: 100,
                found: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_construction_validates_axis_count() {
        let err = Seismic::new(
            volume((10, 10, 100)),
            cube_axes((10, 10, 100))[..2].to_vec(),
            Unit::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SeismicError::AxisCountMismatch { .. }));
    }

    #[test]
    fn test_duplicate_axis_names_rejected() {
        let mut axes = cube_axes((10, 10, 100));
        axes[1].name = "ilines".to_string();
        let err = Seismic::new(volume((10, 10, 100)), axes, Unit::default()).unwrap_err();
        assert!(matches!(err, SeismicError::DuplicateAxis(name) if name == "ilines"));
    }

    #[test]
    fn test_index_axis_drops_coordinate() {
        let seismic = simple_seismic();
        let section = seismic.index_axis(2, 50).unwrap();

        assert_eq!(section.shape(), &[10, 10]);
        assert_eq!(section.ndim(), 2);
        assert!(section.axis("samples").is_none());
        assert!(section.axis("ilines").is_some());
        assert_eq!(section.units(), seismic.units());
    }

    #[test]
    fn test_slice_axis_keeps_coordinate_subset() {
        let seismic = simple_seismic();
        let window = seismic.slice_axis(2, 10..20).unwrap();

        assert_eq!(window.shape(), &[10, 10, 10]);
        let samples = window.axis("samples").unwrap();
        assert_eq!(samples.values()[0], 10.0);
        assert_eq!(samples.values()[9], 19.0);
    }

    #[test]
    fn test_slice_bounds_checked() {
        let seismic = simple_seismic();
        assert!(matches!(
            seismic.slice_axis(3, 0..1),
            Err(SeismicError::InvalidAxis(3))
        ));
        assert!(matches!(
            seismic.slice_axis(2, 90..110),
            Err(SeismicError::OutOfBounds { .. })
        ));
        assert!(matches!(
            seismic.index_axis(0, 10),
            Err(SeismicError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_set_then_convert_same_unit_is_idempotent() {
        let mut seismic = simple_seismic();
        let velocity = Unit::kilometre() / Unit::second();
        seismic.set_units(velocity.clone());
        let before = seismic.values().to_owned();

        seismic.convert_units(velocity.clone()).unwrap();
        assert_eq!(seismic.units(), &velocity);
        assert_eq!(seismic.values(), before.view());
    }

    #[test]
    fn test_convert_units_rescales_data() {
        let mut seismic = simple_seismic();
        seismic.set_units(Unit::kilometre() / Unit::second());
        let before = seismic.values().to_owned();

        seismic
            .convert_units(Unit::metre() / Unit::second())
            .unwrap();
        assert_eq!(seismic.units().symbol(), "m/s");
        assert_eq!(seismic.values()[[3, 4, 5]], before[[3, 4, 5]] * 1000.0);
    }

    #[test]
    fn test_convert_units_dimension_mismatch_leaves_volume_untouched() {
        let mut seismic = simple_seismic();
        seismic.set_units(Unit::metre());
        let before = seismic.values().to_owned();

        let err = seismic.convert_units(Unit::second()).unwrap_err();
        assert!(matches!(err, SeismicError::IncompatibleUnits { .. }));
        assert_eq!(seismic.units().symbol(), "m");
        assert_eq!(seismic.values(), before.view());
    }

    #[test]
    fn test_from_cube_binds_axes_and_header() {
        let raw = Array3::from_shape_fn((4, 5, 6), |(i, j, k)| (i * 30 + j * 6 + k) as f32);
        let mut cube = InMemoryCube::new(default_axes((4, 5, 6)), raw.clone())
            .unwrap()
            .with_header(HashMap::from([("SampleInterval".to_string(), 4000)]));

        let seismic = Seismic::from_cube(&mut cube, Unit::default()).unwrap();
        assert_eq!(seismic.shape(), &[4, 5, 6]);
        assert_eq!(seismic.axes()[0].name, "ilines");
        assert_eq!(seismic.axes()[2].name, "samples");
        assert_eq!(
            seismic.header().unwrap().get("SampleInterval"),
            Some(&4000)
        );
        assert_eq!(seismic.values(), raw.into_dyn().view());
    }

    #[test]
    fn test_to_cube_requires_three_dims() {
        let seismic = simple_seismic();
        let section = seismic.index_axis(0, 0).unwrap();
        let mut cube = InMemoryCube::new(
            default_axes((1, 1, 1)),
            Array3::zeros((1, 1, 1)),
        )
        .unwrap();

        let err = section.to_cube(&mut cube, Path::new("out.sgy")).unwrap_err();
        assert!(matches!(err, SeismicError::NotACube(2)));
    }

    #[test]
    fn test_add_checks_units() {
        let a = simple_seismic();
        let mut b = simple_seismic();
        b.set_units(Unit::metre());

        assert!(matches!(
            a.add(&b),
            Err(SeismicError::UnitMismatch { .. })
        ));

        let sum = a.add(&simple_seismic()).unwrap();
        assert_eq!(sum.values()[[1, 2, 3]], 12.0);
    }

    #[test]
    fn test_scale() {
        let doubled = simple_seismic().scale(2.0);
        assert_eq!(doubled.values()[[1, 2, 3]], 12.0);
    }

    #[test]
    fn test_display() {
        let seismic = simple_seismic();
        assert_eq!(
            seismic.to_string(),
            "Seismic(shape=[10, 10, 100], units=dimensionless)"
        );
    }

    #[test]
    fn test_summary_names_axes() {
        let summary = simple_seismic().summary();
        assert!(summary.contains("10 x 10 x 100"));
        assert!(summary.contains("ilines, xlines, samples"));
    }
}
