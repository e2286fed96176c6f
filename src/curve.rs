//! Well-log curves bound to a sampling basis.
//!
//! A [`Curve`] is one named 1-D series (gamma ray, sonic, ...) whose
//! samples are indexed by a [`Basis`] of exactly the same length. The
//! ingestion path ([`Curve::from_log_record`]) normalizes whatever
//! sampling the source file declares through the basis resolver and
//! rewrites the format's null sentinel to NaN.

use crate::basis::{self, Basis, BasisSpec};
use crate::error::CurveError;
use crate::io::LogRecord;
use crate::metadata::CurveMeta;
use crate::types::{CurveStats, Domain, DEFAULT_NULL, DEFAULT_STEP};
use chrono::{DateTime, Utc};
use ndarray::{Array1, ArrayView1};
use std::fmt;
use std::ops::Range;

/// A single named log curve
#[derive(Debug, Clone)]
pub struct Curve {
    data: Array1<f64>,
    basis: Basis,
    mnemonic: String,
    domain: Domain,
    meta: CurveMeta,
}

impl Curve {
    /// Create a curve from data, a basis of matching length, and
    /// provenance metadata.
    ///
    /// Fails when the lengths disagree or the mnemonic is empty; no
    /// partially-built curve ever exists.
    pub fn new(
        data: Array1<f64>,
        basis: Basis,
        domain: Domain,
        mnemonic: impl Into<String>,
        meta: CurveMeta,
    ) -> Result<Self, CurveError> {
        let mnemonic = mnemonic.into();
        if mnemonic.is_empty() {
            return Err(CurveError::EmptyMnemonic);
        }
        if data.len() != basis.len() {
            return Err(CurveError::LengthMismatch {
                expected: basis.len(),
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            basis,
            mnemonic,
            domain,
            meta,
        })
    }

    /// Build a curve from an external log record.
    ///
    /// The depth basis comes either from `opts.basis` (normalized by the
    /// basis resolver, which may resample the record data) or is
    /// synthesized from `opts.start`/`stop`/`step`. Samples equal to the
    /// configured null sentinel become NaN.
    pub fn from_log_record(
        record: &impl LogRecord,
        opts: &LogIngestOptions,
    ) -> Result<Self, CurveError> {
        let data = record.data().mapv(|v| if v == opts.null { f64::NAN } else { v });

        let spec = BasisSpec {
            coords: opts.basis.clone(),
            start: opts.start,
            stop: opts.stop,
            step: opts.step,
        };
        let resolved = basis::resolve(data.view(), &spec)?;

        let mut meta = CurveMeta::new()
            .with_description(record.description())
            .with_units(record.unit())
            .with_run(opts.run)
            .with_null(opts.null);
        if let Some(company) = &opts.service_company {
            meta = meta.with_service_company(company.clone());
        }
        if let Some(date) = opts.date {
            meta = meta.with_date(date);
        }
        if let Some(code) = record.api_code() {
            meta = meta.with_code(code);
        }

        Curve::new(
            resolved.data,
            resolved.basis,
            opts.domain,
            record.mnemonic(),
            meta,
        )
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View of the sample values
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    /// The sampling basis
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn meta(&self) -> &CurveMeta {
        &self.meta
    }

    /// First basis coordinate
    pub fn start(&self) -> f64 {
        self.basis.start()
    }

    /// Last basis coordinate
    pub fn stop(&self) -> f64 {
        self.basis.stop()
    }

    /// Common basis step, `None` when irregular
    pub fn step(&self) -> Option<f64> {
        self.basis.step()
    }

    /// A new curve over `range` of the samples, basis kept aligned.
    ///
    /// The result shares no mutable state with `self`.
    pub fn slice(&self, range: Range<usize>) -> Result<Curve, CurveError> {
        if range.start > range.end || range.end > self.len() {
            return Err(CurveError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len(),
            });
        }
        if range.is_empty() {
            return Err(CurveError::EmptySelection);
        }
        Ok(Curve {
            data: self.data.slice(ndarray::s![range.clone()]).to_owned(),
            basis: self.basis.subset(range),
            mnemonic: self.mnemonic.clone(),
            domain: self.domain,
            meta: self.meta.clone(),
        })
    }

    /// A new curve keeping the samples where `keep` is true
    pub fn mask(&self, keep: &[bool]) -> Result<Curve, CurveError> {
        if keep.len() != self.len() {
            return Err(CurveError::LengthMismatch {
                expected: self.len(),
                found: keep.len(),
            });
        }
        if !keep.iter().any(|&k| k) {
            return Err(CurveError::EmptySelection);
        }
        let data = self
            .data
            .iter()
            .zip(keep)
            .filter(|(_, &k)| k)
            .map(|(&v, _)| v)
            .collect();
        Ok(Curve {
            data,
            basis: self.basis.masked(keep),
            mnemonic: self.mnemonic.clone(),
            domain: self.domain,
            meta: self.meta.clone(),
        })
    }

    /// The common step of an arbitrary coordinate array, as a standalone
    /// diagnostic. Fails when the differences are not all equal.
    pub fn step_of(values: ArrayView1<'_, f64>) -> Result<f64, CurveError> {
        basis::regular_step(values).ok_or(CurveError::IrregularSteps)
    }

    /// Summary statistics. NaN samples count as `nulls` and are ignored
    /// by mean/min/max.
    pub fn describe(&self) -> CurveStats {
        let samples = self.data.len();
        let mut nulls = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            if v.is_nan() {
                nulls += 1;
            } else {
                sum += v;
                min = min.min(v);
                max = max.max(v);
            }
        }
        let valid = samples - nulls;
        let (mean, min, max) = if valid == 0 {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            (sum / valid as f64, min, max)
        };
        CurveStats {
            samples,
            nulls,
            mean,
            min,
            max,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curve({}, {} samples, start={:.4})",
            self.mnemonic,
            self.len(),
            self.start(),
        )
    }
}

/// Configuration for [`Curve::from_log_record`].
///
/// Passed explicitly at every ingestion call site; there is no module
/// state behind these defaults.
#[derive(Debug, Clone)]
pub struct LogIngestOptions {
    /// Explicit depth/time array from the source file
    pub basis: Option<Array1<f64>>,
    pub start: Option<f64>,
    pub stop: Option<f64>,
    /// Basis step when no explicit array is given; defaults to 0.1524 m
    pub step: Option<f64>,
    /// Domain of the synthesized or supplied basis
    pub domain: Domain,
    pub run: i32,
    /// Missing-sample sentinel to rewrite to NaN
    pub null: f64,
    pub service_company: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl Default for LogIngestOptions {
    fn default() -> Self {
        Self {
            basis: None,
            start: None,
            stop: None,
            step: Some(DEFAULT_STEP),
            domain: Domain::Md,
            run: -1,
            null: DEFAULT_NULL,
            service_company: None,
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::OwnedLogRecord;
    use ndarray::array;

    fn gr_record(n: usize) -> OwnedLogRecord {
        OwnedLogRecord {
            data: Array1::linspace(40.0, 140.0, n),
            unit: "gAPI".to_string(),
            mnemonic: "GR".to_string(),
            description: "Gamma Ray".to_string(),
            api_code: Some("45 310 01 00".to_string()),
        }
    }

    fn basis_of(n: usize) -> Basis {
        Basis::new(Array1::linspace(1500.0, 1500.0 + (n - 1) as f64 * 0.5, n)).unwrap()
    }

    fn simple_curve(n: usize) -> Curve {
        Curve::new(
            Array1::linspace(0.0, (n - 1) as f64, n),
            basis_of(n),
            Domain::Md,
            "GR",
            CurveMeta::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Curve::new(
            Array1::zeros(10),
            basis_of(9),
            Domain::Md,
            "GR",
            CurveMeta::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CurveError::LengthMismatch {
                expected: 9,
                found: 10
            }
        ));
    }

    #[test]
    fn test_empty_mnemonic_rejected() {
        let err = Curve::new(
            Array1::zeros(5),
            basis_of(5),
            Domain::Md,
            "",
            CurveMeta::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::EmptyMnemonic));
    }

    #[test]
    fn test_slice_keeps_basis_aligned() {
        let curve = simple_curve(100);
        let sliced = curve.slice(2..4).unwrap();

        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced.values().to_vec(), vec![2.0, 3.0]);
        assert_eq!(
            sliced.basis().values(),
            curve.basis().values().slice(ndarray::s![2..4])
        );
        assert_eq!(sliced.mnemonic(), "GR");
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let curve = simple_curve(10);
        assert!(matches!(
            curve.slice(5..11),
            Err(CurveError::OutOfBounds { .. })
        ));
        assert!(matches!(curve.slice(3..3), Err(CurveError::EmptySelection)));
    }

    #[test]
    fn test_slice_does_not_alias_parent() {
        let curve = simple_curve(10);
        let mut sliced = curve.slice(0..5).unwrap();
        sliced.data[0] = 999.0;
        assert_eq!(curve.values()[0], 0.0);
    }

    #[test]
    fn test_mask() {
        let curve = simple_curve(5);
        let masked = curve.mask(&[true, false, true, false, true]).unwrap();
        assert_eq!(masked.len(), 3);
        assert_eq!(masked.values().to_vec(), vec![0.0, 2.0, 4.0]);
        assert_eq!(
            masked.basis().values().to_vec(),
            vec![1500.0, 1501.0, 1502.0]
        );
    }

    #[test]
    fn test_mask_length_mismatch() {
        let curve = simple_curve(5);
        assert!(matches!(
            curve.mask(&[true, false]),
            Err(CurveError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_describe_counts_nan_as_nulls() {
        let curve = Curve::new(
            array![1.0, f64::NAN, 3.0],
            Basis::new(array![0.0, 1.0, 2.0]).unwrap(),
            Domain::Md,
            "DT",
            CurveMeta::default(),
        )
        .unwrap();

        let stats = curve.describe();
        assert_eq!(stats.samples, 3);
        assert_eq!(stats.nulls, 1);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
    }

    #[test]
    fn test_describe_all_nan() {
        let curve = Curve::new(
            array![f64::NAN, f64::NAN],
            Basis::new(array![0.0, 1.0]).unwrap(),
            Domain::Md,
            "DT",
            CurveMeta::default(),
        )
        .unwrap();

        let stats = curve.describe();
        assert_eq!(stats.nulls, 2);
        assert!(stats.mean.is_nan());
        assert!(stats.min.is_nan());
    }

    #[test]
    fn test_step_of() {
        assert_eq!(Curve::step_of(array![0.0, 0.5, 1.0].view()).unwrap(), 0.5);
        assert!(matches!(
            Curve::step_of(array![0.0, 0.5, 2.0].view()),
            Err(CurveError::IrregularSteps)
        ));
    }

    #[test]
    fn test_ingest_with_explicit_basis() {
        let record = gr_record(50);
        let opts = LogIngestOptions {
            basis: Some(Array1::linspace(1500.0, 1524.5, 50)),
            ..Default::default()
        };
        let curve = Curve::from_log_record(&record, &opts).unwrap();

        assert_eq!(curve.mnemonic(), "GR");
        assert_eq!(curve.len(), 50);
        assert_eq!(curve.start(), 1500.0);
        assert_eq!(curve.meta().units.as_deref(), Some("gAPI"));
        assert_eq!(curve.meta().description.as_deref(), Some("Gamma Ray"));
        assert_eq!(curve.meta().code.as_deref(), Some("45 310 01 00"));
        assert_eq!(curve.meta().run, -1);
    }

    #[test]
    fn test_ingest_with_start_and_default_step() {
        let record = gr_record(10);
        let opts = LogIngestOptions {
            start: Some(2000.0),
            ..Default::default()
        };
        let curve = Curve::from_log_record(&record, &opts).unwrap();

        assert_eq!(curve.len(), 10);
        assert_eq!(curve.start(), 2000.0);
        assert!(crate::utils::allclose(curve.step().unwrap(), DEFAULT_STEP));
    }

    #[test]
    fn test_ingest_rewrites_null_sentinel() {
        let record = OwnedLogRecord {
            data: array![120.0, -999.25, 80.0],
            unit: "gAPI".to_string(),
            mnemonic: "GR".to_string(),
            description: String::new(),
            api_code: None,
        };
        let opts = LogIngestOptions {
            start: Some(0.0),
            ..Default::default()
        };
        let curve = Curve::from_log_record(&record, &opts).unwrap();

        assert!(curve.values()[1].is_nan());
        assert_eq!(curve.describe().nulls, 1);
        assert_eq!(curve.meta().null, -999.25);
    }

    #[test]
    fn test_ingest_without_basis_or_start_fails() {
        let record = gr_record(10);
        let opts = LogIngestOptions {
            step: None,
            ..Default::default()
        };
        let err = Curve::from_log_record(&record, &opts).unwrap_err();
        assert!(matches!(err, CurveError::Basis(_)));
    }

    #[test]
    fn test_ingest_irregular_basis_resamples() {
        let record = OwnedLogRecord {
            data: array![0.0, 10.0, 20.0, 50.0, 60.0, 70.0],
            unit: "gAPI".to_string(),
            mnemonic: "GR".to_string(),
            description: String::new(),
            api_code: None,
        };
        let opts = LogIngestOptions {
            basis: Some(array![0.0, 1.0, 2.0, 5.0, 6.0, 7.0]),
            ..Default::default()
        };
        let curve = Curve::from_log_record(&record, &opts).unwrap();

        // Resampling onto a 1.0 step grows the curve to 8 samples; the
        // data and basis stay the same length.
        assert_eq!(curve.step(), Some(1.0));
        assert_eq!(curve.len(), curve.basis().len());
        assert!(curve.len() > 6);
    }

    #[test]
    fn test_display() {
        let curve = simple_curve(100);
        assert_eq!(curve.to_string(), "Curve(GR, 100 samples, start=1500.0000)");
    }
}
