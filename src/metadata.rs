//! Provenance metadata carried by curves

use crate::types::DEFAULT_NULL;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance block of a curve.
///
/// Everything here is descriptive; none of it participates in the
/// numeric invariants of the curve itself. The `null` field records the
/// sentinel the *source format* used for missing samples — by the time a
/// curve exists those samples are NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMeta {
    /// Free-text description of the measurement
    pub description: Option<String>,

    /// Declared unit of the samples (e.g. "API", "us/ft")
    pub units: Option<String>,

    /// Logging run number
    pub run: i32,

    /// Missing-sample sentinel of the source format
    pub null: f64,

    /// Acquiring service company
    pub service_company: Option<String>,

    /// Acquisition date
    pub date: Option<DateTime<Utc>>,

    /// Curve type code (e.g. an API curve code)
    pub code: Option<String>,
}

impl Default for CurveMeta {
    fn default() -> Self {
        Self {
            description: None,
            units: None,
            run: 0,
            null: DEFAULT_NULL,
            service_company: None,
            date: None,
            code: None,
        }
    }
}

impl CurveMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_run(mut self, run: i32) -> Self {
        self.run = run;
        self
    }

    pub fn with_null(mut self, null: f64) -> Self {
        self.null = null;
        self
    }

    pub fn with_service_company(mut self, service_company: impl Into<String>) -> Self {
        self.service_company = Some(service_company.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
