//!
//! A single benchmark measurement.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single benchmark measurement.
///
/// The dispersion is an uncertainty in the same unit as the value, not a hard bound.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The central value, e.g. the mean time per iteration.
    pub value: f64,
    /// The spread around the value.
    pub dispersion: f64,
    /// The unit, e.g. `ns/iter`.
    pub unit: String,
    /// Free-form tool annotation, e.g. the number of samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

///
/// Invalid measurement error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The value is negative, infinite or NaN.
    #[error("Measurement value `{0}` must be a finite non-negative number")]
    InvalidValue(f64),
    /// The dispersion is negative, infinite or NaN.
    #[error("Measurement dispersion `{0}` must be a finite non-negative number")]
    InvalidDispersion(f64),
    /// The unit is empty.
    #[error("Measurement unit is empty")]
    EmptyUnit,
}

impl Measurement {
    ///
    /// A validating constructor.
    ///
    pub fn new(value: f64, dispersion: f64, unit: impl Into<String>) -> Result<Self, Error> {
        let unit = unit.into();
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidValue(value));
        }
        if !dispersion.is_finite() || dispersion < 0.0 {
            return Err(Error::InvalidDispersion(dispersion));
        }
        if unit.trim().is_empty() {
            return Err(Error::EmptyUnit);
        }
        Ok(Self {
            value,
            dispersion,
            unit,
            extra: None,
        })
    }

    ///
    /// Attaches a tool annotation.
    ///
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}
