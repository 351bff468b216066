//!
//! The persisted shape of an entry.
//!

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::model::commit::CommitRef;

///
/// The persisted shape of an entry.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Raw {
    /// The commit provenance.
    pub commit: CommitRef,
    /// The recording time as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// The tool that produced the run.
    pub tool: String,
    /// The measurements in display order.
    pub benches: Vec<Bench>,
}

///
/// The persisted shape of a measurement.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Bench {
    /// The benchmark name.
    pub name: String,
    /// The central value.
    pub value: f64,
    /// The dispersion display string, e.g. `± 49`.
    #[serde(default)]
    pub range: String,
    /// The unit.
    pub unit: String,
    /// The tool annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}
