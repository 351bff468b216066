//!
//! The comparison of a benchmark against its baseline.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::detector::verdict::Verdict;
use crate::model::measurement::Measurement;

///
/// The comparison of a benchmark against its baseline.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The classification.
    pub verdict: Verdict,
    /// The measurement of the latest entry.
    pub latest: Measurement,
    /// The baseline, if any earlier entry reports the benchmark.
    pub baseline: Option<Baseline>,
    /// `latest - baseline`.
    pub delta: Option<f64>,
    /// The change allowed before the verdict leaves `Stable`.
    pub tolerance: Option<f64>,
}

///
/// The measurement a benchmark is compared against.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// The commit of the baseline entry.
    pub commit_id: String,
    /// The baseline measurement.
    pub measurement: Measurement,
}

impl Comparison {
    ///
    /// A comparison without a baseline.
    ///
    pub fn insufficient_history(latest: Measurement) -> Self {
        Self {
            verdict: Verdict::InsufficientHistory,
            latest,
            baseline: None,
            delta: None,
            tolerance: None,
        }
    }

    ///
    /// Returns `latest / baseline`, if the baseline is non-zero.
    ///
    pub fn ratio(&self) -> Option<f64> {
        self.baseline
            .as_ref()
            .map(|baseline| baseline.measurement.value)
            .filter(|value| *value != 0.0)
            .map(|value| self.latest.value / value)
    }
}
