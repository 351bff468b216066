//!
//! The per-benchmark classification.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The per-benchmark classification.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The measurement got better by more than the tolerance.
    Improved,
    /// The change is within the tolerance.
    Stable,
    /// The measurement got worse by more than the tolerance.
    Regressed,
    /// No earlier entry reports the benchmark.
    InsufficientHistory,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improved => write!(f, "improved"),
            Self::Stable => write!(f, "stable"),
            Self::Regressed => write!(f, "regressed"),
            Self::InsufficientHistory => write!(f, "insufficient history"),
        }
    }
}
