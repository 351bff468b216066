//!
//! A single benchmark run.
//!

pub mod raw;

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::commit::CommitRef;
use crate::model::measurement::Error as MeasurementError;
use crate::model::measurement::Measurement;
use crate::model::range;
use crate::model::range::Error as RangeError;

use self::raw::Bench;
use self::raw::Raw;

///
/// Measurements of one run keyed by benchmark name, in first-appearance order.
///
pub type Benches = IndexMap<String, Measurement>;

///
/// A single benchmark run.
///
/// All benchmarks of one run are recorded together as one entry.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Raw", into = "Raw")]
pub struct Entry {
    /// The commit provenance.
    pub commit: CommitRef,
    /// The time the run was appended, distinct from the commit time.
    pub recorded_at: DateTime<Utc>,
    /// The tool that produced the run.
    pub tool: String,
    /// The measurements.
    pub benches: Benches,
}

///
/// Persisted entry decoding error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The range string of a benchmark cannot be parsed.
    #[error("Benchmark `{name}`: {error}")]
    Range {
        /// The benchmark name.
        name: String,
        /// The underlying error.
        error: RangeError,
    },
    /// The measurement of a benchmark is invalid.
    #[error("Benchmark `{name}`: {error}")]
    Measurement {
        /// The benchmark name.
        name: String,
        /// The underlying error.
        error: MeasurementError,
    },
    /// The benchmark name appears more than once in the entry.
    #[error("Benchmark `{0}` is recorded more than once in commit entry")]
    DuplicateBenchmark(String),
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    /// The recording time is truncated to milliseconds, the persisted resolution.
    ///
    pub fn new(
        commit: CommitRef,
        recorded_at: DateTime<Utc>,
        tool: impl Into<String>,
        benches: Benches,
    ) -> Self {
        Self {
            commit,
            recorded_at: recorded_at.trunc_subsecs(3),
            tool: tool.into(),
            benches,
        }
    }

    ///
    /// Returns the commit identifier.
    ///
    pub fn commit_id(&self) -> &str {
        self.commit.id.as_str()
    }

    ///
    /// Returns the measurement of a benchmark, if the run reports it.
    ///
    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.benches.get(name)
    }
}

impl TryFrom<Raw> for Entry {
    type Error = Error;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        let mut benches = Benches::with_capacity(raw.benches.len());
        for bench in raw.benches.into_iter() {
            let dispersion =
                range::parse(bench.range.as_str(), bench.value).map_err(|error| Error::Range {
                    name: bench.name.clone(),
                    error,
                })?;
            let mut measurement = Measurement::new(bench.value, dispersion, bench.unit)
                .map_err(|error| Error::Measurement {
                    name: bench.name.clone(),
                    error,
                })?;
            measurement.extra = bench.extra;

            if benches.contains_key(bench.name.as_str()) {
                return Err(Error::DuplicateBenchmark(bench.name));
            }
            benches.insert(bench.name, measurement);
        }

        Ok(Self::new(raw.commit, raw.date, raw.tool, benches))
    }
}

impl From<Entry> for Raw {
    fn from(entry: Entry) -> Self {
        let benches = entry
            .benches
            .into_iter()
            .map(|(name, measurement)| Bench {
                name,
                value: measurement.value,
                range: range::format(measurement.dispersion),
                unit: measurement.unit,
                extra: measurement.extra,
            })
            .collect();

        Self {
            commit: entry.commit,
            date: entry.recorded_at,
            tool: entry.tool,
            benches,
        }
    }
}
