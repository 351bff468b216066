//!
//! The regression detector.
//!


pub mod comparison;
pub mod config;
pub mod direction;
pub mod verdict;

use indexmap::IndexMap;

use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;
use crate::model::measurement::Measurement;

use self::comparison::Baseline;
use self::comparison::Comparison;
use self::config::Config;
use self::direction::Direction;
use self::verdict::Verdict;

///
/// The comparisons of an entry, keyed by benchmark name in the entry's order.
///
pub type Detection = IndexMap<String, Comparison>;

///
/// Classifies every benchmark of `latest` against its baseline in `history`.
///
/// The baseline of a benchmark is the most recent entry in arrival order that precedes
/// `latest` and reports the benchmark. If `latest` is not in the history, every entry
/// precedes it.
///
/// The tolerance grows with both dispersions, so noisy benchmarks need a larger change
/// to leave `Stable`. A change equal to the tolerance is `Stable`.
///
pub fn detect(history: &SuiteHistory, latest: &Entry, config: &Config) -> Detection {
    let prior = match history.position(latest.commit_id()) {
        Some(position) => &history.entries()[..position],
        None => history.entries(),
    };

    latest
        .benches
        .iter()
        .map(|(name, measurement)| {
            let comparison = match baseline(prior, name.as_str()) {
                Some((entry, baseline)) => compare(entry, baseline, measurement, config),
                None => Comparison::insufficient_history(measurement.to_owned()),
            };
            (name.to_owned(), comparison)
        })
        .collect()
}

///
/// Finds the most recent entry reporting the benchmark.
///
fn baseline<'a>(prior: &'a [Entry], name: &str) -> Option<(&'a Entry, &'a Measurement)> {
    prior
        .iter()
        .rev()
        .find_map(|entry| entry.get(name).map(|measurement| (entry, measurement)))
}

///
/// Compares a measurement against its baseline.
///
fn compare(
    entry: &Entry,
    baseline: &Measurement,
    latest: &Measurement,
    config: &Config,
) -> Comparison {
    let delta = latest.value - baseline.value;
    let tolerance = config.regression_threshold() * baseline.value
        + baseline.dispersion
        + latest.dispersion;

    let worsening = match config.direction() {
        Direction::SmallerIsBetter => delta,
        Direction::BiggerIsBetter => -delta,
    };
    let verdict = if worsening > tolerance {
        Verdict::Regressed
    } else if worsening < -tolerance {
        Verdict::Improved
    } else {
        Verdict::Stable
    };

    Comparison {
        verdict,
        latest: latest.to_owned(),
        baseline: Some(Baseline {
            commit_id: entry.commit_id().to_owned(),
            measurement: baseline.to_owned(),
        }),
        delta: Some(delta),
        tolerance: Some(tolerance),
    }
}
