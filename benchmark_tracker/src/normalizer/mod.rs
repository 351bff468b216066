//!
//! The measurement normalizer.
//!
//! Converts tool-specific benchmark output into measurements keyed by benchmark name.
//! Lines that do not belong to the tool's benchmark report are skipped, since the
//! output is usually interleaved with build and test chatter.
//!

#[cfg(test)]
mod tests;

pub mod benchmarkjs;
pub mod cargo;
pub mod custom;
pub mod error;
pub mod go;
pub mod tool;

use crate::model::entry::Benches;
use crate::model::history::SuiteHistory;
use crate::model::measurement::Measurement;

use self::error::Error;
use self::tool::Tool;

///
/// Normalizes the raw output of a benchmark tool.
///
/// # Errors
///
/// 1. The output does not follow the tool's format.
/// 2. The output contains no benchmarks.
/// 3. A benchmark is reported twice.
///
pub fn normalize(tool: Tool, raw: &str) -> Result<Benches, Error> {
    let benches = match tool {
        Tool::Cargo => cargo::parse(raw)?,
        Tool::Go => go::parse(raw)?,
        Tool::BenchmarkJs => benchmarkjs::parse(raw)?,
        Tool::CustomSmallerIsBetter | Tool::CustomBiggerIsBetter => custom::parse(tool, raw)?,
    };

    if benches.is_empty() {
        return Err(Error::EmptyResult { tool });
    }
    Ok(benches)
}

///
/// Normalizes several raw outputs of one run into a single set of measurements.
///
pub fn normalize_all<'a, I>(tool: Tool, raws: I) -> Result<Benches, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut benches = Benches::new();
    for raw in raws.into_iter() {
        for (name, measurement) in normalize(tool, raw)?.into_iter() {
            insert(&mut benches, name, measurement)?;
        }
    }

    if benches.is_empty() {
        return Err(Error::EmptyResult { tool });
    }
    Ok(benches)
}

///
/// Checks that every benchmark keeps the unit of its first appearance in the history.
///
pub fn ensure_units(history: &SuiteHistory, benches: &Benches) -> Result<(), Error> {
    for (name, measurement) in benches.iter() {
        match history.canonical_unit(name.as_str()) {
            Some(expected) if expected != measurement.unit => {
                return Err(Error::UnitMismatch {
                    name: name.to_owned(),
                    expected: expected.to_owned(),
                    found: measurement.unit.to_owned(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

///
/// Inserts a measurement, rejecting a repeated name.
///
fn insert(benches: &mut Benches, name: String, measurement: Measurement) -> Result<(), Error> {
    if benches.contains_key(name.as_str()) {
        return Err(Error::DuplicateBenchmark(name));
    }
    benches.insert(name, measurement);
    Ok(())
}

///
/// Parses a number which may contain thousands separators.
///
fn parse_number(tool: Tool, line: usize, text: &str) -> Result<f64, Error> {
    text.replace(',', "")
        .parse::<f64>()
        .map_err(|_| Error::malformed(tool, format!("line {line}: invalid number `{text}`")))
}

///
/// Builds a measurement, reporting invalid values as malformed output.
///
fn measurement(
    tool: Tool,
    line: usize,
    value: f64,
    dispersion: f64,
    unit: &str,
) -> Result<Measurement, Error> {
    Measurement::new(value, dispersion, unit)
        .map_err(|error| Error::malformed(tool, format!("line {line}: {error}")))
}
