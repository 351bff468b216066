//!
//! The custom JSON benchmark output parser.
//!
//! Example: `[{ "name": "parse", "unit": "ms", "value": 12.5, "range": "± 0.5" }]`
//!

use serde::Deserialize;

use crate::model::entry::Benches;
use crate::model::measurement::Measurement;
use crate::model::range;
use crate::normalizer::error::Error;
use crate::normalizer::tool::Tool;

///
/// A custom benchmark record.
///
#[derive(Debug, Deserialize)]
struct Record {
    /// The benchmark name.
    name: String,
    /// The central value.
    value: f64,
    /// The unit.
    unit: String,
    /// The optional dispersion display string.
    #[serde(default)]
    range: Option<String>,
    /// The optional tool annotation.
    #[serde(default)]
    extra: Option<String>,
}

///
/// Parses a JSON array of custom benchmark records.
///
pub fn parse(tool: Tool, raw: &str) -> Result<Benches, Error> {
    let records: Vec<Record> = serde_json::from_str(raw)
        .map_err(|error| Error::malformed(tool, format!("invalid JSON: {error}")))?;

    let mut benches = Benches::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let position = index + 1;
        let dispersion = range::parse(record.range.as_deref().unwrap_or_default(), record.value)
            .map_err(|error| Error::malformed(tool, format!("record {position}: {error}")))?;
        let mut measurement = Measurement::new(record.value, dispersion, record.unit)
            .map_err(|error| Error::malformed(tool, format!("record {position}: {error}")))?;
        measurement.extra = record.extra;

        super::insert(&mut benches, record.name, measurement)?;
    }

    Ok(benches)
}
