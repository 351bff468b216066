//!
//! The Benchmark.js output parser.
//!
//! Example: `fib(20) x 31,177 ops/sec ±0.35% (91 runs sampled)`
//!

use crate::model::entry::Benches;
use crate::normalizer::error::Error;
use crate::normalizer::tool::Tool;

lazy_static::lazy_static! {
    ///
    /// A benchmark result with a relative margin of error.
    ///
    static ref RESULT: regex::Regex = regex::Regex::new(
        r"^(.+) x ([0-9][0-9,.]*) (.+?) ±([0-9][0-9.]*)% \((\d+) runs? sampled\)$"
    )
    .expect("Always valid");
}

///
/// Parses the Benchmark.js output.
///
/// The relative margin of error is converted to an absolute dispersion in the value's unit.
///
pub fn parse(raw: &str) -> Result<Benches, Error> {
    let mut benches = Benches::new();

    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        let captures = match RESULT.captures(line) {
            Some(captures) => captures,
            None => continue,
        };

        let value = super::parse_number(Tool::BenchmarkJs, line_number, &captures[2])?;
        let margin = super::parse_number(Tool::BenchmarkJs, line_number, &captures[4])?;
        let measurement = super::measurement(
            Tool::BenchmarkJs,
            line_number,
            value,
            value * margin / 100.0,
            &captures[3],
        )?
        .with_extra(format!("{} samples", &captures[5]));

        super::insert(&mut benches, captures[1].trim().to_owned(), measurement)?;
    }

    Ok(benches)
}
