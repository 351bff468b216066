//!
//! The `go test -bench` output parser.
//!
//! Example: `BenchmarkFib10-8   	 5000000	       325 ns/op	      0 B/op`
//!

use crate::model::entry::Benches;
use crate::normalizer::error::Error;
use crate::normalizer::tool::Tool;

lazy_static::lazy_static! {
    ///
    /// A benchmark result with the optional `GOMAXPROCS` suffix.
    ///
    static ref RESULT: regex::Regex =
        regex::Regex::new(r"^(Benchmark\S*?)(?:-(\d+))?\s+(\d+)\s+(.+)$").expect("Always valid");
}

///
/// Parses the `go test -bench` output.
///
/// The first metric of a line is recorded under the benchmark name, every further
/// metric under `<name> - <unit>`. Go reports no dispersion.
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

        let name = &captures[1];
        let iterations = &captures[3];
        let extra = match captures.get(2) {
            Some(procs) => format!("{iterations} times\n{} procs", procs.as_str()),
            None => format!("{iterations} times"),
        };

        let metrics: Vec<&str> = captures[4].split_whitespace().collect();
        if metrics.len() % 2 != 0 {
            return Err(Error::malformed(
                Tool::Go,
                format!("line {line_number}: unpaired metric in `{line}`"),
            ));
        }

        for (position, pair) in metrics.chunks(2).enumerate() {
            let (value, unit) = (pair[0], pair[1]);
            let value = super::parse_number(Tool::Go, line_number, value)?;
            let measurement = super::measurement(Tool::Go, line_number, value, 0.0, unit)?
                .with_extra(extra.as_str());

            let name = if position == 0 {
                name.to_owned()
            } else {
                format!("{name} - {unit}")
            };
            super::insert(&mut benches, name, measurement)?;
        }
    }

    Ok(benches)
}
