//!
//! The `cargo bench` output parser.
//!
//! Example: `test parser::bench_parse ... bench:       1,168 ns/iter (+/- 3)`
//!

use crate::model::entry::Benches;
use crate::normalizer::error::Error;
use crate::normalizer::tool::Tool;

lazy_static::lazy_static! {
    ///
    /// A line that claims to be a benchmark result.
    ///
    static ref CANDIDATE: regex::Regex =
        regex::Regex::new(r"^test .+ \.\.\. bench:").expect("Always valid");

    ///
    /// A well-formed benchmark result.
    ///
    static ref RESULT: regex::Regex = regex::Regex::new(
        r"^test (.+?)\s+\.\.\. bench:\s+([0-9][0-9,.]*) (\S+) \(\+/- ([0-9][0-9,.]*)\)$"
    )
    .expect("Always valid");
}

///
/// Parses the `cargo bench` output.
///
/// Module path separators are replaced with `__`, as the published histories name them.
///
pub fn parse(raw: &str) -> Result<Benches, Error> {
    let mut benches = Benches::new();

    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if !CANDIDATE.is_match(line) {
            continue;
        }
        let captures = RESULT.captures(line).ok_or_else(|| {
            Error::malformed(Tool::Cargo, format!("line {line_number}: `{line}`"))
        })?;

        let name = captures[1].trim().replace("::", "__");
        let value = super::parse_number(Tool::Cargo, line_number, &captures[2])?;
        let dispersion = super::parse_number(Tool::Cargo, line_number, &captures[4])?;
        let measurement =
            super::measurement(Tool::Cargo, line_number, value, dispersion, &captures[3])?;

        super::insert(&mut benches, name, measurement)?;
    }

    Ok(benches)
}
