//!
//! The benchmark tool that produced a raw output.
//!

use crate::detector::direction::Direction;

///
/// The benchmark tool that produced a raw output.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// `cargo bench` with the libtest or bencher output.
    Cargo,
    /// `go test -bench`.
    Go,
    /// Benchmark.js.
    BenchmarkJs,
    /// A JSON array of measurements where smaller values are better.
    CustomSmallerIsBetter,
    /// A JSON array of measurements where bigger values are better.
    CustomBiggerIsBetter,
}

impl Tool {
    /// All supported tools.
    pub const ALL: [Self; 5] = [
        Self::Cargo,
        Self::Go,
        Self::BenchmarkJs,
        Self::CustomSmallerIsBetter,
        Self::CustomBiggerIsBetter,
    ];

    ///
    /// Returns the comparison direction implied by the tool.
    ///
    pub fn direction(&self) -> Direction {
        match self {
            Self::CustomBiggerIsBetter => Direction::BiggerIsBetter,
            _ => Direction::SmallerIsBetter,
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "cargo" => Ok(Self::Cargo),
            "go" => Ok(Self::Go),
            "benchmarkjs" => Ok(Self::BenchmarkJs),
            "customsmallerisbetter" => Ok(Self::CustomSmallerIsBetter),
            "custombiggerisbetter" => Ok(Self::CustomBiggerIsBetter),
            string => anyhow::bail!(
                "Unknown benchmark tool `{string}`. Supported tools: {}",
                Self::ALL
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cargo => write!(f, "cargo"),
            Self::Go => write!(f, "go"),
            Self::BenchmarkJs => write!(f, "benchmarkjs"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
        }
    }
}
