//!
//! The direction in which a measurement improves.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The direction in which a measurement improves.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Timing-style measurements: a lower value is better.
    #[default]
    SmallerIsBetter,
    /// Throughput-style measurements: a higher value is better.
    BiggerIsBetter,
}

impl std::str::FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "smaller-is-better" => Ok(Self::SmallerIsBetter),
            "bigger-is-better" => Ok(Self::BiggerIsBetter),
            string => anyhow::bail!(
                "Unknown direction `{string}`. Supported values: {}",
                vec![Self::SmallerIsBetter, Self::BiggerIsBetter]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmallerIsBetter => write!(f, "smaller-is-better"),
            Self::BiggerIsBetter => write!(f, "bigger-is-better"),
        }
    }
}
