//!
//! The history file format.
//!

use crate::model::document::Document;

///
/// The history file format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The plain JSON document.
    #[default]
    Json,
    /// The document assigned to `window.BENCHMARK_DATA`, loadable by a static chart page.
    DataJs,
}

impl Format {
    /// The assignment prefix of the `data.js` format.
    pub const DATA_JS_PREFIX: &'static str = "window.BENCHMARK_DATA = ";

    ///
    /// Returns the file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::DataJs => "js",
        }
    }

    ///
    /// Serializes a document.
    ///
    pub fn serialize(&self, document: &Document) -> String {
        let json = serde_json::to_string_pretty(document).expect("Always valid");
        match self {
            Self::Json => json,
            Self::DataJs => format!("{}{json}\n", Self::DATA_JS_PREFIX),
        }
    }

    ///
    /// Parses a document in either format.
    ///
    pub fn parse(text: &str) -> serde_json::Result<Document> {
        let text = text.trim();
        let text = match text.strip_prefix(Self::DATA_JS_PREFIX.trim_end()) {
            Some(text) => text.trim_end_matches(';'),
            None => text,
        };
        serde_json::from_str(text)
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "data-js" => Ok(Self::DataJs),
            string => anyhow::bail!(
                "Unknown history format `{string}`. Supported formats: {}",
                vec![Self::Json, Self::DataJs]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::DataJs => write!(f, "data-js"),
        }
    }
}
