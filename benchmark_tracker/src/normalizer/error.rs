//!
//! The measurement normalizer error.
//!

use crate::normalizer::tool::Tool;

///
/// The measurement normalizer error.
///
/// Any of these aborts the ingestion of the run: no partial entry is merged.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The raw output does not follow the tool's format.
    #[error("Malformed `{tool}` output: {reason}")]
    MalformedOutput {
        /// The tool.
        tool: Tool,
        /// The description of the problem.
        reason: String,
    },
    /// The raw output contains no benchmarks.
    #[error("No benchmarks found in `{tool}` output")]
    EmptyResult {
        /// The tool.
        tool: Tool,
    },
    /// The unit of a benchmark differs from the one in its history.
    #[error("Benchmark `{name}` is reported in `{found}`, but its history is recorded in `{expected}`")]
    UnitMismatch {
        /// The benchmark name.
        name: String,
        /// The unit of the benchmark's first appearance in the history.
        expected: String,
        /// The unit of the new run.
        found: String,
    },
    /// The benchmark is reported more than once in one run.
    #[error("Benchmark `{0}` is reported more than once in one run")]
    DuplicateBenchmark(String),
}

impl Error {
    ///
    /// A shortcut constructor for the malformed output error.
    ///
    pub fn malformed(tool: Tool, reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            tool,
            reason: reason.into(),
        }
    }
}
