//!
//! A benchmark run to be ingested.
//!

use chrono::DateTime;
use chrono::Utc;

use crate::model::commit::CommitRef;
use crate::normalizer::tool::Tool;

///
/// A benchmark run to be ingested.
///
#[derive(Debug, Clone)]
pub struct Run {
    /// The tool that produced the outputs.
    pub tool: Tool,
    /// The raw outputs, e.g. one per benchmark binary.
    pub raws: Vec<String>,
    /// The benchmarked commit.
    pub commit: CommitRef,
    /// The time the run was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl Run {
    ///
    /// A shortcut constructor recorded at the current time.
    ///
    pub fn new(tool: Tool, raws: Vec<String>, commit: CommitRef) -> Self {
        Self {
            tool,
            raws,
            commit,
            recorded_at: Utc::now(),
        }
    }
}
