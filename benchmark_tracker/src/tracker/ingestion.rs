//!
//! The result of an ingestion.
//!

use crate::detector::Detection;
use crate::merger::outcome::Outcome;
use crate::model::entry::Entry;

///
/// The result of an ingestion.
///
#[derive(Debug, Clone)]
pub struct Ingestion {
    /// Whether the entry was appended or its commit was already recorded.
    pub outcome: Outcome,
    /// The entry of the commit as stored in the history.
    pub entry: Entry,
    /// The comparisons of the entry against its baselines.
    pub comparisons: Detection,
}
