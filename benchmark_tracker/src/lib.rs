//!
//! The continuous benchmark tracker library.
//!

pub mod detector;
pub mod merger;
pub mod model;
pub mod normalizer;
pub mod report;
pub mod store;
pub mod tracker;

pub use crate::detector::comparison::Baseline;
pub use crate::detector::comparison::Comparison;
pub use crate::detector::config::Config as DetectorConfig;
pub use crate::detector::config::Error as DetectorConfigError;
pub use crate::detector::detect;
pub use crate::detector::direction::Direction;
pub use crate::detector::verdict::Verdict;
pub use crate::detector::Detection;
pub use crate::merger::merge;
pub use crate::merger::outcome::Outcome as MergeOutcome;
pub use crate::model::commit::identity::Identity as CommitIdentity;
pub use crate::model::commit::CommitRef;
pub use crate::model::document::Document;
pub use crate::model::entry::Benches;
pub use crate::model::entry::Entry;
pub use crate::model::history::SuiteHistory;
pub use crate::model::key::HistoryKey;
pub use crate::model::measurement::Measurement;
pub use crate::normalizer::ensure_units;
pub use crate::normalizer::error::Error as NormalizerError;
pub use crate::normalizer::normalize;
pub use crate::normalizer::normalize_all;
pub use crate::normalizer::tool::Tool;
pub use crate::report::format::Format as ReportFormat;
pub use crate::report::Report;
pub use crate::store::error::Error as StoreError;
pub use crate::store::file::format::Format as StoreFormat;
pub use crate::store::file::FileStore;
pub use crate::store::memory::MemoryStore;
pub use crate::store::IStore;
pub use crate::tracker::error::Error as TrackerError;
pub use crate::tracker::ingestion::Ingestion;
pub use crate::tracker::run::Run;
pub use crate::tracker::Tracker;
