//!
//! The commit provenance of a benchmark run.
//!

pub mod identity;

use std::path::PathBuf;

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use self::identity::Identity;

///
/// The commit provenance of a benchmark run.
///
/// The identifier is the deduplication key within a repository history.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    /// The commit author.
    pub author: Identity,
    /// The commit committer.
    pub committer: Identity,
    /// Whether the commit is distinct from the previous push, as reported by the CI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit identifier, usually a hash.
    pub id: String,
    /// The commit message.
    pub message: String,
    /// The commit timestamp with the committer's offset.
    pub timestamp: DateTime<FixedOffset>,
    /// The tree identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// The web page of the commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CommitRef {
    ///
    /// A shortcut constructor for a commit whose author is also the committer.
    ///
    pub fn new(
        id: impl Into<String>,
        author: Identity,
        message: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            committer: author.clone(),
            author,
            distinct: None,
            id: id.into(),
            message: message.into(),
            timestamp,
            tree_id: None,
            url: None,
        }
    }

    ///
    /// Checks that the commit is usable as a deduplication key.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id.trim().is_empty() {
            anyhow::bail!("The `id` field of the commit is empty");
        }
        if self.id.trim() != self.id {
            anyhow::bail!(
                "The `id` field of the commit `{}` has surrounding whitespace",
                self.id
            );
        }
        Ok(())
    }
}

impl TryFrom<PathBuf> for CommitRef {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} reading: {error}"))?;
        let commit: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} parsing: {error}"))?;
        commit.validate()?;
        Ok(commit)
    }
}
