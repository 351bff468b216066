//!
//! A commit author or committer identity.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A commit author or committer identity.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The display name.
    pub name: String,
    /// The e-mail address.
    pub email: String,
    /// The hosting service login, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Identity {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: None,
        }
    }
}
