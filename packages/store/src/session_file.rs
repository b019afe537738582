//! # On-disk session document: `session.toml`
//!
//! Native platforms persist the session as a tiny TOML file:
//!
//! ```toml
//! user_id = "42"
//! ```
//!
//! A missing or empty file is equivalent to [`SessionFile::default`], which
//! holds no session.

use serde::{Deserialize, Serialize};

/// Contents of `session.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Identifier of the signed-in user, absent when anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SessionFile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// The well-known filename for the session file.
    pub fn filename() -> &'static str {
        "session.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_anonymous() {
        let file = SessionFile::from_toml("").unwrap();
        assert_eq!(file, SessionFile::default());
        assert!(file.user_id.is_none());
    }

    #[test]
    fn test_reads_user_id() {
        let file = SessionFile::from_toml("user_id = \"42\"\n").unwrap();
        assert_eq!(file.user_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_anonymous_serializes_to_empty_document() {
        let text = SessionFile::default().to_toml().unwrap();
        assert!(text.trim().is_empty());
    }
}
