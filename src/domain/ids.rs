//! Document identifier types
//!
//! MML requires every module document to carry a unique id written as a
//! hyphenated UUID. [`DocumentUid`] wraps that string so ids minted by the
//! assembler cannot be confused with the free-form ids (patient, facility,
//! department) that arrive in the simple records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique id of one MML document (module or composition)
///
/// # Examples
///
/// ```
/// use mmlgen::domain::ids::DocumentUid;
/// use std::str::FromStr;
///
/// let uid = DocumentUid::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(uid.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentUid(String);

impl DocumentUid {
    /// Creates a DocumentUid from a caller-supplied string
    ///
    /// Ids coming from callers (composition uuid, parent uuid) are not
    /// required to be UUIDs, only non-blank.
    pub fn new(uid: impl Into<String>) -> Result<Self, String> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err("Document UID cannot be empty".to_string());
        }
        Ok(Self(uid))
    }

    /// Wraps a freshly minted UUID in its hyphenated form
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentUid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for DocumentUid {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}
