//! Domain error types
//!
//! Two layers of errors live here. [`MmlError`] is the crate-wide error returned
//! by configuration, I/O and composition-level failures. [`BuildError`] is the
//! narrower error a single module builder raises; the composition assembler
//! turns it into an [`ItemIssue`] attached to the failing item's slot instead of
//! aborting the whole document.

use serde::Serialize;
use thiserror::Error;

/// Main mmlgen error type
#[derive(Debug, Error)]
pub enum MmlError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A composition-level builder failure (patient, creator, access rights)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while mapping one simple record into an MML fragment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required field, or the companion of a paired field, is absent
    #[error("{module}: missing required field '{field}'")]
    MissingField {
        /// Module or fragment being built (e.g. `PrescriptionModule`)
        module: &'static str,
        /// Field name as it appears in the simple JSON record
        field: &'static str,
    },

    /// The content item's type tag is not one the assembler dispatches
    #[error("unknown content type '{0}'")]
    UnknownContentType(String),

    /// The content item carries no `contentType` tag
    #[error("content item has no contentType")]
    MissingContentType,

    /// The content item's JSON does not fit the typed record
    #[error("invalid {content_type} content: {message}")]
    InvalidContent {
        content_type: String,
        message: String,
    },
}

impl BuildError {
    /// Shorthand for [`BuildError::MissingField`]
    pub fn missing(module: &'static str, field: &'static str) -> Self {
        Self::MissingField { module, field }
    }

    /// Stable machine-readable kind, used in serialized issues
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::MissingField { .. } => IssueKind::MissingField,
            Self::UnknownContentType(_) => IssueKind::UnknownContentType,
            Self::MissingContentType => IssueKind::MissingContentType,
            Self::InvalidContent { .. } => IssueKind::InvalidContent,
        }
    }
}

/// Classification of a rejected content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    MissingField,
    UnknownContentType,
    MissingContentType,
    InvalidContent,
}

/// A rejected content item as it appears in the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIssue {
    /// Position of the item in the composition's `content` list
    pub index: usize,

    /// The item's declared tag, when it had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    pub kind: IssueKind,

    /// Missing field name for [`IssueKind::MissingField`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Module or fragment that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    pub message: String,
}

impl ItemIssue {
    /// Creates an issue for the item at `index`
    pub fn new(index: usize, content_type: Option<&str>, error: &BuildError) -> Self {
        let (module, field) = match error {
            BuildError::MissingField { module, field } => {
                (Some(module.to_string()), Some(field.to_string()))
            }
            _ => (None, None),
        };
        Self {
            index,
            content_type: content_type.map(str::to_string),
            kind: error.kind(),
            field,
            module,
            message: error.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MmlError {
    fn from(err: std::io::Error) -> Self {
        MmlError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MmlError {
    fn from(err: serde_json::Error) -> Self {
        MmlError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MmlError {
    fn from(err: toml::de::Error) -> Self {
        MmlError::Configuration(format!("TOML parse error: {err}"))
    }
}
