//! "Simple" input records
//!
//! These are the developer-friendly shapes callers post as JSON. Every field is
//! optional at the serde level: required fields are enforced by the builders so
//! that a missing value becomes a [`BuildError::MissingField`] naming the field
//! instead of a deserialization failure for the whole composition.
//!
//! [`BuildError::MissingField`]: crate::domain::errors::BuildError::MissingField

pub mod clinical;
pub mod medication;
pub mod observation;
pub mod person;

pub use clinical::*;
pub use medication::*;
pub use observation::*;
pub use person::*;

use crate::domain::codes::Permit;
use serde::{Deserialize, Deserializer};

/// Top-level input: a context plus an ordered list of tagged content items
///
/// Content items stay as raw JSON until the assembler reads their
/// `contentType` tag, so one malformed item cannot fail the whole composition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default)]
    pub context: CompositionContext,

    #[serde(default)]
    pub content: Vec<serde_json::Value>,
}

/// Data shared by every module of a composition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionContext {
    /// Composition id, used as the group id of every module
    pub uuid: Option<String>,
    pub confirm_date: Option<String>,
    pub patient: Option<SimplePatient>,
    pub creator: Option<SimplePerson>,
    pub access_right: Option<SimpleAccessRight>,
}

/// Explicit permission levels for the three access right targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAccessRight {
    pub creator: Option<Permit>,
    pub experience: Option<Permit>,
    pub patient: Option<Permit>,
}

/// Per-item envelope fields read alongside the content type tag
///
/// The document title is read from `docTitle` because module records such as
/// the referral letter carry a `title` of their own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEnvelope {
    pub content_type: Option<String>,
    pub doc_title: Option<String>,
    #[serde(rename = "parentUUID")]
    pub parent_uuid: Option<String>,
    pub parent_confirm_date: Option<String>,
    pub event_date: Option<String>,
}

/// Reference to an external resource (image, PDF...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleExtRef {
    pub href: Option<String>,
    pub content_type: Option<String>,
    pub medical_role: Option<String>,
    pub title: Option<String>,
}

/// Accepts either a single string or a list of strings
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|v| match v {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(list) => list,
        }),
    )
}
