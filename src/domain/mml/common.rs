//! MML common formats: identifiers, names, contact data, facilities, people

use crate::domain::codes::{Permit, RepCode};
use crate::domain::scalar::Scalar;
use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute bag of an element whose attributes are all optional codes
///
/// Absent values are never inserted, so an empty bag means the element is
/// written without an `attr` key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<&'static str, Scalar>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute unconditionally
    pub fn with(mut self, key: &'static str, value: impl Into<Scalar>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    /// Sets an attribute only when the source value is present
    pub fn with_opt<V>(mut self, key: &'static str, value: Option<&V>) -> Self
    where
        V: Clone + Into<Scalar>,
    {
        if let Some(v) = value {
            self.0.insert(key, v.clone().into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text element with optional coded attributes: `{value, attr?}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodedText {
    pub value: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attr: Attributes,
}

impl CodedText {
    pub fn new(value: impl Into<String>, attr: Attributes) -> Self {
        Self {
            value: value.into(),
            attr,
        }
    }

    /// Text element without attributes: `{value}`
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, Attributes::new())
    }
}

/// Numeric element with optional attributes (units, ranges)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    pub value: Scalar,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attr: Attributes,
}

/// Identifier with its MML type and code table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub value: String,
    pub attr: IdentifierAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierAttr {
    #[serde(rename = "type")]
    pub id_type: String,
    pub table_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptAttr {
    pub rep_code: RepCode,
    pub table_id: &'static str,
}

/// Person name in one script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonName {
    pub attr: ScriptAttr,
    pub fullname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

/// Facility or department name in one script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedName {
    pub value: String,
    pub attr: ScriptAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressAttr {
    pub rep_code: RepCode,
    pub address_class: &'static str,
    pub table_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub attr: AddressAttr,
    pub full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAttr {
    pub tel_equip_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    pub attr: PhoneAttr,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    pub name: Vec<LocalizedName>,
    #[serde(rename = "Id")]
    pub id: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub name: Vec<LocalizedName>,
    #[serde(rename = "Id")]
    pub id: Identifier,
}

/// Any human actor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedInfo {
    #[serde(rename = "Id")]
    pub id: Identifier,
    pub person_name: Vec<PersonName>,
    #[serde(rename = "Facility")]
    pub facility: Facility,
    #[serde(rename = "Department", skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<Phone>>,
}

/// Person plus licenses: the author of a document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorInfo {
    #[serde(rename = "PersonalizedInfo")]
    pub personalized_info: PersonalizedInfo,
    pub creator_license: Vec<CodedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtRefAttr {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Link to an external resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtRef {
    pub attr: ExtRefAttr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermitAttr {
    pub permit: Permit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessFacilityAttr {
    pub facility_code: &'static str,
    pub table_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessFacility {
    pub attr: AccessFacilityAttr,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPersonAttr {
    pub person_code: &'static str,
    pub table_id: &'static str,
    pub person_id: String,
    pub person_id_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessPerson {
    pub attr: AccessPersonAttr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One permission grant of a document's security level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessRight {
    pub attr: PermitAttr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Vec<AccessFacility>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Vec<AccessPerson>>,
}
