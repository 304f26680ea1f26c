//! MML code tables and fixed coded values
//!
//! Only the table identifiers and the handful of codes the builders emit on
//! their own live here. Codes supplied by callers (sex, license, outcome...)
//! are passed through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MML0012 diagnosis category
pub const TABLE_DIAGNOSIS_CATEGORY: &str = "MML0012";
/// MML0024 person id type
pub const TABLE_PERSON_ID: &str = "MML0024";
/// MML0025 representation code (script)
pub const TABLE_REP_CODE: &str = "MML0025";
/// MML0026 creator license
pub const TABLE_LICENSE: &str = "MML0026";
/// MML0027 facility id type
pub const TABLE_FACILITY_ID: &str = "MML0027";
/// MML0028 medical department codes
pub const TABLE_MEDICAL_DEPARTMENT: &str = "MML0028";
/// MML0029 department id type
pub const TABLE_DEPARTMENT_ID: &str = "MML0029";
/// MML0031 insurance class
pub const TABLE_INSURANCE_CLASS: &str = "MML0031";
/// MML0035 access right facility code
pub const TABLE_ACCESS_FACILITY: &str = "MML0035";
/// MML0036 access right person code
pub const TABLE_ACCESS_PERSON: &str = "MML0036";
/// Laboratory report status table
pub const TABLE_REPORT_STATUS: &str = "mmlLb0001";

/// Person id type whose table reference is the issuing facility's id
pub const PERSON_ID_TYPE_FACILITY: &str = "facility";
/// Facility id scheme used for birth facilities
pub const FACILITY_ID_TYPE_OID: &str = "OID";

/// Address classes (MML0002)
pub const ADDRESS_CLASS_BUSINESS: &str = "business";
pub const ADDRESS_CLASS_HOME: &str = "home";

/// Telephone equipment types (MML0003)
pub const TEL_EQUIP_PHONE: &str = "PH";
pub const TEL_EQUIP_MOBILE: &str = "CR";

/// Department id types (MML0029)
pub const DEPARTMENT_ID_MEDICAL: &str = "medical";
pub const DEPARTMENT_ID_DENTAL: &str = "dental";
pub const DEPARTMENT_ID_FACILITY: &str = "facility";

/// Access right facility codes and their display labels (MML0035)
pub const ACCESS_FACILITY_CREATOR: &str = "creator";
pub const ACCESS_FACILITY_CREATOR_LABEL: &str = "記載者施設";
pub const ACCESS_FACILITY_EXPERIENCE: &str = "experience";
pub const ACCESS_FACILITY_EXPERIENCE_LABEL: &str = "診療歴のある施設";
/// Access right person code (MML0036)
pub const ACCESS_PERSON_PATIENT: &str = "patient";
/// Default person id type attached to the patient grant
pub const DEFAULT_PERSON_ID_TYPE: &str = "dolphinUserId_2001-10-03";

/// Default generation purpose (MML0007)
pub const GENERATION_PURPOSE_RECORD: &str = "record";
/// Parent relation used for revisions (MML0008)
pub const RELATION_OLD_EDITION: &str = "oldEdition";
/// Country type applied to health insurance when none is supplied
pub const DEFAULT_COUNTRY_TYPE: &str = "JPN";

/// Units attached to first-clinic birth measurements
pub const UNIT_GRAM: &str = "g";
pub const UNIT_CENTIMETER: &str = "cm";

/// Prescription `issuedTo` discriminators
pub const ISSUED_TO_EXTERNAL: &str = "external";
pub const ISSUED_TO_INTERNAL: &str = "internal";

/// Script a localized name or address is written in (MML0025)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepCode {
    /// Ideographic (kanji)
    #[serde(rename = "I")]
    Kanji,
    /// Phonetic (kana)
    #[serde(rename = "P")]
    Kana,
    /// Alphabetic (roman)
    #[serde(rename = "A")]
    Roman,
}

impl RepCode {
    /// Returns the single-letter MML0025 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kanji => "I",
            Self::Kana => "P",
            Self::Roman => "A",
        }
    }
}

impl fmt::Display for RepCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access permission level granted by a security level entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permit {
    All,
    Read,
    Write,
    Delete,
    None,
}

impl Permit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Permit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "delete" => Ok(Self::Delete),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "Invalid permit '{s}'. Must be one of: all, read, write, delete, none"
            )),
        }
    }
}
