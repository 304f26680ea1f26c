//! Builders mapping simple records to MML fragments
//!
//! Builders are free functions over borrowed input records. They never mint
//! ids or read the clock; the composition assembler supplies both.
//!
//! # Modules
//!
//! - [`primitives`]: identifiers, names, addresses, phones, facilities
//! - [`person`]: `PersonalizedInfo` and `CreatorInfo`
//! - [`access`]: security level grants
//! - [`doc_info`]: the per-module `docInfo` envelope
//! - [`modules`]: one builder per clinical content type
//!
//! # Example
//!
//! ```rust
//! use mmlgen::core::builder::build_item;
//! use mmlgen::domain::ContentType;
//! use serde_json::json;
//!
//! let item = json!({
//!     "contentType": "Medical Diagnosis",
//!     "diagnosis": "胃潰瘍",
//!     "code": "K259",
//!     "system": "ICD10"
//! });
//! let built = build_item(ContentType::MedicalDiagnosis, &item).unwrap();
//! assert_eq!(built.modules.len(), 1);
//! ```

pub mod access;
pub mod doc_info;
pub mod modules;
pub mod person;
pub mod primitives;

use crate::domain::mml::{CreatorInfo, ModuleContent};
use crate::domain::{BuildError, BuildResult, ContentType};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Borrows a required field or reports it missing
pub(crate) fn required<'a, T>(
    value: &'a Option<T>,
    module: &'static str,
    field: &'static str,
) -> BuildResult<&'a T> {
    value.as_ref().ok_or(BuildError::missing(module, field))
}

/// Reads a content item into its typed simple record
pub fn decode<T: DeserializeOwned>(content_type: ContentType, item: &Value) -> BuildResult<T> {
    T::deserialize(item).map_err(|e| BuildError::InvalidContent {
        content_type: content_type.tag().to_string(),
        message: e.to_string(),
    })
}

/// Module contents built from one content item
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltItem {
    /// Usually one; a medication item yields one per non-empty bucket
    pub modules: Vec<ModuleContent>,
    /// Envelope creator replacing the composition creator
    pub creator: Option<CreatorInfo>,
}

impl BuiltItem {
    fn single(content: ModuleContent) -> Self {
        Self {
            modules: vec![content],
            creator: None,
        }
    }
}

/// Builds the module contents of one content item
///
/// Laboratory reports also carry their laboratory as the envelope creator.
pub fn build_item(content_type: ContentType, item: &Value) -> BuildResult<BuiltItem> {
    use modules::*;

    let built = match content_type {
        ContentType::PatientInformation => BuiltItem::single(ModuleContent::Patient(Box::new(
            build_patient_module(&decode(content_type, item)?)?,
        ))),
        ContentType::HealthInsurance => BuiltItem::single(ModuleContent::HealthInsurance(
            build_health_insurance_module(&decode(content_type, item)?)?,
        )),
        ContentType::MedicalDiagnosis => BuiltItem::single(ModuleContent::RegisteredDiagnosis(
            build_registered_diagnosis_module(&decode(content_type, item)?)?,
        )),
        ContentType::Lifestyle => BuiltItem::single(ModuleContent::Lifestyle(
            build_lifestyle_module(&decode(content_type, item)?)?,
        )),
        ContentType::BaseClinic => BuiltItem::single(ModuleContent::BaseClinic(
            build_base_clinic_module(&decode(content_type, item)?)?,
        )),
        ContentType::FirstClinic => BuiltItem::single(ModuleContent::FirstClinic(
            build_first_clinic_module(&decode(content_type, item)?)?,
        )),
        ContentType::ProgressCourse => BuiltItem::single(ModuleContent::ProgressCourse(
            build_progress_course_module(&decode(content_type, item)?)?,
        )),
        ContentType::Surgery => BuiltItem::single(ModuleContent::Surgery(build_surgery_module(
            &decode(content_type, item)?,
        )?)),
        ContentType::ClinicalSummary => BuiltItem::single(ModuleContent::Summary(Box::new(
            build_summary_module(&decode(content_type, item)?)?,
        ))),
        ContentType::LaboratoryReport => {
            let test: crate::domain::simple::SimpleTest = decode(content_type, item)?;
            let (module, laboratory) = build_test_module(&test)?;
            BuiltItem {
                modules: vec![ModuleContent::Test(module)],
                creator: Some(laboratory),
            }
        }
        ContentType::Report => BuiltItem::single(ModuleContent::Report(Box::new(
            build_report_module(&decode(content_type, item)?)?,
        ))),
        ContentType::Referral => BuiltItem::single(ModuleContent::Referral(Box::new(
            build_referral_module(&decode(content_type, item)?)?,
        ))),
        ContentType::VitalSign => BuiltItem::single(ModuleContent::VitalSign(
            build_vital_sign_module(&decode(content_type, item)?)?,
        )),
        ContentType::FlowSheet => BuiltItem::single(ModuleContent::FlowSheet(
            build_flow_sheet_module(&decode(content_type, item)?)?,
        )),
        ContentType::Medication => BuiltItem {
            modules: build_prescription_module(&decode(content_type, item)?)?
                .into_iter()
                .filter(|bucket| !bucket.is_empty())
                .map(ModuleContent::Prescription)
                .collect(),
            creator: None,
        },
        ContentType::Injection => BuiltItem::single(ModuleContent::Injection(
            build_injection_module(&decode(content_type, item)?)?,
        )),
    };

    Ok(built)
}
