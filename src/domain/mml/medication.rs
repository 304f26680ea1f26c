//! Prescription and injection modules

use super::common::CodedText;
use crate::domain::scalar::Scalar;
use serde::Serialize;

/// Medicine name plus its codes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medicine {
    pub name: String,
    pub code: Vec<CodedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescribedMedication {
    pub medicine: Medicine,
    pub dose: Scalar,
    pub dose_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_per_day: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(rename = "PRN", skip_serializing_if = "Option::is_none")]
    pub prn: Option<bool>,
    pub brand_substitution_permitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term: Option<bool>,
}

/// One prescription; `issuedTo` is absent for the unspecified bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_to: Option<String>,
    pub medication: Vec<PrescribedMedication>,
}

impl PrescriptionModule {
    pub fn is_empty(&self) -> bool {
        self.medication.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedMedication {
    pub medicine: Medicine,
    pub dose: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_instruction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionModule {
    pub medication: Vec<InjectedMedication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narcotic_prescription_license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
