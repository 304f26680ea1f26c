//! Prescription and injection inputs

use crate::domain::scalar::Scalar;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePrescription {
    pub medication: Option<Vec<SimpleMedication>>,
}

/// One prescribed medicine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMedication {
    /// `external`, `internal` or anything else for unspecified
    pub issued_to: Option<Scalar>,
    pub medicine: Option<String>,
    pub medicine_code: Option<String>,
    pub medicine_code_system: Option<String>,
    /// Misspelled key still sent by older callers
    #[serde(rename = "medicineCodeystem")]
    pub medicine_codeystem: Option<String>,
    pub dose: Option<Scalar>,
    pub dose_unit: Option<String>,
    pub frequency_per_day: Option<Scalar>,
    pub start_date: Option<String>,
    pub duration: Option<Scalar>,
    pub instruction: Option<String>,
    #[serde(rename = "PRN")]
    pub prn: Option<bool>,
    pub brand_substitution_permitted: Option<bool>,
    pub long_term: Option<bool>,
}

impl SimpleMedication {
    /// Coding system of the medicine; the correctly spelled key wins
    pub fn code_system(&self) -> Option<&String> {
        self.medicine_code_system
            .as_ref()
            .or(self.medicine_codeystem.as_ref())
    }

    /// `issuedTo` when it is one of the textual values
    pub fn issued_to(&self) -> Option<&str> {
        self.issued_to.as_ref().and_then(Scalar::as_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInjection {
    pub medication: Option<Vec<SimpleInjectedMedication>>,
    pub narcotic_prescription_license_number: Option<String>,
    pub comment: Option<String>,
}

/// One injected medicine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInjectedMedication {
    pub medicine: Option<String>,
    pub medicine_code: Option<String>,
    pub medicine_code_system: Option<String>,
    /// Misspelled key still sent by older callers
    #[serde(rename = "medicineCodeystem")]
    pub medicine_codeystem: Option<String>,
    pub dose: Option<Scalar>,
    pub dose_unit: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub instruction: Option<String>,
    pub route: Option<String>,
    pub site: Option<String>,
    pub delivery_method: Option<String>,
    pub batch_no: Option<String>,
    pub additional_instruction: Option<String>,
}

impl SimpleInjectedMedication {
    /// Coding system of the medicine; the correctly spelled key wins
    pub fn code_system(&self) -> Option<&String> {
        self.medicine_code_system
            .as_ref()
            .or(self.medicine_codeystem.as_ref())
    }
}
