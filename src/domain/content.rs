//! Content-type tags of a simple composition
//!
//! Every content item declares a human-readable tag (`"Medication"`,
//! `"Vital Sign"`...). [`ContentType`] is the closed set of tags the assembler
//! knows how to build, each bound to its MML0005 module type code.

use crate::domain::errors::BuildError;
use std::fmt;
use std::str::FromStr;

/// Clinical content type of one composition item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    PatientInformation,
    HealthInsurance,
    MedicalDiagnosis,
    Lifestyle,
    BaseClinic,
    FirstClinic,
    ProgressCourse,
    Surgery,
    ClinicalSummary,
    LaboratoryReport,
    Report,
    Referral,
    VitalSign,
    FlowSheet,
    Medication,
    Injection,
}

impl ContentType {
    /// All content types, in MML module order
    pub const ALL: [ContentType; 16] = [
        Self::PatientInformation,
        Self::HealthInsurance,
        Self::MedicalDiagnosis,
        Self::Lifestyle,
        Self::BaseClinic,
        Self::FirstClinic,
        Self::ProgressCourse,
        Self::Surgery,
        Self::ClinicalSummary,
        Self::LaboratoryReport,
        Self::Report,
        Self::Referral,
        Self::VitalSign,
        Self::FlowSheet,
        Self::Medication,
        Self::Injection,
    ];

    /// The tag callers write in `contentType`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PatientInformation => "Patient Information",
            Self::HealthInsurance => "Health Insurance",
            Self::MedicalDiagnosis => "Medical Diagnosis",
            Self::Lifestyle => "Lifestyle",
            Self::BaseClinic => "Base Clinic",
            Self::FirstClinic => "First Clinic",
            Self::ProgressCourse => "Progress Course",
            Self::Surgery => "Surgery",
            Self::ClinicalSummary => "Clinical Summary",
            Self::LaboratoryReport => "Laboratory Report",
            Self::Report => "Report",
            Self::Referral => "Referral",
            Self::VitalSign => "Vital Sign",
            Self::FlowSheet => "Flow Sheet",
            Self::Medication => "Medication",
            Self::Injection => "Injection",
        }
    }

    /// MML0005 `contentModuleType` of the module built for this tag
    pub fn module_type(&self) -> &'static str {
        match self {
            Self::PatientInformation => "patientInfo",
            Self::HealthInsurance => "healthInsurance",
            Self::MedicalDiagnosis => "registeredDiagnosis",
            Self::Lifestyle => "lifestyle",
            Self::BaseClinic => "baseClinic",
            Self::FirstClinic => "firstClinic",
            Self::ProgressCourse => "progressCourse",
            Self::Surgery => "surgery",
            Self::ClinicalSummary => "clinicalSummary",
            Self::LaboratoryReport => "test",
            Self::Report => "report",
            Self::Referral => "referral",
            Self::VitalSign => "vitalsign",
            Self::FlowSheet => "flowsheet",
            Self::Medication => "prescription",
            Self::Injection => "injection",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ContentType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.tag() == s)
            .ok_or_else(|| BuildError::UnknownContentType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Medication", ContentType::Medication, "prescription")]
    #[test_case("Medical Diagnosis", ContentType::MedicalDiagnosis, "registeredDiagnosis")]
    #[test_case("Laboratory Report", ContentType::LaboratoryReport, "test")]
    #[test_case("Patient Information", ContentType::PatientInformation, "patientInfo")]
    #[test_case("Vital Sign", ContentType::VitalSign, "vitalsign")]
    #[test_case("Injection", ContentType::Injection, "injection")]
    fn test_tag_dispatch(tag: &str, expected: ContentType, module_type: &str) {
        let ct: ContentType = tag.parse().unwrap();
        assert_eq!(ct, expected);
        assert_eq!(ct.module_type(), module_type);
    }

    #[test]
    fn test_every_tag_round_trips() {
        for ct in ContentType::ALL {
            assert_eq!(ct.tag().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "Hemodialysis".parse::<ContentType>().unwrap_err();
        assert_eq!(err, BuildError::UnknownContentType("Hemodialysis".to_string()));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("medication".parse::<ContentType>().is_err());
    }
}
