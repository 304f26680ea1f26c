//! Referral letter module

use super::medication::{build_injection_module, build_prescription_module};
use super::patient::build_patient_module;
use crate::core::builder::person::build_personalized_info;
use crate::core::builder::primitives::{build_department, build_ext_refs, build_facility};
use crate::core::builder::required;
use crate::domain::mml::{CodedText, ReferToFacility, ReferralMedication, ReferralModule};
use crate::domain::simple::{SimpleReferToFacility, SimpleReferral, SimpleReferralMedication};
use crate::domain::BuildResult;

const MODULE: &str = "ReferralModule";

fn build_medication(medication: &SimpleReferralMedication) -> BuildResult<ReferralMedication> {
    let prescription = match &medication.simple_prescription {
        Some(p) => {
            let buckets: Vec<_> = build_prescription_module(p)?
                .into_iter()
                .filter(|b| !b.is_empty())
                .collect();
            (!buckets.is_empty()).then_some(buckets)
        }
        None => None,
    };

    Ok(ReferralMedication {
        value: medication.medication.clone(),
        prescription,
        injection: medication
            .simple_injection
            .as_ref()
            .map(build_injection_module)
            .transpose()?,
        ext_ref: build_ext_refs(medication.ext_ref.as_ref(), MODULE)?,
    })
}

fn build_refer_to_facility(to: &SimpleReferToFacility) -> BuildResult<ReferToFacility> {
    let facility = to
        .facility
        .as_ref()
        .map(|f| {
            Ok(build_facility(
                required(&f.facility_id, MODULE, "facilityId")?,
                required(&f.facility_id_type, MODULE, "facilityIdType")?,
                required(&f.facility_name, MODULE, "facilityName")?,
            ))
        })
        .transpose()?;

    let department = to
        .department
        .as_ref()
        .map(|d| {
            Ok(build_department(
                required(&d.department_id, MODULE, "departmentId")?,
                required(&d.department_id_type, MODULE, "departmentIdType")?,
                required(&d.department_name, MODULE, "departmentName")?,
            ))
        })
        .transpose()?;

    Ok(ReferToFacility {
        facility,
        department,
    })
}

/// Builds a referral letter
///
/// The referred patient is embedded as a full patient module. Free-text
/// history sections become `{value}` elements.
pub fn build_referral_module(referral: &SimpleReferral) -> BuildResult<ReferralModule> {
    let patient = required(&referral.patient, MODULE, "patient")?;
    let refer_from = required(&referral.refer_from, MODULE, "referFrom")?;
    let title = required(&referral.title, MODULE, "title")?;
    let chief_complaints = required(&referral.chief_complaints, MODULE, "chiefComplaints")?;

    Ok(ReferralModule {
        patient: build_patient_module(patient)?,
        occupation: referral.occupation.clone(),
        refer_from: build_personalized_info(refer_from)?,
        title: title.clone(),
        greeting: referral.greeting.clone(),
        chief_complaints: chief_complaints.clone(),
        clinical_diagnosis: referral.clinical_diagnosis.clone(),
        past_history: referral.past_history.clone().map(CodedText::plain),
        family_history: referral.family_history.clone().map(CodedText::plain),
        present_illness: referral.present_illness.clone().map(CodedText::plain),
        test_results: referral.test_results.clone().map(CodedText::plain),
        clinical_course: referral.clinical_course.clone(),
        medication: referral
            .medication
            .as_ref()
            .map(build_medication)
            .transpose()?,
        refer_purpose: referral.refer_purpose.clone(),
        remarks: referral.remarks.clone().map(CodedText::plain),
        refer_to_facility: referral
            .refer_to_facility
            .as_ref()
            .map(build_refer_to_facility)
            .transpose()?,
        refer_to_person: referral
            .refer_to_person
            .as_ref()
            .map(build_personalized_info)
            .transpose()?,
        refer_to_unknown_name: referral.refer_to_unknown_name.clone(),
    })
}
