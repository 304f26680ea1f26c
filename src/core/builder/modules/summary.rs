//! Clinical summary module

use super::diagnosis::build_registered_diagnosis_module;
use super::medication::build_prescription_module;
use super::surgery::build_surgery_module;
use crate::core::builder::person::{build_creator_info, build_personalized_info};
use crate::core::builder::primitives::build_ext_refs;
use crate::core::builder::required;
use crate::domain::mml::{
    Admission, Attributes, ClinicalRecord, CodedText, CreatorInfo, Discharge, InPatientItem,
    OutPatientItem, ServiceHistory, SummaryMedication, SummaryModule,
};
use crate::domain::simple::{
    SimpleAdmission, SimpleDeathInfo, SimpleDischarge, SimpleExtRef, SimpleInPatient,
    SimpleOutPatient, SimplePerson, SimpleRelatedDoc, SimpleSummary, SimpleSummaryContext,
    SimpleSummaryMedication,
};
use crate::domain::{BuildError, BuildResult};

const MODULE: &str = "SummaryModule";

fn build_staffs(staffs: &Option<Vec<SimplePerson>>) -> BuildResult<Option<Vec<CreatorInfo>>> {
    staffs
        .as_ref()
        .map(|list| list.iter().map(build_creator_info).collect())
        .transpose()
}

fn build_out_patient(item: &SimpleOutPatient) -> BuildResult<OutPatientItem> {
    Ok(OutPatientItem {
        date: required(&item.date, MODULE, "date")?.clone(),
        out_patient_condition: item.out_patient_condition.as_ref().map(|condition| {
            CodedText::new(
                condition.clone(),
                Attributes::new()
                    .with_opt("first", item.first.as_ref())
                    .with_opt("emergency", item.emergency.as_ref()),
            )
        }),
        staffs: build_staffs(&item.staffs)?,
    })
}

fn build_admission(admission: &SimpleAdmission) -> BuildResult<Admission> {
    let admission_condition = match (&admission.admission_condition, &admission.emergency) {
        (Some(condition), emergency) => Some(CodedText::new(
            condition.clone(),
            Attributes::new().with_opt("emergency", emergency.as_ref()),
        )),
        (None, Some(_)) => return Err(BuildError::missing(MODULE, "admissionCondition")),
        (None, None) => None,
    };

    Ok(Admission {
        date: required(&admission.date, MODULE, "date")?.clone(),
        admission_condition,
        refer_from: admission
            .refer_from
            .as_ref()
            .map(build_personalized_info)
            .transpose()?,
    })
}

fn build_discharge(discharge: &SimpleDischarge) -> BuildResult<Discharge> {
    let discharge_condition = match (&discharge.discharge_condition, &discharge.outcome) {
        (Some(condition), outcome) => Some(CodedText::new(
            condition.clone(),
            Attributes::new().with_opt("outcome", outcome.as_ref()),
        )),
        (None, Some(_)) => return Err(BuildError::missing(MODULE, "dischargeCondition")),
        (None, None) => None,
    };

    Ok(Discharge {
        date: required(&discharge.date, MODULE, "date")?.clone(),
        discharge_condition,
        refer_to: discharge
            .refer_to
            .as_ref()
            .map(build_personalized_info)
            .transpose()?,
    })
}

fn build_in_patient(item: &SimpleInPatient) -> BuildResult<InPatientItem> {
    Ok(InPatientItem {
        admission: item.admission.as_ref().map(build_admission).transpose()?,
        discharge: item.discharge.as_ref().map(build_discharge).transpose()?,
        staffs: build_staffs(&item.staffs)?,
    })
}

fn build_service_history(context: &SimpleSummaryContext) -> BuildResult<ServiceHistory> {
    let start = required(&context.start, MODULE, "start")?;
    let end = required(&context.end, MODULE, "end")?;

    Ok(ServiceHistory {
        attr: Attributes::new()
            .with("start", start.clone())
            .with("end", end.clone()),
        out_patient: context
            .out_patient
            .as_ref()
            .map(|items| items.iter().map(build_out_patient).collect::<BuildResult<Vec<_>>>())
            .transpose()?,
        in_patient: context
            .in_patient
            .as_ref()
            .map(|items| items.iter().map(build_in_patient).collect::<BuildResult<Vec<_>>>())
            .transpose()?,
    })
}

fn build_death_info(death: &SimpleDeathInfo) -> BuildResult<CodedText> {
    Ok(CodedText::new(
        required(&death.info, MODULE, "info")?.clone(),
        Attributes::new()
            .with_opt("date", death.date.as_ref())
            .with_opt("autopsy", death.autopsy.as_ref()),
    ))
}

fn build_related_docs(
    docs: &Option<Vec<SimpleRelatedDoc>>,
) -> BuildResult<Option<Vec<CodedText>>> {
    docs.as_ref()
        .map(|docs| {
            docs.iter()
                .map(|doc| {
                    Ok(CodedText::new(
                        required(&doc.uuid, MODULE, "uuid")?.clone(),
                        Attributes::new()
                            .with("relation", required(&doc.relation, MODULE, "relation")?.clone()),
                    ))
                })
                .collect()
        })
        .transpose()
}

/// Dated record shared by `clinicalCourse` and `testResults`
fn build_clinical_record(
    date: &Option<String>,
    text: &Option<String>,
    text_field: &'static str,
    related_doc: &Option<Vec<SimpleRelatedDoc>>,
    ext_ref: &Option<Vec<SimpleExtRef>>,
) -> BuildResult<ClinicalRecord> {
    Ok(ClinicalRecord {
        attr: Attributes::new().with("date", required(date, MODULE, "date")?.clone()),
        value: required(text, MODULE, text_field)?.clone(),
        related_doc: build_related_docs(related_doc)?,
        ext_ref: build_ext_refs(ext_ref.as_ref(), MODULE)?,
    })
}

fn build_summary_medication(medication: &SimpleSummaryMedication) -> BuildResult<SummaryMedication> {
    let prescription = medication
        .simple_prescription
        .as_ref()
        .map(|p| {
            build_prescription_module(p)
                .map(|buckets| buckets.into_iter().filter(|b| !b.is_empty()).collect::<Vec<_>>())
        })
        .transpose()?;

    Ok(SummaryMedication {
        value: medication.medication.clone(),
        prescription,
        ext_ref: build_ext_refs(medication.ext_ref.as_ref(), MODULE)?,
    })
}

/// Builds the clinical summary module
///
/// Only the service period is required. An admission `emergency` flag needs
/// its `admissionCondition`, and a discharge `outcome` its
/// `dischargeCondition`, since both are written as attributes of those.
pub fn build_summary_module(summary: &SimpleSummary) -> BuildResult<SummaryModule> {
    let context = required(&summary.context, MODULE, "context")?;

    let clinical_course = summary
        .clinical_course
        .as_ref()
        .map(|records| {
            records
                .iter()
                .map(|r| {
                    build_clinical_record(&r.date, &r.record, "record", &r.related_doc, &r.ext_ref)
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    let test_results = summary
        .test_results
        .as_ref()
        .map(|records| {
            records
                .iter()
                .map(|r| {
                    build_clinical_record(
                        &r.date,
                        &r.test_result,
                        "testResult",
                        &r.related_doc,
                        &r.ext_ref,
                    )
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(SummaryModule {
        service_history: build_service_history(context)?,
        diagnosis: summary
            .simple_diagnosis
            .as_ref()
            .map(build_registered_diagnosis_module)
            .transpose()?,
        death_info: summary.death_info.as_ref().map(build_death_info).transpose()?,
        surgery: summary
            .simple_surgery
            .as_ref()
            .map(|list| list.iter().map(build_surgery_module).collect::<BuildResult<Vec<_>>>())
            .transpose()?,
        chief_complaints: summary.chief_complaints.clone(),
        patient_profile: summary.patient_profile.clone(),
        history: summary.history.clone(),
        physical_exam: summary.physical_exam.as_deref().map(CodedText::plain),
        clinical_course,
        discharge_findings: summary.discharge_findings.as_deref().map(CodedText::plain),
        medication: summary
            .medication
            .as_ref()
            .map(build_summary_medication)
            .transpose()?,
        test_results,
        plan: summary.plan.as_deref().map(CodedText::plain),
        remarks: summary.remarks.clone(),
    })
}
