//! Clinical record inputs: insurance, diagnosis, history, surgery, summary, referral

use super::{one_or_many, SimpleExtRef, SimpleInjection, SimplePatient, SimplePerson};
use super::{SimplePrescription, SimpleStaff};
use crate::domain::scalar::Scalar;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleHealthInsurance {
    pub country_type: Option<String>,
    pub insurance_class: Option<String>,
    pub insurance_class_code: Option<String>,
    pub insurance_number: Option<String>,
    pub client_group: Option<String>,
    pub client_number: Option<String>,
    pub family_class: Option<Scalar>,
    pub start_date: Option<String>,
    pub expired_date: Option<String>,
    pub continued_diseases: Option<Vec<String>>,
    pub payment_in_ratio: Option<Scalar>,
    pub payment_out_ratio: Option<Scalar>,
    pub public_insurance: Option<Vec<SimplePublicInsurance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePublicInsurance {
    pub priority: Option<Scalar>,
    pub provider_name: Option<String>,
    pub provider: Option<String>,
    pub recipient: Option<String>,
    pub start_date: Option<String>,
    pub expired_date: Option<String>,
    pub payment_ratio: Option<Scalar>,
    /// MML0032
    pub payment_ratio_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDiagnosis {
    pub diagnosis: Option<String>,
    pub code: Option<String>,
    pub system: Option<String>,
    pub category: Option<String>,
    pub date_of_onset: Option<String>,
    pub date_of_remission: Option<String>,
    /// MML0016
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLifestyle {
    pub occupation: Option<String>,
    pub tobacco: Option<String>,
    pub alcohol: Option<String>,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBaseClinic {
    pub allergy: Option<Vec<SimpleAllergy>>,
    pub bloodtype: Option<SimpleBloodtype>,
    pub infection: Option<Vec<SimpleInfection>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAllergy {
    pub factor: Option<String>,
    /// MML0017
    pub severity: Option<String>,
    pub identified_date: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBloodtype {
    /// MML0018
    pub abo: Option<String>,
    /// MML0019
    pub rh: Option<String>,
    pub others: Option<Vec<SimpleOtherBloodtype>>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOtherBloodtype {
    pub type_name: Option<String>,
    pub type_judgement: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInfection {
    pub factor: Option<String>,
    pub exam_value: Option<String>,
    pub identified_date: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFirstClinic {
    pub family_history: Option<Vec<SimpleFamilyHistory>>,
    pub childhood: Option<SimpleChildhood>,
    pub past_history: Option<SimplePastHistory>,
    pub chief_complaints: Option<String>,
    pub present_illness_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFamilyHistory {
    /// MML0020
    pub relation: Option<String>,
    pub simple_diagnosis: Option<SimpleDiagnosis>,
    pub age: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleChildhood {
    pub birth_info: Option<SimpleBirthInfo>,
    pub vaccination: Option<Vec<SimpleVaccination>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBirthInfo {
    /// OID of the delivering facility
    pub facility_id: Option<String>,
    pub facility_name: Option<String>,
    pub delivery_weeks: Option<String>,
    pub delivery_method: Option<String>,
    pub body_weight: Option<Scalar>,
    pub body_height: Option<Scalar>,
    pub chest_circumference: Option<Scalar>,
    pub head_circumference: Option<Scalar>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVaccination {
    pub vaccine: Option<String>,
    pub injected: Option<Scalar>,
    pub age: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePastHistory {
    pub free_notes: Option<String>,
    pub past_history_item: Option<Vec<SimplePastHistoryItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePastHistoryItem {
    pub time_expression: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub event_expression: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleProgressCourse {
    pub content: Option<String>,
    pub ext_ref: Option<Vec<SimpleExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSurgery {
    pub surgery_item: Option<Vec<SimpleSurgeryItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSurgeryItem {
    pub context: Option<SimpleSurgeryContext>,
    pub surgical_diagnosis: Option<Vec<SimpleDiagnosis>>,
    pub surgical_procedure: Option<Vec<SimpleProcedure>>,
    pub surgical_staffs: Option<Vec<SimpleStaff>>,
    pub anesthesia_procedure: Option<Vec<SimpleCodedTitle>>,
    pub anesthesiologists: Option<Vec<SimpleStaff>>,
    pub anesthesia_duration: Option<String>,
    pub operative_notes: Option<String>,
    pub reference_info: Option<SimpleExtRef>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSurgeryContext {
    /// MML0021
    #[serde(rename = "type")]
    pub surgery_type: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration: Option<String>,
    pub surgical_department_id: Option<String>,
    pub surgical_department_name: Option<String>,
    pub patient_department_id: Option<String>,
    pub patient_department_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleProcedure {
    pub operation: Option<String>,
    pub code: Option<String>,
    pub system: Option<String>,
    pub procedure_memo: Option<String>,
}

/// Title with an optional code pair, used for anesthesia procedures
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCodedTitle {
    pub title: Option<String>,
    pub code: Option<String>,
    pub system: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSummary {
    pub context: Option<SimpleSummaryContext>,
    pub simple_diagnosis: Option<SimpleDiagnosis>,
    pub death_info: Option<SimpleDeathInfo>,
    pub simple_surgery: Option<Vec<SimpleSurgery>>,
    pub chief_complaints: Option<String>,
    pub patient_profile: Option<String>,
    pub history: Option<String>,
    pub physical_exam: Option<String>,
    pub clinical_course: Option<Vec<SimpleClinicalRecord>>,
    pub discharge_findings: Option<String>,
    pub medication: Option<SimpleSummaryMedication>,
    pub test_results: Option<Vec<SimpleTestResultRecord>>,
    pub plan: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSummaryContext {
    pub start: Option<String>,
    pub end: Option<String>,
    pub out_patient: Option<Vec<SimpleOutPatient>>,
    pub in_patient: Option<Vec<SimpleInPatient>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOutPatient {
    pub date: Option<String>,
    pub out_patient_condition: Option<String>,
    pub first: Option<Scalar>,
    pub emergency: Option<Scalar>,
    pub staffs: Option<Vec<SimplePerson>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInPatient {
    pub admission: Option<SimpleAdmission>,
    pub discharge: Option<SimpleDischarge>,
    pub staffs: Option<Vec<SimplePerson>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAdmission {
    pub date: Option<String>,
    pub admission_condition: Option<String>,
    pub emergency: Option<Scalar>,
    pub refer_from: Option<SimplePerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDischarge {
    pub date: Option<String>,
    pub discharge_condition: Option<String>,
    pub outcome: Option<String>,
    pub refer_to: Option<SimplePerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDeathInfo {
    pub info: Option<String>,
    pub date: Option<String>,
    pub autopsy: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleClinicalRecord {
    pub date: Option<String>,
    pub record: Option<String>,
    pub related_doc: Option<Vec<SimpleRelatedDoc>>,
    pub ext_ref: Option<Vec<SimpleExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTestResultRecord {
    pub date: Option<String>,
    pub test_result: Option<String>,
    pub related_doc: Option<Vec<SimpleRelatedDoc>>,
    pub ext_ref: Option<Vec<SimpleExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRelatedDoc {
    pub uuid: Option<String>,
    /// MML0008
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSummaryMedication {
    pub medication: Option<String>,
    pub simple_prescription: Option<SimplePrescription>,
    pub ext_ref: Option<Vec<SimpleExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReferral {
    pub patient: Option<SimplePatient>,
    pub occupation: Option<String>,
    pub refer_from: Option<SimplePerson>,
    pub title: Option<String>,
    pub greeting: Option<String>,
    pub chief_complaints: Option<String>,
    pub clinical_diagnosis: Option<String>,
    pub past_history: Option<String>,
    pub family_history: Option<String>,
    pub present_illness: Option<String>,
    pub test_results: Option<String>,
    pub clinical_course: Option<String>,
    pub medication: Option<SimpleReferralMedication>,
    pub refer_purpose: Option<String>,
    pub remarks: Option<String>,
    pub refer_to_facility: Option<SimpleReferToFacility>,
    pub refer_to_person: Option<SimplePerson>,
    pub refer_to_unknown_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReferralMedication {
    pub medication: Option<String>,
    pub simple_prescription: Option<SimplePrescription>,
    pub simple_injection: Option<SimpleInjection>,
    pub ext_ref: Option<Vec<SimpleExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReferToFacility {
    pub facility: Option<SimpleFacilityRef>,
    pub department: Option<SimpleDepartmentRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFacilityRef {
    pub facility_id: Option<String>,
    pub facility_id_type: Option<String>,
    pub facility_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDepartmentRef {
    pub department_id: Option<String>,
    pub department_id_type: Option<String>,
    pub department_name: Option<String>,
}
