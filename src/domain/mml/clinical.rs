//! Clinical modules: patient, insurance, diagnosis, history, surgery, summary, referral

use super::common::{
    Address, Attributes, CodedText, CreatorInfo, Department, ExtRef, Facility, Measure,
    PersonName, PersonalizedInfo, Phone,
};
use super::document::MasterId;
use super::medication::{InjectionModule, PrescriptionModule};
use crate::domain::scalar::Scalar;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueInfo {
    pub master_id: MasterId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientModule {
    pub unique_info: UniqueInfo,
    pub person_name: Vec<PersonName>,
    pub birthday: String,
    /// MML0010
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<Phone>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAttr {
    pub country_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientId {
    pub group: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsuranceModule {
    pub attr: CountryAttr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_class: Option<CodedText>,
    pub insurance_number: String,
    pub client_id: ClientId,
    pub family_class: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continued_diseases: Option<Vec<String>>,
    pub start_date: String,
    pub expired_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_in_ratio: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_out_ratio: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_insurance: Option<Vec<PublicInsuranceItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicInsuranceItem {
    pub attr: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    pub provider: String,
    pub recipient: String,
    pub start_date: String,
    pub expired_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ratio: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredDiagnosisModule {
    pub diagnosis: CodedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CodedText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleModule {
    pub occupation: String,
    pub tobacco: String,
    pub alcohol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseClinicModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy: Option<Vec<AllergyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloodtype: Option<Bloodtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infection: Option<Vec<InfectionItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyItem {
    pub factor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bloodtype {
    pub abo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others: Option<Vec<OtherBloodtype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherBloodtype {
    pub type_name: String,
    pub type_judgement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfectionItem {
    pub factor: String,
    pub exam_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstClinicModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<Vec<FamilyHistoryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub childhood: Option<Childhood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_history: Option<PastHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_complaints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_illness_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyHistoryItem {
    pub relation: String,
    #[serde(rename = "RegisteredDiagnosisModule")]
    pub diagnosis: RegisteredDiagnosisModule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Childhood {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_info: Option<BirthInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination: Option<Vec<VaccinationItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    #[serde(rename = "Facility", skip_serializing_if = "Option::is_none")]
    pub facility: Option<Facility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_weeks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_height: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_circumference: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaccinationItem {
    pub vaccine: String,
    pub injected: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Past history is either free text or a list of timed events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PastHistory {
    FreeNotes(String),
    PastHistoryItem(Vec<PastHistoryItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastHistoryItem {
    pub time_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_expression: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeExpression {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_ref: Option<Vec<ExtRef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCourseModule {
    pub free_expression: FreeExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeryModule {
    pub surgery_item: Vec<SurgeryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgicalInfo {
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attr: Attributes,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surgical_department: Option<Vec<Department>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_department: Option<Vec<Department>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureItem {
    pub operation: CodedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attr: Attributes,
    pub staff_info: Vec<PersonalizedInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeryItem {
    pub surgical_info: SurgicalInfo,
    pub surgical_diagnosis: Vec<RegisteredDiagnosisModule>,
    pub surgical_procedure: Vec<ProcedureItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surgical_staffs: Option<Vec<Staff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anesthesia_procedure: Option<Vec<CodedText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anesthesiologists: Option<Vec<Staff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anesthesia_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operative_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_info: Option<ExtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutPatientItem {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_patient_condition: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staffs: Option<Vec<CreatorInfo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_condition: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_from: Option<PersonalizedInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discharge {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_condition: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_to: Option<PersonalizedInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InPatientItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission: Option<Admission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge: Option<Discharge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staffs: Option<Vec<CreatorInfo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHistory {
    pub attr: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_patient: Option<Vec<OutPatientItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_patient: Option<Vec<InPatientItem>>,
}

/// Dated narrative with links to related documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalRecord {
    pub attr: Attributes,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_doc: Option<Vec<CodedText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_ref: Option<Vec<ExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMedication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "PrescriptionModule", skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Vec<PrescriptionModule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_ref: Option<Vec<ExtRef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryModule {
    pub service_history: ServiceHistory,
    #[serde(rename = "RegisteredDiagnosisModule", skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<RegisteredDiagnosisModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_info: Option<CodedText>,
    #[serde(rename = "SurgeryModule", skip_serializing_if = "Option::is_none")]
    pub surgery: Option<Vec<SurgeryModule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_complaints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_exam: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_course: Option<Vec<ClinicalRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_findings: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication: Option<SummaryMedication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results: Option<Vec<ClinicalRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralMedication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "PrescriptionModule", skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Vec<PrescriptionModule>>,
    #[serde(rename = "InjectionModule", skip_serializing_if = "Option::is_none")]
    pub injection: Option<InjectionModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_ref: Option<Vec<ExtRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferToFacility {
    #[serde(rename = "Facility", skip_serializing_if = "Option::is_none")]
    pub facility: Option<Facility>,
    #[serde(rename = "Department", skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralModule {
    #[serde(rename = "PatientModule")]
    pub patient: PatientModule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    pub refer_from: PersonalizedInfo,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    pub chief_complaints: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_history: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_illness: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication: Option<ReferralMedication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_to_facility: Option<ReferToFacility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_to_person: Option<PersonalizedInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refer_to_unknown_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_past_history_serializes_as_single_key() {
        let notes = PastHistory::FreeNotes("特記事項なし".to_string());
        assert_eq!(
            serde_json::to_value(&notes).unwrap(),
            json!({"freeNotes": "特記事項なし"})
        );

        let items = PastHistory::PastHistoryItem(vec![PastHistoryItem {
            time_expression: "2014".to_string(),
            event_expression: None,
        }]);
        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!({"pastHistoryItem": [{"timeExpression": "2014"}]})
        );
    }
}
