//! Observation inputs: laboratory tests, reports, vital signs, flow sheets

use super::SimplePerson;
use crate::domain::scalar::Scalar;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTest {
    pub context: Option<SimpleTestContext>,
    pub test_result: Option<Vec<SimpleLabResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTestContext {
    pub issued_id: Option<String>,
    pub sample_time: Option<String>,
    pub issued_time: Option<String>,
    pub result_issued: Option<String>,
    pub result_status: Option<String>,
    /// `mid` or `final`
    pub result_status_code: Option<String>,
    /// Code system of specimens, items and item memos
    pub code_system: Option<String>,
    pub facility_name: Option<String>,
    pub facility_id: Option<String>,
    pub facility_id_type: Option<String>,
    /// Representative of the laboratory; becomes the module creator
    pub laboratory: Option<SimplePerson>,
}

/// One flat lab result row
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLabResult {
    pub spc_code: Option<String>,
    pub spc_name: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub value: Option<Scalar>,
    pub unit: Option<String>,
    pub lower_limit: Option<Scalar>,
    pub upper_limit: Option<Scalar>,
    pub out: Option<String>,
    pub memo_code: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReport {
    pub context: Option<SimpleReportContext>,
    pub body: Option<SimpleReportBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReportContext {
    pub perform_time: Option<String>,
    pub report_time: Option<String>,
    pub report_status: Option<String>,
    pub status_code: Option<String>,
    pub test_class: Option<String>,
    /// MML0033
    pub test_class_code: Option<String>,
    pub test_class_code_id: Option<String>,
    pub test_subclass: Option<String>,
    pub test_subclass_code: Option<String>,
    pub test_subclass_code_id: Option<String>,
    pub organ: Option<String>,
    pub consult_from: Option<SimpleConsultFrom>,
    pub perform: Option<SimplePerform>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleConsultFrom {
    pub facility: Option<String>,
    pub facility_code: Option<String>,
    pub department: Option<String>,
    pub department_code: Option<String>,
    pub department_code_id: Option<String>,
    pub ward: Option<String>,
    pub ward_code: Option<String>,
    pub ward_code_id: Option<String>,
    pub client: Option<String>,
    pub client_code: Option<String>,
    pub client_code_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePerform {
    pub facility: Option<String>,
    pub facility_code: Option<String>,
    pub department: Option<String>,
    pub department_code: Option<String>,
    pub department_code_id: Option<String>,
    pub ward: Option<String>,
    pub ward_code: Option<String>,
    pub ward_code_id: Option<String>,
    pub performer: Option<String>,
    pub performer_code: Option<String>,
    pub performer_code_id: Option<String>,
    pub supervisor: Option<String>,
    pub supervisor_code: Option<String>,
    pub supervisor_code_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReportBody {
    pub chief_complaints: Option<String>,
    pub test_purpose: Option<String>,
    pub test_dx: Option<String>,
    pub test_notes: Option<String>,
    pub test_memo: Option<Vec<SimpleTestMemo>>,
    #[serde(rename = "testMemoF")]
    pub test_memo_f: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTestMemo {
    pub memo: Option<String>,
    pub memo_code_name: Option<String>,
    pub memo_code: Option<String>,
    pub memo_code_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVitalSign {
    pub item: Option<Vec<SimpleVitalSignItem>>,
    pub observed_time: Option<String>,
    pub context: Option<SimpleObservationContext>,
    pub protocol: Option<SimpleVitalSignProtocol>,
    pub vs_memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVitalSignItem {
    /// mmlVs01
    pub item_name: Option<String>,
    pub value: Option<Scalar>,
    pub num_value: Option<Scalar>,
    /// mmlVs02
    pub unit: Option<String>,
    pub item_memo: Option<Vec<String>>,
}

/// Where and by whom an observation was made
///
/// Shared by vital signs and flow sheets. Vital signs ignore `depCodeId` and
/// always write the medical department table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleObservationContext {
    pub facility: Option<String>,
    pub facility_code: Option<String>,
    pub facility_code_id: Option<String>,
    pub department: Option<String>,
    pub dep_code: Option<String>,
    pub dep_code_id: Option<String>,
    pub ward: Option<String>,
    pub ward_code: Option<String>,
    pub ward_code_id: Option<String>,
    pub observer: Option<String>,
    pub obs_code: Option<String>,
    pub obs_code_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVitalSignProtocol {
    pub procedure: Option<String>,
    /// mmlVs03
    pub position: Option<String>,
    pub device: Option<String>,
    pub body_location: Option<String>,
    pub prot_memo: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFlowSheet {
    pub context: Option<SimpleObservationContext>,
    pub vital_sign: Option<Vec<SimpleVitalSign>>,
    pub intake: Option<Vec<SimpleIntake>>,
    pub bodily_output: Option<Vec<SimpleBodilyOutput>>,
    pub fs_memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleIntake {
    pub intake_type: Option<String>,
    pub intake_volume: Option<Scalar>,
    pub intake_unit: Option<String>,
    pub intake_pathway: Option<String>,
    pub intake_start_time: Option<String>,
    pub intake_end_time: Option<String>,
    pub intake_memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBodilyOutput {
    pub bo_type: Option<String>,
    pub bo_volume: Option<Scalar>,
    pub bo_unit: Option<String>,
    pub bo_status: Option<String>,
    pub bo_color: Option<String>,
    pub bo_pathway: Option<String>,
    pub bo_start_time: Option<String>,
    pub bo_end_time: Option<String>,
    pub bo_frequency: Option<Vec<SimpleBoFrequency>>,
    pub bo_memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBoFrequency {
    pub bof_times: Option<Scalar>,
    pub bof_period_start_time: Option<String>,
    pub bof_period_end_time: Option<String>,
    pub bof_memo: Option<String>,
}
