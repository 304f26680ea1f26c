//! Observation modules: laboratory tests, reports, vital signs, flow sheets

use super::common::{Attributes, CodedText, Measure};
use crate::domain::scalar::Scalar;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestInformation {
    pub attr: Attributes,
    pub report_status: CodedText,
    pub facility: CodedText,
    pub laboratory_center: CodedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub specimen_name: CodedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabItem {
    pub item_name: CodedText,
    pub value: Scalar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_value: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_memo: Option<Vec<CodedText>>,
}

/// Results for one specimen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaboTest {
    pub specimen: Specimen,
    pub item: Vec<LabItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestModule {
    pub information: TestInformation,
    pub labo_test: Vec<LaboTest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub con_facility: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub con_department: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub con_ward: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<CodedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Perform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_facility: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_department: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_ward: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<CodedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInformation {
    pub attr: Attributes,
    pub report_status: CodedText,
    pub test_class: CodedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_subclass: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organ: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consult_from: Option<ConsultFrom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform: Option<Perform>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_complaints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_dx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_notes: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_memo: Option<Vec<CodedText>>,
    #[serde(rename = "testMemoF", skip_serializing_if = "Option::is_none")]
    pub test_memo_f: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModule {
    pub information: ReportInformation,
    pub report_body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignItem {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_value: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_memo: Option<Vec<String>>,
}

/// Observation place and observer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<CodedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observer: Option<CodedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignProtocol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prot_memo: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignModule {
    pub item: Vec<VitalSignItem>,
    pub observed_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ObservationContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<VitalSignProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub intake_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_volume: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_pathway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoFrequency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bof_times: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bof_period_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bof_period_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bof_memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodilyOutput {
    pub bo_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_volume: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_pathway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_frequency: Option<Vec<BoFrequency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bo_memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSheetModule {
    pub context: ObservationContext,
    #[serde(rename = "VitalSignModule", skip_serializing_if = "Option::is_none")]
    pub vital_sign: Option<Vec<VitalSignModule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake: Option<Vec<Intake>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bodily_output: Option<Vec<BodilyOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_memo: Option<String>,
}
