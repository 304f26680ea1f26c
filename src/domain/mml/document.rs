//! Document envelope and the assembled MML tree

use super::clinical::*;
use super::common::{AccessRight, CreatorInfo, ExtRef, Identifier};
use super::medication::{InjectionModule, PrescriptionModule};
use super::observation::{FlowSheetModule, ReportModule, TestModule, VitalSignModule};
use crate::domain::errors::ItemIssue;
use crate::domain::ids::DocumentUid;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfoAttr {
    /// MML0005
    pub content_module_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAttr {
    /// MML0007
    pub generation_purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocTitle {
    pub value: String,
    pub attr: TitleAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationAttr {
    /// MML0008
    pub relation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentId {
    pub value: String,
    pub attr: RelationAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupClassAttr {
    pub group_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupId {
    pub value: String,
    pub attr: GroupClassAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocId {
    pub uid: DocumentUid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Vec<ParentId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Vec<GroupId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDateAttr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_confirm_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmDate {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr: Option<ConfirmDateAttr>,
}

/// Per-module envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfo {
    pub attr: DocInfoAttr,
    pub security_level: Vec<AccessRight>,
    pub title: DocTitle,
    pub doc_id: DocId,
    pub confirm_date: ConfirmDate,
    #[serde(rename = "CreatorInfo")]
    pub creator_info: CreatorInfo,
    pub ext_refs: Vec<ExtRef>,
}

/// Content of one module item, one variant per clinical module
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleContent {
    Patient(Box<PatientModule>),
    HealthInsurance(HealthInsuranceModule),
    RegisteredDiagnosis(RegisteredDiagnosisModule),
    Lifestyle(LifestyleModule),
    BaseClinic(BaseClinicModule),
    FirstClinic(FirstClinicModule),
    ProgressCourse(ProgressCourseModule),
    Surgery(SurgeryModule),
    Summary(Box<SummaryModule>),
    Test(TestModule),
    Report(Box<ReportModule>),
    Referral(Box<ReferralModule>),
    VitalSign(VitalSignModule),
    FlowSheet(FlowSheetModule),
    Prescription(PrescriptionModule),
    Injection(InjectionModule),
}

/// One slot of the document body
///
/// A content item that could not be built keeps its position as a
/// `Rejected` slot carrying the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleItem {
    Module {
        #[serde(rename = "docInfo")]
        doc_info: Box<DocInfo>,
        content: ModuleContent,
    },
    Rejected {
        error: ItemIssue,
    },
}

impl ModuleItem {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn doc_info(&self) -> Option<&DocInfo> {
        match self {
            Self::Module { doc_info, .. } => Some(doc_info),
            Self::Rejected { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&ModuleContent> {
        match self {
            Self::Module { content, .. } => Some(content),
            Self::Rejected { .. } => None,
        }
    }

    pub fn issue(&self) -> Option<&ItemIssue> {
        match self {
            Self::Rejected { error } => Some(error),
            Self::Module { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDateAttr {
    pub create_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasterId {
    #[serde(rename = "Id")]
    pub id: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MmlHeader {
    #[serde(rename = "CreatorInfo")]
    pub creator_info: CreatorInfo,
    pub master_id: MasterId,
    pub toc: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MmlBody {
    #[serde(rename = "MmlModuleItem")]
    pub items: Vec<ModuleItem>,
}

/// The assembled document handed to a formatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub attr: CreateDateAttr,
    #[serde(rename = "MmlHeader")]
    pub header: MmlHeader,
    #[serde(rename = "MmlBody")]
    pub body: MmlBody,
}
