//! Report module

use crate::core::builder::required;
use crate::domain::codes::{TABLE_FACILITY_ID, TABLE_REPORT_STATUS};
use crate::domain::mml::{
    Attributes, CodedText, ConsultFrom, Perform, ReportBody, ReportInformation, ReportModule,
};
use crate::domain::simple::{
    SimpleConsultFrom, SimplePerform, SimpleReport, SimpleReportBody, SimpleReportContext,
};
use crate::domain::BuildResult;

const MODULE: &str = "ReportModule";

/// `{value, attr{<key>Code?, <key>CodeId?}}` when the value is present
fn coded(
    value: &Option<String>,
    code_key: &'static str,
    code: &Option<String>,
    id_key: &'static str,
    code_id: &Option<String>,
) -> Option<CodedText> {
    value.as_ref().map(|value| {
        CodedText::new(
            value.clone(),
            Attributes::new()
                .with_opt(code_key, code.as_ref())
                .with_opt(id_key, code_id.as_ref()),
        )
    })
}

fn facility(value: &Option<String>, code: &Option<String>) -> Option<CodedText> {
    value.as_ref().map(|value| {
        CodedText::new(
            value.clone(),
            Attributes::new()
                .with_opt("facilityCode", code.as_ref())
                .with("facilityCodeId", TABLE_FACILITY_ID),
        )
    })
}

fn build_consult_from(from: &SimpleConsultFrom) -> ConsultFrom {
    ConsultFrom {
        con_facility: facility(&from.facility, &from.facility_code),
        con_department: coded(
            &from.department,
            "departmentCode",
            &from.department_code,
            "departmentCodeId",
            &from.department_code_id,
        ),
        con_ward: coded(
            &from.ward,
            "wardCode",
            &from.ward_code,
            "wardCodeId",
            &from.ward_code_id,
        ),
        client: coded(
            &from.client,
            "clientCode",
            &from.client_code,
            "clientCodeId",
            &from.client_code_id,
        ),
    }
}

fn build_perform(perform: &SimplePerform) -> Perform {
    Perform {
        p_facility: facility(&perform.facility, &perform.facility_code),
        p_department: coded(
            &perform.department,
            "departmentCode",
            &perform.department_code,
            "departmentCodeId",
            &perform.department_code_id,
        ),
        p_ward: coded(
            &perform.ward,
            "wardCode",
            &perform.ward_code,
            "wardCodeId",
            &perform.ward_code_id,
        ),
        performer: coded(
            &perform.performer,
            "performerCode",
            &perform.performer_code,
            "performerCodeId",
            &perform.performer_code_id,
        ),
        supervisor: coded(
            &perform.supervisor,
            "supervisorCode",
            &perform.supervisor_code,
            "supervisorCodeId",
            &perform.supervisor_code_id,
        ),
    }
}

fn build_information(context: &SimpleReportContext) -> BuildResult<ReportInformation> {
    let perform_time = required(&context.perform_time, MODULE, "performTime")?;
    let report_time = required(&context.report_time, MODULE, "reportTime")?;
    let report_status = required(&context.report_status, MODULE, "reportStatus")?;
    let status_code = required(&context.status_code, MODULE, "statusCode")?;
    let test_class = required(&context.test_class, MODULE, "testClass")?;
    let test_class_code = required(&context.test_class_code, MODULE, "testClassCode")?;
    let test_class_code_id = required(&context.test_class_code_id, MODULE, "testClassCodeId")?;

    Ok(ReportInformation {
        attr: Attributes::new()
            .with("performTime", perform_time.clone())
            .with("reportTime", report_time.clone()),
        report_status: CodedText::new(
            report_status.clone(),
            Attributes::new()
                .with("statusCode", status_code.clone())
                .with("statusCodeId", TABLE_REPORT_STATUS),
        ),
        test_class: CodedText::new(
            test_class.clone(),
            Attributes::new()
                .with("testClassCode", test_class_code.clone())
                .with("testClassCodeId", test_class_code_id.clone()),
        ),
        test_subclass: coded(
            &context.test_subclass,
            "testSubclassCode",
            &context.test_subclass_code,
            "testSubclassCodeId",
            &context.test_subclass_code_id,
        ),
        organ: context.organ.clone(),
        consult_from: context.consult_from.as_ref().map(build_consult_from),
        perform: context.perform.as_ref().map(build_perform),
    })
}

fn build_body(body: &SimpleReportBody) -> BuildResult<ReportBody> {
    let test_memo = body
        .test_memo
        .as_ref()
        .map(|memos| {
            memos
                .iter()
                .map(|entry| {
                    let memo = required(&entry.memo, MODULE, "memo")?;
                    Ok(CodedText::new(
                        memo.clone(),
                        Attributes::new()
                            .with_opt("tmCodeName", entry.memo_code_name.as_ref())
                            .with_opt("tmCode", entry.memo_code.as_ref())
                            .with_opt("tmCodeId", entry.memo_code_id.as_ref()),
                    ))
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(ReportBody {
        chief_complaints: body.chief_complaints.clone(),
        test_purpose: body.test_purpose.clone(),
        test_dx: body.test_dx.clone(),
        test_notes: body.test_notes.clone().map(CodedText::plain),
        test_memo,
        test_memo_f: body.test_memo_f.clone(),
    })
}

/// Builds a report module
///
/// The report body is always present, empty when the input has none.
pub fn build_report_module(report: &SimpleReport) -> BuildResult<ReportModule> {
    let context = required(&report.context, MODULE, "context")?;

    Ok(ReportModule {
        information: build_information(context)?,
        report_body: match &report.body {
            Some(body) => build_body(body)?,
            None => ReportBody::default(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BuildError;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn sample_report() -> Value {
        json!({
            "context": {
                "performTime": "2026-10-02T10:00:00",
                "reportTime": "2026-10-02T16:00:00",
                "reportStatus": "最終報告",
                "statusCode": "final",
                "testClass": "病理診断",
                "testClassCode": "pathologyReport",
                "testClassCodeId": "MML0033"
            },
            "body": {
                "testNotes": "悪性所見なし"
            }
        })
    }

    fn build(input: Value) -> BuildResult<Value> {
        let report: SimpleReport = serde_json::from_value(input).unwrap();
        build_report_module(&report).map(|m| serde_json::to_value(m).unwrap())
    }

    #[test]
    fn test_minimal_report() {
        let value = build(sample_report()).unwrap();
        assert_eq!(
            value,
            json!({
                "information": {
                    "attr": {"performTime": "2026-10-02T10:00:00", "reportTime": "2026-10-02T16:00:00"},
                    "reportStatus": {"value": "最終報告", "attr": {"statusCode": "final", "statusCodeId": "mmlLb0001"}},
                    "testClass": {
                        "value": "病理診断",
                        "attr": {"testClassCode": "pathologyReport", "testClassCodeId": "MML0033"}
                    }
                },
                "reportBody": {"testNotes": {"value": "悪性所見なし"}}
            })
        );
    }

    #[test]
    fn test_missing_body_still_emits_report_body() {
        let mut input = sample_report();
        input.as_object_mut().unwrap().remove("body");
        assert_eq!(build(input).unwrap()["reportBody"], json!({}));
    }

    #[test]
    fn test_subclass_reads_flat_fields() {
        let mut input = sample_report();
        input["context"]["testSubclass"] = json!("生検");
        input["context"]["testSubclassCode"] = json!("biopsy");
        let value = build(input).unwrap();
        assert_eq!(
            value["information"]["testSubclass"],
            json!({"value": "生検", "attr": {"testSubclassCode": "biopsy"}})
        );
    }

    #[test]
    fn test_consult_from_and_perform() {
        let mut input = sample_report();
        input["context"]["consultFrom"] = json!({
            "facility": "横浜市立みなと赤十字病院",
            "facilityCode": "1.2.840.114319.5.1000.1.26.1",
            "ward": "5階東",
            "wardCode": "5E",
            "client": "青山 慶二",
            "clientCode": "201605"
        });
        input["context"]["perform"] = json!({
            "facility": "臨床検査センター",
            "performer": "病理 花子",
            "performerCode": "P01",
            "performerCodeId": "local"
        });
        let information = build(input).unwrap()["information"].clone();

        assert_eq!(
            information["consultFrom"],
            json!({
                "conFacility": {
                    "value": "横浜市立みなと赤十字病院",
                    "attr": {"facilityCode": "1.2.840.114319.5.1000.1.26.1", "facilityCodeId": "MML0027"}
                },
                "conWard": {"value": "5階東", "attr": {"wardCode": "5E"}},
                "client": {"value": "青山 慶二", "attr": {"clientCode": "201605"}}
            })
        );
        assert_eq!(
            information["perform"],
            json!({
                "pFacility": {"value": "臨床検査センター", "attr": {"facilityCodeId": "MML0027"}},
                "performer": {"value": "病理 花子", "attr": {"performerCode": "P01", "performerCodeId": "local"}}
            })
        );
    }

    #[test]
    fn test_memo_attr_only_with_codes() {
        let mut input = sample_report();
        input["body"]["testMemo"] = json!([
            {"memo": "再検査推奨"},
            {"memo": "至急", "memoCode": "U1", "memoCodeId": "local"}
        ]);
        input["body"]["testMemoF"] = json!("自由記載");
        let body = build(input).unwrap()["reportBody"].clone();

        assert_eq!(
            body["testMemo"],
            json!([
                {"value": "再検査推奨"},
                {"value": "至急", "attr": {"tmCode": "U1", "tmCodeId": "local"}}
            ])
        );
        assert_eq!(body["testMemoF"], "自由記載");
    }

    #[test_case("performTime")]
    #[test_case("statusCode")]
    #[test_case("testClassCodeId")]
    fn test_required_context_fields(field: &'static str) {
        let mut input = sample_report();
        input["context"].as_object_mut().unwrap().remove(field);
        assert_eq!(
            build(input).unwrap_err(),
            BuildError::missing("ReportModule", field)
        );
    }
}
