//! Laboratory test module
//!
//! Flat result rows are grouped into specimens by contiguous runs of the same
//! specimen code. A code that reappears after a different one opens a new
//! group.

use crate::core::builder::person::build_creator_info;
use crate::core::builder::required;
use crate::domain::codes::TABLE_REPORT_STATUS;
use crate::domain::mml::{
    Attributes, CodedText, CreatorInfo, LabItem, LaboTest, Measure, Specimen, TestInformation,
    TestModule,
};
use crate::domain::simple::{SimpleLabResult, SimpleTest, SimpleTestContext};
use crate::domain::BuildResult;

const MODULE: &str = "TestModule";

fn build_information(context: &SimpleTestContext) -> BuildResult<TestInformation> {
    let laboratory = required(&context.laboratory, MODULE, "laboratory")?;

    Ok(TestInformation {
        attr: Attributes::new()
            .with_opt("registId", context.issued_id.as_ref())
            .with_opt("sampleTime", context.sample_time.as_ref())
            .with("registTime", required(&context.issued_time, MODULE, "issuedTime")?.clone())
            .with("reportTime", required(&context.result_issued, MODULE, "resultIssued")?.clone()),
        report_status: CodedText::new(
            required(&context.result_status, MODULE, "resultStatus")?.clone(),
            Attributes::new()
                .with(
                    "statusCode",
                    required(&context.result_status_code, MODULE, "resultStatusCode")?.clone(),
                )
                .with("statusCodeId", TABLE_REPORT_STATUS),
        ),
        facility: CodedText::new(
            required(&context.facility_name, MODULE, "facilityName")?.clone(),
            Attributes::new()
                .with("facilityCode", required(&context.facility_id, MODULE, "facilityId")?.clone())
                .with(
                    "facilityCodeId",
                    required(&context.facility_id_type, MODULE, "facilityIdType")?.clone(),
                ),
        ),
        laboratory_center: CodedText::new(
            required(&laboratory.facility_name, MODULE, "facilityName")?.clone(),
            Attributes::new()
                .with("centerCode", required(&laboratory.facility_id, MODULE, "facilityId")?.clone())
                .with(
                    "centerCodeId",
                    required(&laboratory.facility_id_type, MODULE, "facilityIdType")?.clone(),
                ),
        ),
    })
}

fn build_item(row: &SimpleLabResult, code_system: &str) -> BuildResult<LabItem> {
    let name = required(&row.name, MODULE, "name")?;
    let code = required(&row.code, MODULE, "code")?;
    let value = required(&row.value, MODULE, "value")?;

    // Numeric value and unit only travel together
    let (num_value, unit) = match &row.unit {
        Some(unit) => (
            Some(Measure {
                value: value.clone(),
                attr: Attributes::new()
                    .with_opt("low", row.lower_limit.as_ref())
                    .with_opt("up", row.upper_limit.as_ref())
                    .with_opt("out", row.out.as_ref()),
            }),
            Some(CodedText::plain(unit.clone())),
        ),
        None => (None, None),
    };

    let item_memo = match (&row.memo_code, &row.memo) {
        (Some(memo_code), Some(memo)) => Some(vec![CodedText::new(
            memo.clone(),
            Attributes::new()
                .with("imCodeName", code_system)
                .with("imCode", memo_code.clone())
                .with("imCodeId", code_system),
        )]),
        _ => None,
    };

    Ok(LabItem {
        item_name: CodedText::new(
            name.clone(),
            Attributes::new()
                .with("itCode", code.clone())
                .with("itCodeId", code_system),
        ),
        value: value.clone(),
        num_value,
        unit,
        item_memo,
    })
}

/// Builds the test module and the laboratory's creator info
///
/// The laboratory, not the composition author, is recorded as creator of the
/// resulting document entry.
pub fn build_test_module(test: &SimpleTest) -> BuildResult<(TestModule, CreatorInfo)> {
    let context = required(&test.context, MODULE, "context")?;
    let rows = required(&test.test_result, MODULE, "testResult")?;
    let code_system = required(&context.code_system, MODULE, "codeSystem")?;

    let information = build_information(context)?;
    let laboratory = build_creator_info(required(&context.laboratory, MODULE, "laboratory")?)?;

    let mut labo_test: Vec<LaboTest> = Vec::new();
    let mut current_code: Option<&str> = None;

    for row in rows {
        let spc_code = required(&row.spc_code, MODULE, "spcCode")?;
        let spc_name = required(&row.spc_name, MODULE, "spcName")?;
        let item = build_item(row, code_system)?;

        if current_code == Some(spc_code.as_str()) {
            if let Some(group) = labo_test.last_mut() {
                group.item.push(item);
                continue;
            }
        }

        labo_test.push(LaboTest {
            specimen: Specimen {
                specimen_name: CodedText::new(
                    spc_name.clone(),
                    Attributes::new()
                        .with("spCode", spc_code.clone())
                        .with("spCodeId", code_system.clone()),
                ),
            },
            item: vec![item],
        });
        current_code = Some(spc_code);
    }

    Ok((
        TestModule {
            information,
            labo_test,
        },
        laboratory,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BuildError;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn row(spc_code: &str, code: &str) -> Value {
        json!({
            "spcCode": spc_code,
            "spcName": format!("検体{spc_code}"),
            "code": code,
            "name": format!("項目{code}"),
            "value": "12.5"
        })
    }

    fn sample_test(rows: Vec<Value>) -> Value {
        json!({
            "context": {
                "issuedId": "12345",
                "issuedTime": "2026-10-01T09:00:00",
                "resultIssued": "2026-10-01T15:00:00",
                "resultStatus": "最終報告",
                "resultStatusCode": "final",
                "codeSystem": "YML",
                "facilityName": "横浜市立みなと赤十字病院",
                "facilityId": "1.2.840.114319.5.1000.1.26.1",
                "facilityIdType": "OID",
                "laboratory": lab_person()
            },
            "testResult": rows
        })
    }

    fn lab_person() -> Value {
        json!({
            "id": "LAB01",
            "idType": "facility",
            "kanjiName": "検査 太郎",
            "facilityId": "LAB",
            "facilityIdType": "JMARI",
            "facilityName": "臨床検査センター",
            "license": "lab"
        })
    }

    fn build(input: Value) -> BuildResult<(TestModule, CreatorInfo)> {
        let test: SimpleTest = serde_json::from_value(input).unwrap();
        build_test_module(&test)
    }

    #[test]
    fn test_information_block() {
        let (module, laboratory) = build(sample_test(vec![row("023", "A1")])).unwrap();
        let value = serde_json::to_value(&module.information).unwrap();

        assert_eq!(
            value["attr"],
            json!({
                "registId": "12345",
                "registTime": "2026-10-01T09:00:00",
                "reportTime": "2026-10-01T15:00:00"
            })
        );
        assert_eq!(
            value["reportStatus"],
            json!({"value": "最終報告", "attr": {"statusCode": "final", "statusCodeId": "mmlLb0001"}})
        );
        assert_eq!(
            value["laboratoryCenter"],
            json!({"value": "臨床検査センター", "attr": {"centerCode": "LAB", "centerCodeId": "JMARI"}})
        );
        assert_eq!(
            serde_json::to_value(&laboratory).unwrap()["creatorLicense"][0]["value"],
            "lab"
        );
    }

    #[test_case(&["A", "A", "B", "A"], 3 ; "non contiguous repeat opens a new group")]
    #[test_case(&["A", "A", "A"], 1 ; "single run")]
    #[test_case(&["A", "B", "C"], 3 ; "all distinct")]
    fn test_specimen_grouping(codes: &[&str], groups: usize) {
        let rows = codes
            .iter()
            .enumerate()
            .map(|(i, code)| row(code, &i.to_string()))
            .collect();
        let (module, _) = build(sample_test(rows)).unwrap();

        assert_eq!(module.labo_test.len(), groups);
        let items: usize = module.labo_test.iter().map(|g| g.item.len()).sum();
        assert_eq!(items, codes.len());
    }

    #[test]
    fn test_group_preserves_specimen_and_order() {
        let rows = vec![row("A", "1"), row("A", "2"), row("B", "3"), row("A", "4")];
        let (module, _) = build(sample_test(rows)).unwrap();
        let value = serde_json::to_value(&module).unwrap();

        assert_eq!(
            value["laboTest"][0]["specimen"]["specimenName"],
            json!({"value": "検体A", "attr": {"spCode": "A", "spCodeId": "YML"}})
        );
        assert_eq!(value["laboTest"][0]["item"][1]["itemName"]["attr"]["itCode"], "2");
        assert_eq!(value["laboTest"][2]["specimen"]["specimenName"]["attr"]["spCode"], "A");
        assert_eq!(value["laboTest"][2]["item"][0]["itemName"]["value"], "項目4");
    }

    #[test]
    fn test_item_without_unit_has_no_numeric_value() {
        let mut plain = row("A", "1");
        plain["lowerLimit"] = json!("3.5");
        let (module, _) = build(sample_test(vec![plain])).unwrap();
        let item = serde_json::to_value(&module.labo_test[0].item[0]).unwrap();

        assert_eq!(
            item,
            json!({
                "itemName": {"value": "項目1", "attr": {"itCode": "1", "itCodeId": "YML"}},
                "value": "12.5"
            })
        );
    }

    #[test]
    fn test_item_with_unit_and_limits() {
        let mut measured = row("A", "1");
        measured["unit"] = json!("mg/dL");
        measured["lowerLimit"] = json!("3.5");
        measured["upperLimit"] = json!(8);
        measured["out"] = json!("H");
        let (module, _) = build(sample_test(vec![measured])).unwrap();
        let item = serde_json::to_value(&module.labo_test[0].item[0]).unwrap();

        assert_eq!(
            item["numValue"],
            json!({"value": "12.5", "attr": {"low": "3.5", "up": 8, "out": "H"}})
        );
        assert_eq!(item["unit"], json!({"value": "mg/dL"}));
    }

    #[test]
    fn test_item_with_unit_only_has_bare_numeric_value() {
        let mut measured = row("A", "1");
        measured["unit"] = json!("%");
        let (module, _) = build(sample_test(vec![measured])).unwrap();
        let item = serde_json::to_value(&module.labo_test[0].item[0]).unwrap();
        assert_eq!(item["numValue"], json!({"value": "12.5"}));
    }

    #[test_case(Some("M01"), Some("溶血"), true)]
    #[test_case(None, Some("溶血"), false)]
    #[test_case(Some("M01"), None, false)]
    fn test_item_memo_needs_code_and_text(code: Option<&str>, memo: Option<&str>, present: bool) {
        let mut input = row("A", "1");
        if let Some(code) = code {
            input["memoCode"] = json!(code);
        }
        if let Some(memo) = memo {
            input["memo"] = json!(memo);
        }
        let (module, _) = build(sample_test(vec![input])).unwrap();
        let item = serde_json::to_value(&module.labo_test[0].item[0]).unwrap();

        if present {
            assert_eq!(
                item["itemMemo"],
                json!([{"value": "溶血", "attr": {"imCodeName": "YML", "imCode": "M01", "imCodeId": "YML"}}])
            );
        } else {
            assert!(item.get("itemMemo").is_none());
        }
    }

    #[test]
    fn test_missing_laboratory() {
        let mut input = sample_test(vec![row("A", "1")]);
        input["context"].as_object_mut().unwrap().remove("laboratory");
        assert_eq!(
            build(input).unwrap_err(),
            BuildError::missing("TestModule", "laboratory")
        );
    }

    #[test]
    fn test_row_requires_value() {
        let mut bad = row("A", "1");
        bad.as_object_mut().unwrap().remove("value");
        assert_eq!(
            build(sample_test(vec![bad])).unwrap_err(),
            BuildError::missing("TestModule", "value")
        );
    }
}
