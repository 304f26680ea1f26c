//! Prescription and injection modules

use crate::core::builder::required;
use crate::domain::codes::{ISSUED_TO_EXTERNAL, ISSUED_TO_INTERNAL};
use crate::domain::mml::{
    Attributes, CodedText, InjectedMedication, InjectionModule, Medicine, PrescribedMedication,
    PrescriptionModule,
};
use crate::domain::simple::{
    SimpleInjectedMedication, SimpleInjection, SimpleMedication, SimplePrescription,
};
use crate::domain::{BuildError, BuildResult};

const PRESCRIPTION: &str = "PrescriptionModule";
const INJECTION: &str = "InjectionModule";

/// Bucket a line is routed to: 0 external, 1 internal, 2 unspecified
fn bucket_index(issued_to: Option<&str>) -> usize {
    match issued_to {
        Some(ISSUED_TO_EXTERNAL) => 0,
        Some(ISSUED_TO_INTERNAL) => 1,
        _ => 2,
    }
}

fn build_prescribed(line: &SimpleMedication) -> BuildResult<PrescribedMedication> {
    let name = required(&line.medicine, PRESCRIPTION, "medicine")?;
    let code = required(&line.medicine_code, PRESCRIPTION, "medicineCode")?;
    let system = line
        .code_system()
        .ok_or(BuildError::missing(PRESCRIPTION, "medicineCodeSystem"))?;
    let dose = required(&line.dose, PRESCRIPTION, "dose")?;
    let dose_unit = required(&line.dose_unit, PRESCRIPTION, "doseUnit")?;

    Ok(PrescribedMedication {
        medicine: Medicine {
            name: name.clone(),
            code: vec![CodedText::new(
                code.clone(),
                Attributes::new().with("system", system.clone()),
            )],
        },
        dose: dose.clone(),
        dose_unit: dose_unit.clone(),
        frequency_per_day: line.frequency_per_day.clone(),
        start_date: line.start_date.clone(),
        duration: line.duration.clone(),
        instruction: line.instruction.clone(),
        prn: line.prn,
        brand_substitution_permitted: line.brand_substitution_permitted.unwrap_or(true),
        long_term: line.long_term,
    })
}

/// Splits medication lines into external, internal and unspecified
/// prescriptions
///
/// Always returns the three buckets in that order, possibly empty. Lines keep
/// their input order inside a bucket; an `issuedTo` other than `external` or
/// `internal`, including a non-text value, is treated as unspecified.
pub fn build_prescription_module(
    prescription: &SimplePrescription,
) -> BuildResult<[PrescriptionModule; 3]> {
    let lines = required(&prescription.medication, PRESCRIPTION, "medication")?;

    let mut buckets = [
        PrescriptionModule {
            issued_to: Some(ISSUED_TO_EXTERNAL.to_string()),
            medication: Vec::new(),
        },
        PrescriptionModule {
            issued_to: Some(ISSUED_TO_INTERNAL.to_string()),
            medication: Vec::new(),
        },
        PrescriptionModule::default(),
    ];

    for line in lines {
        let medication = build_prescribed(line)?;
        buckets[bucket_index(line.issued_to())]
            .medication
            .push(medication);
    }

    Ok(buckets)
}

fn build_injected(line: &SimpleInjectedMedication) -> BuildResult<InjectedMedication> {
    let name = required(&line.medicine, INJECTION, "medicine")?;
    let code = required(&line.medicine_code, INJECTION, "medicineCode")?;
    let dose = required(&line.dose, INJECTION, "dose")?;

    Ok(InjectedMedication {
        medicine: Medicine {
            name: name.clone(),
            code: vec![CodedText::new(
                code.clone(),
                Attributes::new().with_opt("system", line.code_system()),
            )],
        },
        dose: dose.clone(),
        dose_unit: line.dose_unit.clone(),
        start_date_time: line.start_date_time.clone(),
        end_date_time: line.end_date_time.clone(),
        instruction: line.instruction.clone(),
        route: line.route.clone(),
        site: line.site.clone(),
        delivery_method: line.delivery_method.clone(),
        batch_no: line.batch_no.clone(),
        additional_instruction: line.additional_instruction.clone(),
    })
}

pub fn build_injection_module(injection: &SimpleInjection) -> BuildResult<InjectionModule> {
    let lines = required(&injection.medication, INJECTION, "medication")?;

    Ok(InjectionModule {
        medication: lines.iter().map(build_injected).collect::<BuildResult<_>>()?,
        narcotic_prescription_license_number: injection
            .narcotic_prescription_license_number
            .clone(),
        comment: injection.comment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn line(issued_to: Option<&str>, code: &str) -> Value {
        let mut line = json!({
            "medicine": "ムコスタ錠100",
            "medicineCode": code,
            "medicineCodeSystem": "YJ",
            "dose": 1,
            "doseUnit": "錠"
        });
        if let Some(to) = issued_to {
            line["issuedTo"] = json!(to);
        }
        line
    }

    fn prescription(lines: Vec<Value>) -> SimplePrescription {
        serde_json::from_value(json!({ "medication": lines })).unwrap()
    }

    #[test]
    fn test_single_external_line_defaults_brand_substitution() {
        let input: SimplePrescription = serde_json::from_value(json!({"medication": [{
            "issuedTo": "external",
            "medicine": "X",
            "medicineCode": "1",
            "medicineCodeSystem": "YJ",
            "dose": 1,
            "doseUnit": "g"
        }]}))
        .unwrap();
        let buckets = build_prescription_module(&input).unwrap();

        assert_eq!(buckets[0].medication.len(), 1);
        assert!(buckets[0].medication[0].brand_substitution_permitted);
        assert!(buckets[1].is_empty());
        assert!(buckets[2].is_empty());

        let value = serde_json::to_value(&buckets[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "issuedTo": "external",
                "medication": [{
                    "medicine": {"name": "X", "code": [{"value": "1", "attr": {"system": "YJ"}}]},
                    "dose": 1,
                    "doseUnit": "g",
                    "brandSubstitutionPermitted": true
                }]
            })
        );
    }

    #[test_case(Some("external"), 0)]
    #[test_case(Some("internal"), 1)]
    #[test_case(None, 2)]
    #[test_case(Some("ward"), 2 ; "unknown issuedTo is unspecified")]
    fn test_issued_to_routing(issued_to: Option<&str>, expected: usize) {
        let buckets = build_prescription_module(&prescription(vec![line(issued_to, "1")])).unwrap();
        for (index, bucket) in buckets.iter().enumerate() {
            let count = if index == expected { 1 } else { 0 };
            assert_eq!(bucket.medication.len(), count, "bucket {index}");
        }
    }

    #[test]
    fn test_numeric_issued_to_is_unspecified() {
        let mut numeric = line(None, "1");
        numeric["issuedTo"] = json!(1);
        let buckets = build_prescription_module(&prescription(vec![numeric])).unwrap();

        assert!(buckets[0].medication.is_empty());
        assert!(buckets[1].medication.is_empty());
        assert_eq!(buckets[2].medication.len(), 1);
    }

    #[test]
    fn test_both_code_system_spellings_build_one_code() {
        let mut both = line(None, "1");
        both["medicineCodeystem"] = json!("HOT");
        let buckets = build_prescription_module(&prescription(vec![both])).unwrap();
        let value = serde_json::to_value(&buckets[2].medication[0].medicine.code[0]).unwrap();

        assert_eq!(value, json!({"value": "1", "attr": {"system": "YJ"}}));
    }

    #[test]
    fn test_every_line_lands_in_exactly_one_bucket() {
        let lines = vec![
            line(Some("internal"), "1"),
            line(None, "2"),
            line(Some("external"), "3"),
            line(Some("internal"), "4"),
        ];
        let buckets = build_prescription_module(&prescription(lines)).unwrap();

        assert_eq!(buckets.len(), 3);
        let total: usize = buckets.iter().map(|b| b.medication.len()).sum();
        assert_eq!(total, 4);
        let internal: Vec<&str> = buckets[1]
            .medication
            .iter()
            .map(|m| m.medicine.code[0].value.as_str())
            .collect();
        assert_eq!(internal, vec!["1", "4"]);
        assert!(buckets[2].issued_to.is_none());
    }

    #[test]
    fn test_optional_line_fields_pass_through() {
        let mut full = line(None, "1");
        full["frequencyPerDay"] = json!(2);
        full["duration"] = json!("14");
        full["PRN"] = json!(false);
        full["brandSubstitutionPermitted"] = json!(false);
        full["longTerm"] = json!(true);
        let buckets = build_prescription_module(&prescription(vec![full])).unwrap();
        let value = serde_json::to_value(&buckets[2].medication[0]).unwrap();

        assert_eq!(value["frequencyPerDay"], json!(2));
        assert_eq!(value["duration"], json!("14"));
        assert_eq!(value["PRN"], json!(false));
        assert_eq!(value["brandSubstitutionPermitted"], json!(false));
        assert_eq!(value["longTerm"], json!(true));
        assert!(value.get("startDate").is_none());
        assert!(value.get("instruction").is_none());
    }

    #[test]
    fn test_prescription_line_requires_dose_unit() {
        let mut bad = line(None, "1");
        bad.as_object_mut().unwrap().remove("doseUnit");
        assert_eq!(
            build_prescription_module(&prescription(vec![bad])).unwrap_err(),
            BuildError::missing("PrescriptionModule", "doseUnit")
        );
    }

    #[test]
    fn test_build_injection_module() {
        let injection: SimpleInjection = serde_json::from_value(json!({
            "medication": [{
                "medicine": "生理食塩水",
                "medicineCode": "3311401A2",
                "medicineCodeystem": "YJ",
                "dose": 500,
                "doseUnit": "mL",
                "route": "点滴静注"
            }, {
                "medicine": "アトロピン",
                "medicineCode": "1242401A1",
                "dose": "0.5"
            }],
            "comment": "緩徐に"
        }))
        .unwrap();
        let value = serde_json::to_value(build_injection_module(&injection).unwrap()).unwrap();

        assert_eq!(
            value["medication"][0]["medicine"]["code"],
            json!([{"value": "3311401A2", "attr": {"system": "YJ"}}])
        );
        assert_eq!(value["medication"][0]["route"], "点滴静注");
        assert_eq!(
            value["medication"][1],
            json!({
                "medicine": {"name": "アトロピン", "code": [{"value": "1242401A1"}]},
                "dose": "0.5"
            })
        );
        assert_eq!(value["comment"], "緩徐に");
        assert!(value.get("narcoticPrescriptionLicenseNumber").is_none());
    }

    #[test]
    fn test_injection_requires_dose() {
        let injection: SimpleInjection = serde_json::from_value(json!({
            "medication": [{"medicine": "アトロピン", "medicineCode": "1242401A1"}]
        }))
        .unwrap();
        assert_eq!(
            build_injection_module(&injection).unwrap_err(),
            BuildError::missing("InjectionModule", "dose")
        );
    }
}
