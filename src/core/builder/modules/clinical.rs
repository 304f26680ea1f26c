//! Lifestyle, base clinic, first clinic and progress course modules

use super::diagnosis::build_registered_diagnosis_module;
use crate::core::builder::primitives::{build_ext_refs, build_facility};
use crate::core::builder::required;
use crate::domain::codes::{FACILITY_ID_TYPE_OID, UNIT_CENTIMETER, UNIT_GRAM};
use crate::domain::mml::{
    AllergyItem, Attributes, BaseClinicModule, BirthInfo, Bloodtype, Childhood, FamilyHistoryItem,
    FirstClinicModule, FreeExpression, InfectionItem, LifestyleModule, Measure, OtherBloodtype,
    PastHistory, PastHistoryItem, ProgressCourseModule, VaccinationItem,
};
use crate::domain::simple::{
    SimpleBaseClinic, SimpleBirthInfo, SimpleBloodtype, SimpleChildhood, SimpleFamilyHistory,
    SimpleFirstClinic, SimpleLifestyle, SimplePastHistory, SimpleProgressCourse,
};
use crate::domain::{BuildError, BuildResult, Scalar};

const LIFESTYLE: &str = "LifestyleModule";
const BASE_CLINIC: &str = "BaseClinicModule";
const FIRST_CLINIC: &str = "FirstClinicModule";
const PROGRESS_COURSE: &str = "ProgressCourseModule";

pub fn build_lifestyle_module(lifestyle: &SimpleLifestyle) -> BuildResult<LifestyleModule> {
    Ok(LifestyleModule {
        occupation: required(&lifestyle.occupation, LIFESTYLE, "occupation")?.clone(),
        tobacco: required(&lifestyle.tobacco, LIFESTYLE, "tobacco")?.clone(),
        alcohol: required(&lifestyle.alcohol, LIFESTYLE, "alcohol")?.clone(),
        other: lifestyle.other.clone(),
    })
}

fn build_bloodtype(bloodtype: &SimpleBloodtype) -> BuildResult<Bloodtype> {
    let others = bloodtype
        .others
        .as_ref()
        .map(|others| {
            others
                .iter()
                .map(|other| {
                    Ok(OtherBloodtype {
                        type_name: required(&other.type_name, BASE_CLINIC, "typeName")?.clone(),
                        type_judgement: required(&other.type_judgement, BASE_CLINIC, "typeJudgement")?
                            .clone(),
                        description: other.description.clone(),
                    })
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(Bloodtype {
        abo: required(&bloodtype.abo, BASE_CLINIC, "abo")?.clone(),
        rh: bloodtype.rh.clone(),
        others,
        memo: bloodtype.memo.clone(),
    })
}

/// Builds the base clinic module (allergies, blood type, infections)
pub fn build_base_clinic_module(base: &SimpleBaseClinic) -> BuildResult<BaseClinicModule> {
    let allergy = base
        .allergy
        .as_ref()
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    Ok(AllergyItem {
                        factor: required(&item.factor, BASE_CLINIC, "factor")?.clone(),
                        severity: item.severity.clone(),
                        identified_date: item.identified_date.clone(),
                        memo: item.memo.clone(),
                    })
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    let infection = base
        .infection
        .as_ref()
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    Ok(InfectionItem {
                        factor: required(&item.factor, BASE_CLINIC, "factor")?.clone(),
                        exam_value: required(&item.exam_value, BASE_CLINIC, "examValue")?.clone(),
                        identified_date: item.identified_date.clone(),
                        memo: item.memo.clone(),
                    })
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(BaseClinicModule {
        allergy,
        bloodtype: base.bloodtype.as_ref().map(build_bloodtype).transpose()?,
        infection,
    })
}

fn build_family_history(item: &SimpleFamilyHistory) -> BuildResult<FamilyHistoryItem> {
    let relation = required(&item.relation, FIRST_CLINIC, "relation")?;
    let diagnosis = required(&item.simple_diagnosis, FIRST_CLINIC, "simpleDiagnosis")?;

    Ok(FamilyHistoryItem {
        relation: relation.clone(),
        diagnosis: build_registered_diagnosis_module(diagnosis)?,
        age: item.age.clone(),
        memo: item.memo.clone(),
    })
}

fn measure(value: &Option<Scalar>, unit: &'static str) -> Option<Measure> {
    value.clone().map(|value| Measure {
        value,
        attr: Attributes::new().with("unit", unit),
    })
}

fn build_birth_info(birth: &SimpleBirthInfo) -> BirthInfo {
    let facility = match (&birth.facility_id, &birth.facility_name) {
        (Some(id), Some(name)) => Some(build_facility(id, FACILITY_ID_TYPE_OID, name)),
        _ => None,
    };

    BirthInfo {
        facility,
        delivery_weeks: birth.delivery_weeks.clone(),
        delivery_method: birth.delivery_method.clone(),
        body_weight: measure(&birth.body_weight, UNIT_GRAM),
        body_height: measure(&birth.body_height, UNIT_CENTIMETER),
        chest_circumference: measure(&birth.chest_circumference, UNIT_CENTIMETER),
        head_circumference: measure(&birth.head_circumference, UNIT_CENTIMETER),
        memo: birth.memo.clone(),
    }
}

fn build_childhood(childhood: &SimpleChildhood) -> BuildResult<Childhood> {
    let vaccination = childhood
        .vaccination
        .as_ref()
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    Ok(VaccinationItem {
                        vaccine: required(&item.vaccine, FIRST_CLINIC, "vaccine")?.clone(),
                        injected: required(&item.injected, FIRST_CLINIC, "injected")?.clone(),
                        age: item.age.clone(),
                        memo: item.memo.clone(),
                    })
                })
                .collect::<BuildResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(Childhood {
        birth_info: childhood.birth_info.as_ref().map(build_birth_info),
        vaccination,
    })
}

/// Free notes win over timed items; neither yields no past history
fn build_past_history(past: &SimplePastHistory) -> BuildResult<Option<PastHistory>> {
    if let Some(notes) = &past.free_notes {
        return Ok(Some(PastHistory::FreeNotes(notes.clone())));
    }

    let Some(items) = &past.past_history_item else {
        return Ok(None);
    };
    let items = items
        .iter()
        .map(|item| {
            Ok(PastHistoryItem {
                time_expression: required(&item.time_expression, FIRST_CLINIC, "timeExpression")?
                    .clone(),
                event_expression: item.event_expression.clone(),
            })
        })
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(Some(PastHistory::PastHistoryItem(items)))
}

/// Builds the first clinic module; every section is optional
pub fn build_first_clinic_module(first: &SimpleFirstClinic) -> BuildResult<FirstClinicModule> {
    let family_history = first
        .family_history
        .as_ref()
        .map(|items| items.iter().map(build_family_history).collect::<BuildResult<Vec<_>>>())
        .transpose()?;

    let past_history = match &first.past_history {
        Some(past) => build_past_history(past)?,
        None => None,
    };

    Ok(FirstClinicModule {
        family_history,
        childhood: first.childhood.as_ref().map(build_childhood).transpose()?,
        past_history,
        chief_complaints: first.chief_complaints.clone(),
        present_illness_notes: first.present_illness_notes.clone(),
    })
}

pub fn build_progress_course_module(
    progress: &SimpleProgressCourse,
) -> BuildResult<ProgressCourseModule> {
    let content = progress
        .content
        .clone()
        .ok_or(BuildError::missing(PROGRESS_COURSE, "content"))?;

    Ok(ProgressCourseModule {
        free_expression: FreeExpression {
            value: content,
            ext_ref: build_ext_refs(progress.ext_ref.as_ref(), PROGRESS_COURSE)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lifestyle_requires_fields() {
        let lifestyle = SimpleLifestyle {
            occupation: Some("会社員".to_string()),
            tobacco: Some("なし".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_lifestyle_module(&lifestyle).unwrap_err(),
            BuildError::missing("LifestyleModule", "alcohol")
        );
    }

    #[test]
    fn test_lifestyle_copies_fields() {
        let lifestyle: SimpleLifestyle = serde_json::from_value(json!({
            "occupation": "会社員", "tobacco": "なし", "alcohol": "機会飲酒"
        }))
        .unwrap();
        let value = serde_json::to_value(build_lifestyle_module(&lifestyle).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"occupation": "会社員", "tobacco": "なし", "alcohol": "機会飲酒"})
        );
    }

    #[test]
    fn test_base_clinic_module() {
        let base: SimpleBaseClinic = serde_json::from_value(json!({
            "allergy": [{"factor": "ペニシリン", "severity": "severe"}],
            "bloodtype": {"abo": "a", "rh": "rhD+", "others": [{"typeName": "MN", "typeJudgement": "M"}]}
        }))
        .unwrap();
        let value = serde_json::to_value(build_base_clinic_module(&base).unwrap()).unwrap();

        assert_eq!(value["allergy"], json!([{"factor": "ペニシリン", "severity": "severe"}]));
        assert_eq!(
            value["bloodtype"]["others"],
            json!([{"typeName": "MN", "typeJudgement": "M"}])
        );
        assert!(value.get("infection").is_none());
    }

    #[test]
    fn test_base_clinic_infection_requires_exam_value() {
        let base: SimpleBaseClinic =
            serde_json::from_value(json!({"infection": [{"factor": "HBs抗原"}]})).unwrap();
        assert_eq!(
            build_base_clinic_module(&base).unwrap_err(),
            BuildError::missing("BaseClinicModule", "examValue")
        );
    }

    #[test]
    fn test_first_clinic_birth_info() {
        let first: SimpleFirstClinic = serde_json::from_value(json!({
            "childhood": {
                "birthInfo": {
                    "facilityId": "1.2.3",
                    "facilityName": "産院",
                    "deliveryMethod": "経膣分娩",
                    "bodyWeight": 3200,
                    "bodyHeight": 50,
                    "memo": "特記なし"
                },
                "vaccination": [{"vaccine": "BCG", "injected": true, "age": "P6M"}]
            }
        }))
        .unwrap();
        let value = serde_json::to_value(build_first_clinic_module(&first).unwrap()).unwrap();
        let birth = &value["childhood"]["birthInfo"];

        assert_eq!(birth["Facility"]["Id"]["attr"]["type"], "OID");
        assert_eq!(birth["deliveryMethod"], "経膣分娩");
        assert!(birth.get("deliveryWeeks").is_none());
        assert_eq!(birth["memo"], "特記なし");
        assert_eq!(birth["bodyWeight"], json!({"value": 3200, "attr": {"unit": "g"}}));
        assert_eq!(birth["bodyHeight"], json!({"value": 50, "attr": {"unit": "cm"}}));
        assert_eq!(
            value["childhood"]["vaccination"],
            json!([{"vaccine": "BCG", "injected": true, "age": "P6M"}])
        );
    }

    #[test]
    fn test_birth_facility_needs_id_and_name() {
        let first: SimpleFirstClinic = serde_json::from_value(json!({
            "childhood": {"birthInfo": {"facilityName": "産院"}}
        }))
        .unwrap();
        let module = build_first_clinic_module(&first).unwrap();
        assert!(module.childhood.unwrap().birth_info.unwrap().facility.is_none());
    }

    #[test]
    fn test_past_history_prefers_free_notes() {
        let first: SimpleFirstClinic = serde_json::from_value(json!({
            "pastHistory": {
                "freeNotes": "虫垂炎",
                "pastHistoryItem": [{"timeExpression": "2014"}]
            }
        }))
        .unwrap();
        let value = serde_json::to_value(build_first_clinic_module(&first).unwrap()).unwrap();
        assert_eq!(value["pastHistory"], json!({"freeNotes": "虫垂炎"}));
    }

    #[test]
    fn test_past_history_items_and_family_history() {
        let first: SimpleFirstClinic = serde_json::from_value(json!({
            "familyHistory": [{
                "relation": "father",
                "simpleDiagnosis": {"diagnosis": "高血圧症", "code": "I10", "system": "ICD10"},
                "age": "P60Y"
            }],
            "pastHistory": {"pastHistoryItem": [{"timeExpression": "2014", "eventExpression": "虫垂炎"}]},
            "chiefComplaints": "腹痛"
        }))
        .unwrap();
        let value = serde_json::to_value(build_first_clinic_module(&first).unwrap()).unwrap();

        assert_eq!(
            value["pastHistory"],
            json!({"pastHistoryItem": [{"timeExpression": "2014", "eventExpression": ["虫垂炎"]}]})
        );
        assert_eq!(
            value["familyHistory"][0]["RegisteredDiagnosisModule"]["diagnosis"]["value"],
            "高血圧症"
        );
        assert_eq!(value["chiefComplaints"], "腹痛");
        assert!(value.get("childhood").is_none());
    }

    #[test]
    fn test_progress_course_module() {
        let progress: SimpleProgressCourse = serde_json::from_value(json!({
            "content": "経過良好",
            "extRef": [{"href": "patient001/img.jpg", "contentType": "image/jpeg"}]
        }))
        .unwrap();
        let value = serde_json::to_value(build_progress_course_module(&progress).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"freeExpression": {
                "value": "経過良好",
                "extRef": [{"attr": {"href": "patient001/img.jpg", "contentType": "image/jpeg"}}]
            }})
        );
    }

    #[test]
    fn test_progress_course_requires_content() {
        assert_eq!(
            build_progress_course_module(&SimpleProgressCourse::default()).unwrap_err(),
            BuildError::missing("ProgressCourseModule", "content")
        );
    }
}
