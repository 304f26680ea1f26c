//! Access-control assembler
//!
//! Every module's security level grants access to three fixed targets: the
//! creator's facility, facilities the patient has a history with, and the
//! patient. The default policy returns two grants; the explicit form returns
//! one grant per target, always in creator, experience, patient order.

use crate::domain::codes::{
    Permit, ACCESS_FACILITY_CREATOR, ACCESS_FACILITY_CREATOR_LABEL, ACCESS_FACILITY_EXPERIENCE,
    ACCESS_FACILITY_EXPERIENCE_LABEL, ACCESS_PERSON_PATIENT, TABLE_ACCESS_FACILITY,
    TABLE_ACCESS_PERSON,
};
use crate::domain::mml::{
    AccessFacility, AccessFacilityAttr, AccessPerson, AccessPersonAttr, AccessRight, PermitAttr,
};
use crate::domain::simple::SimpleAccessRight;
use crate::domain::{BuildError, BuildResult};

const MODULE: &str = "AccessRight";

/// The patient a document's access rights are keyed on
#[derive(Debug, Clone, Copy)]
pub struct AccessSubject<'a> {
    pub patient_id: &'a str,
    /// Primary name; the patient grant carries no label without one
    pub patient_name: Option<&'a str>,
    /// Person id type written on the patient grant
    pub person_id_type: &'a str,
}

fn creator_facility() -> AccessFacility {
    AccessFacility {
        attr: AccessFacilityAttr {
            facility_code: ACCESS_FACILITY_CREATOR,
            table_id: TABLE_ACCESS_FACILITY,
        },
        value: ACCESS_FACILITY_CREATOR_LABEL,
    }
}

fn experience_facility() -> AccessFacility {
    AccessFacility {
        attr: AccessFacilityAttr {
            facility_code: ACCESS_FACILITY_EXPERIENCE,
            table_id: TABLE_ACCESS_FACILITY,
        },
        value: ACCESS_FACILITY_EXPERIENCE_LABEL,
    }
}

fn patient_person(subject: &AccessSubject<'_>) -> AccessPerson {
    AccessPerson {
        attr: AccessPersonAttr {
            person_code: ACCESS_PERSON_PATIENT,
            table_id: TABLE_ACCESS_PERSON,
            person_id: subject.patient_id.to_string(),
            person_id_type: subject.person_id_type.to_string(),
        },
        value: subject.patient_name.map(str::to_string),
    }
}

/// Two grants: full access for the creator's facility, read access for
/// experienced facilities and the patient
pub fn build_default_access_right(subject: &AccessSubject<'_>) -> Vec<AccessRight> {
    vec![
        AccessRight {
            attr: PermitAttr { permit: Permit::All },
            facility: Some(vec![creator_facility()]),
            person: None,
        },
        AccessRight {
            attr: PermitAttr { permit: Permit::Read },
            facility: Some(vec![experience_facility()]),
            person: Some(vec![patient_person(subject)]),
        },
    ]
}

/// Three grants with caller-chosen permission levels
///
/// Every slot must be set; a missing one is reported by its key.
pub fn build_access_right(
    subject: &AccessSubject<'_>,
    permits: &SimpleAccessRight,
) -> BuildResult<Vec<AccessRight>> {
    let creator = permits.creator.ok_or(BuildError::missing(MODULE, "creator"))?;
    let experience = permits
        .experience
        .ok_or(BuildError::missing(MODULE, "experience"))?;
    let patient = permits.patient.ok_or(BuildError::missing(MODULE, "patient"))?;

    Ok(vec![
        AccessRight {
            attr: PermitAttr { permit: creator },
            facility: Some(vec![creator_facility()]),
            person: None,
        },
        AccessRight {
            attr: PermitAttr { permit: experience },
            facility: Some(vec![experience_facility()]),
            person: None,
        },
        AccessRight {
            attr: PermitAttr { permit: patient },
            facility: None,
            person: Some(vec![patient_person(subject)]),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::DEFAULT_PERSON_ID_TYPE;
    use serde_json::json;

    fn subject(name: Option<&'static str>) -> AccessSubject<'static> {
        AccessSubject {
            patient_id: "000123",
            patient_name: name,
            person_id_type: DEFAULT_PERSON_ID_TYPE,
        }
    }

    #[test]
    fn test_default_access_right_shape() {
        let rights = build_default_access_right(&subject(Some("宮田 奈々")));
        assert_eq!(
            serde_json::to_value(&rights).unwrap(),
            json!([
                {
                    "attr": {"permit": "all"},
                    "facility": [{"attr": {"facilityCode": "creator", "tableId": "MML0035"}, "value": "記載者施設"}]
                },
                {
                    "attr": {"permit": "read"},
                    "facility": [{"attr": {"facilityCode": "experience", "tableId": "MML0035"}, "value": "診療歴のある施設"}],
                    "person": [{
                        "attr": {
                            "personCode": "patient",
                            "tableId": "MML0036",
                            "personId": "000123",
                            "personIdType": "dolphinUserId_2001-10-03"
                        },
                        "value": "宮田 奈々"
                    }]
                }
            ])
        );
    }

    #[test]
    fn test_default_access_right_without_patient_name() {
        let rights = build_default_access_right(&subject(None));
        let person = &rights[1].person.as_ref().unwrap()[0];
        assert_eq!(person.value, None);
        assert!(serde_json::to_value(person).unwrap().get("value").is_none());
    }

    #[test]
    fn test_access_right_uses_three_fixed_slots() {
        let permits = SimpleAccessRight {
            creator: Some(Permit::All),
            experience: Some(Permit::None),
            patient: Some(Permit::Read),
        };
        let rights = build_access_right(&subject(Some("宮田 奈々")), &permits).unwrap();

        assert_eq!(rights.len(), 3);
        assert_eq!(rights[0].attr.permit, Permit::All);
        assert_eq!(rights[1].attr.permit, Permit::None);
        assert_eq!(rights[2].attr.permit, Permit::Read);
        assert!(rights[1].person.is_none());
        assert!(rights[2].facility.is_none());
        assert_eq!(rights[2].person.as_ref().unwrap()[0].attr.person_id, "000123");
    }

    #[test]
    fn test_access_right_missing_slot() {
        let permits = SimpleAccessRight {
            creator: Some(Permit::All),
            experience: None,
            patient: Some(Permit::Read),
        };
        assert_eq!(
            build_access_right(&subject(None), &permits).unwrap_err(),
            BuildError::missing("AccessRight", "experience")
        );
    }
}
