//! Person and creator assembler

use super::primitives::{
    build_business_address, build_creator_license, build_department, build_facility,
    build_person_id, build_person_names, build_telephone,
};
use super::required;
use crate::domain::mml::{CreatorInfo, PersonalizedInfo};
use crate::domain::simple::SimplePerson;
use crate::domain::{BuildError, BuildResult};

const PERSON: &str = "PersonalizedInfo";
const CREATOR: &str = "CreatorInfo";

/// Builds a [`PersonalizedInfo`] for any human actor
///
/// Identity and facility fields are required. Names are built for each script
/// present (none is not an error), then `prefix` and `degree` are stamped onto
/// every one of them. A department is attached only when `departmentId` is
/// present, in which case its id type and name must be present too.
pub fn build_personalized_info(person: &SimplePerson) -> BuildResult<PersonalizedInfo> {
    let id = required(&person.id, PERSON, "id")?;
    let id_type = required(&person.id_type, PERSON, "idType")?;
    let facility_id = required(&person.facility_id, PERSON, "facilityId")?;
    let facility_id_type = required(&person.facility_id_type, PERSON, "facilityIdType")?;
    let facility_name = required(&person.facility_name, PERSON, "facilityName")?;

    let identifier = build_person_id(id, id_type, Some(facility_id))
        .ok_or(BuildError::missing(PERSON, "facilityId"))?;

    let mut person_name = build_person_names(
        person.kanji_name.as_deref(),
        person.kana_name.as_deref(),
        person.roman_name.as_deref(),
    );
    for name in &mut person_name {
        name.prefix = person.prefix.clone();
        name.degree = person.degree.clone();
    }

    let department = match &person.department_id {
        Some(department_id) => Some(build_department(
            department_id,
            required(&person.department_id_type, PERSON, "departmentIdType")?,
            required(&person.department_name, PERSON, "departmentName")?,
        )),
        None => None,
    };

    Ok(PersonalizedInfo {
        id: identifier,
        person_name,
        facility: build_facility(facility_id, facility_id_type, facility_name),
        department,
        addresses: person.facility_address.as_deref().map(|full| {
            vec![build_business_address(
                person.facility_zip_code.as_deref(),
                full,
            )]
        }),
        email_addresses: person.email.clone().map(|email| vec![email]),
        phones: person
            .facility_phone
            .as_deref()
            .map(|number| vec![build_telephone(number)]),
    })
}

/// Builds the [`CreatorInfo`] of a document author; `license` is required
pub fn build_creator_info(creator: &SimplePerson) -> BuildResult<CreatorInfo> {
    let license = required(&creator.license, CREATOR, "license")?;
    Ok(CreatorInfo {
        personalized_info: build_personalized_info(creator)?,
        creator_license: vec![build_creator_license(license)],
    })
}
