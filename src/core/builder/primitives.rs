//! Primitive fragment builders
//!
//! Small pure constructors for the MML common formats. Coded arguments (id
//! types, facility id types) are passed through as given; checking them
//! against their tables is left to schema validation downstream.

use crate::domain::codes::{
    RepCode, ADDRESS_CLASS_BUSINESS, ADDRESS_CLASS_HOME, DEPARTMENT_ID_DENTAL,
    DEPARTMENT_ID_FACILITY, DEPARTMENT_ID_MEDICAL, PERSON_ID_TYPE_FACILITY, TABLE_DEPARTMENT_ID,
    TABLE_FACILITY_ID, TABLE_LICENSE, TABLE_PERSON_ID, TABLE_REP_CODE, TEL_EQUIP_MOBILE,
    TEL_EQUIP_PHONE,
};
use crate::domain::mml::{
    Address, AddressAttr, Attributes, CodedText, Department, ExtRef, ExtRefAttr, Facility,
    Identifier, IdentifierAttr, LocalizedName, PersonName, Phone, PhoneAttr, ScriptAttr,
};
use crate::domain::simple::SimpleExtRef;
use crate::domain::{BuildError, BuildResult};

/// Person id (MML0024)
///
/// A facility-scoped id references the issuing facility as its table, so it
/// cannot be built without `facility_id`; `None` is returned in that case.
pub fn build_person_id(pid: &str, id_type: &str, facility_id: Option<&str>) -> Option<Identifier> {
    let table_id = if id_type == PERSON_ID_TYPE_FACILITY {
        facility_id?.to_string()
    } else {
        TABLE_PERSON_ID.to_string()
    };

    Some(Identifier {
        value: pid.to_string(),
        attr: IdentifierAttr {
            id_type: id_type.to_string(),
            table_id,
        },
    })
}

fn script(rep_code: RepCode) -> ScriptAttr {
    ScriptAttr {
        rep_code,
        table_id: TABLE_REP_CODE,
    }
}

pub fn build_person_name(rep_code: RepCode, full_name: &str) -> PersonName {
    PersonName {
        attr: script(rep_code),
        fullname: full_name.to_string(),
        prefix: None,
        degree: None,
    }
}

pub fn build_kanji_name(full_name: &str) -> PersonName {
    build_person_name(RepCode::Kanji, full_name)
}

pub fn build_kana_name(full_name: &str) -> PersonName {
    build_person_name(RepCode::Kana, full_name)
}

pub fn build_roman_name(full_name: &str) -> PersonName {
    build_person_name(RepCode::Roman, full_name)
}

/// Names in every script supplied, kanji first
pub fn build_person_names(
    kanji: Option<&str>,
    kana: Option<&str>,
    roman: Option<&str>,
) -> Vec<PersonName> {
    let mut names = Vec::with_capacity(3);
    if let Some(n) = kanji {
        names.push(build_kanji_name(n));
    }
    if let Some(n) = kana {
        names.push(build_kana_name(n));
    }
    if let Some(n) = roman {
        names.push(build_roman_name(n));
    }
    names
}

/// Address written in kanji (MML0002 class)
pub fn build_address(address_class: &'static str, postal_code: Option<&str>, full: &str) -> Address {
    Address {
        attr: AddressAttr {
            rep_code: RepCode::Kanji,
            address_class,
            table_id: TABLE_REP_CODE,
        },
        full: full.to_string(),
        zip: postal_code.map(str::to_string),
    }
}

pub fn build_business_address(postal_code: Option<&str>, full: &str) -> Address {
    build_address(ADDRESS_CLASS_BUSINESS, postal_code, full)
}

pub fn build_home_address(postal_code: Option<&str>, full: &str) -> Address {
    build_address(ADDRESS_CLASS_HOME, postal_code, full)
}

/// Phone number (MML0003 equipment type)
pub fn build_phone(tel_equip_type: &'static str, number: &str) -> Phone {
    Phone {
        attr: PhoneAttr { tel_equip_type },
        full: number.to_string(),
    }
}

pub fn build_telephone(number: &str) -> Phone {
    build_phone(TEL_EQUIP_PHONE, number)
}

pub fn build_mobile(number: &str) -> Phone {
    build_phone(TEL_EQUIP_MOBILE, number)
}

fn kanji_label(value: &str) -> LocalizedName {
    LocalizedName {
        value: value.to_string(),
        attr: script(RepCode::Kanji),
    }
}

/// Facility with a kanji name; `id_type` is an MML0027 code
pub fn build_facility(id: &str, id_type: &str, name: &str) -> Facility {
    Facility {
        name: vec![kanji_label(name)],
        id: Identifier {
            value: id.to_string(),
            attr: IdentifierAttr {
                id_type: id_type.to_string(),
                table_id: TABLE_FACILITY_ID.to_string(),
            },
        },
    }
}

/// Department with a kanji name; `id_type` is an MML0029 code
pub fn build_department(id: &str, id_type: &str, name: &str) -> Department {
    Department {
        name: vec![kanji_label(name)],
        id: Identifier {
            value: id.to_string(),
            attr: IdentifierAttr {
                id_type: id_type.to_string(),
                table_id: TABLE_DEPARTMENT_ID.to_string(),
            },
        },
    }
}

pub fn build_medical_department(id: &str, name: &str) -> Department {
    build_department(id, DEPARTMENT_ID_MEDICAL, name)
}

pub fn build_dental_department(id: &str, name: &str) -> Department {
    build_department(id, DEPARTMENT_ID_DENTAL, name)
}

pub fn build_facility_department(id: &str, name: &str) -> Department {
    build_department(id, DEPARTMENT_ID_FACILITY, name)
}

/// Creator license (MML0026)
pub fn build_creator_license(license: &str) -> CodedText {
    CodedText::new(license, Attributes::new().with("tableId", TABLE_LICENSE))
}

/// External reference; `href` is required
pub fn build_ext_ref(src: &SimpleExtRef, module: &'static str) -> BuildResult<ExtRef> {
    let href = src.href.clone().ok_or(BuildError::missing(module, "href"))?;
    Ok(ExtRef {
        attr: ExtRefAttr {
            href,
            content_type: src.content_type.clone(),
            medical_role: src.medical_role.clone(),
            title: src.title.clone(),
        },
    })
}

/// External references of a list field, omitted when the field is absent
pub fn build_ext_refs(
    src: Option<&Vec<SimpleExtRef>>,
    module: &'static str,
) -> BuildResult<Option<Vec<ExtRef>>> {
    src.map(|refs| refs.iter().map(|r| build_ext_ref(r, module)).collect())
        .transpose()
}
