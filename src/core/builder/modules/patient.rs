//! Patient information and health insurance modules

use crate::core::builder::primitives::{
    build_home_address, build_mobile, build_person_id, build_person_names, build_telephone,
};
use crate::core::builder::required;
use crate::domain::codes::{DEFAULT_COUNTRY_TYPE, TABLE_INSURANCE_CLASS};
use crate::domain::mml::{
    Attributes, ClientId, CodedText, CountryAttr, HealthInsuranceModule, MasterId, Measure,
    PatientModule, PublicInsuranceItem, UniqueInfo,
};
use crate::domain::simple::{SimpleHealthInsurance, SimplePatient, SimplePublicInsurance};
use crate::domain::{BuildError, BuildResult};

const PATIENT: &str = "PatientModule";
const INSURANCE: &str = "HealthInsuranceModule";

/// Builds the patient module
///
/// `facilityId` is required only for a facility-scoped patient id. Phones are
/// listed telephone first.
pub fn build_patient_module(patient: &SimplePatient) -> BuildResult<PatientModule> {
    let id = required(&patient.id, PATIENT, "id")?;
    let id_type = required(&patient.id_type, PATIENT, "idType")?;
    let sex = required(&patient.gender, PATIENT, "gender")?;
    let birthday = required(&patient.date_of_birth, PATIENT, "dateOfBirth")?;

    let master_id = build_person_id(id, id_type, patient.facility_id.as_deref())
        .ok_or(BuildError::missing(PATIENT, "facilityId"))?;

    let phones = if patient.telephone.is_some() || patient.mobile.is_some() {
        let mut phones = Vec::with_capacity(2);
        if let Some(number) = &patient.telephone {
            phones.push(build_telephone(number));
        }
        if let Some(number) = &patient.mobile {
            phones.push(build_mobile(number));
        }
        Some(phones)
    } else {
        None
    };

    Ok(PatientModule {
        unique_info: UniqueInfo {
            master_id: MasterId { id: master_id },
        },
        person_name: build_person_names(
            patient.kanji_name.as_deref(),
            patient.kana_name.as_deref(),
            patient.roman_name.as_deref(),
        ),
        birthday: birthday.clone(),
        sex: sex.clone(),
        nationality: patient.nationality.as_deref().map(CodedText::plain),
        marital_status: patient.marital_status.clone(),
        addresses: patient
            .address
            .as_deref()
            .map(|full| vec![build_home_address(patient.postal_code.as_deref(), full)]),
        email_addresses: patient.email.clone().map(|email| vec![email]),
        phones,
    })
}

fn build_public_insurance(item: &SimplePublicInsurance) -> BuildResult<PublicInsuranceItem> {
    let priority = required(&item.priority, INSURANCE, "priority")?;

    Ok(PublicInsuranceItem {
        attr: Attributes::new().with("priority", priority.clone()),
        provider_name: item.provider_name.clone(),
        provider: required(&item.provider, INSURANCE, "provider")?.clone(),
        recipient: required(&item.recipient, INSURANCE, "recipient")?.clone(),
        start_date: required(&item.start_date, INSURANCE, "startDate")?.clone(),
        expired_date: required(&item.expired_date, INSURANCE, "expiredDate")?.clone(),
        payment_ratio: item.payment_ratio.clone().map(|value| Measure {
            value,
            attr: Attributes::new().with_opt("ratioType", item.payment_ratio_type.as_ref()),
        }),
    })
}

/// Builds the health insurance module; `countryType` defaults to `JPN`
pub fn build_health_insurance_module(
    insurance: &SimpleHealthInsurance,
) -> BuildResult<HealthInsuranceModule> {
    let insurance_number = required(&insurance.insurance_number, INSURANCE, "insuranceNumber")?;
    let client_group = required(&insurance.client_group, INSURANCE, "clientGroup")?;
    let client_number = required(&insurance.client_number, INSURANCE, "clientNumber")?;
    let family_class = required(&insurance.family_class, INSURANCE, "familyClass")?;
    let start_date = required(&insurance.start_date, INSURANCE, "startDate")?;
    let expired_date = required(&insurance.expired_date, INSURANCE, "expiredDate")?;

    let public_insurance = insurance
        .public_insurance
        .as_ref()
        .map(|items| items.iter().map(build_public_insurance).collect::<BuildResult<Vec<_>>>())
        .transpose()?;

    Ok(HealthInsuranceModule {
        attr: CountryAttr {
            country_type: insurance
                .country_type
                .clone()
                .unwrap_or_else(|| DEFAULT_COUNTRY_TYPE.to_string()),
        },
        insurance_class: insurance.insurance_class.as_ref().map(|class| {
            CodedText::new(
                class.clone(),
                Attributes::new()
                    .with_opt("ClassCode", insurance.insurance_class_code.as_ref())
                    .with("tableId", TABLE_INSURANCE_CLASS),
            )
        }),
        insurance_number: insurance_number.clone(),
        client_id: ClientId {
            group: client_group.clone(),
            number: client_number.clone(),
        },
        family_class: family_class.clone(),
        continued_diseases: insurance.continued_diseases.clone(),
        start_date: start_date.clone(),
        expired_date: expired_date.clone(),
        payment_in_ratio: insurance.payment_in_ratio.clone(),
        payment_out_ratio: insurance.payment_out_ratio.clone(),
        public_insurance,
    })
}
