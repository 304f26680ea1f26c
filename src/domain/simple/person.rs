//! Person and patient input records

use serde::Deserialize;

/// Any human actor: creator, staff member, referral partner, lab representative
///
/// The same shape is used for the document creator (which additionally needs
/// `license`) and for surgery staff (which may carry `superiority` and
/// `staffClass`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePerson {
    pub id: Option<String>,
    /// MML0024 (national, local, facility)
    pub id_type: Option<String>,
    pub kanji_name: Option<String>,
    pub kana_name: Option<String>,
    pub roman_name: Option<String>,
    pub prefix: Option<String>,
    pub degree: Option<String>,
    pub facility_id: Option<String>,
    /// MML0027 (ca, insurance, monbusho, JMARI, OID)
    pub facility_id_type: Option<String>,
    pub facility_name: Option<String>,
    pub facility_zip_code: Option<String>,
    pub facility_address: Option<String>,
    pub facility_phone: Option<String>,
    pub department_id: Option<String>,
    /// MML0029 (medical, dental, facility)
    pub department_id_type: Option<String>,
    pub department_name: Option<String>,
    pub email: Option<String>,
    /// MML0026
    pub license: Option<String>,
}

/// Surgical staff member or anesthesiologist
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleStaff {
    pub superiority: Option<String>,
    /// MML0022
    pub staff_class: Option<String>,
    #[serde(flatten)]
    pub person: SimplePerson,
}

/// The patient a composition is about
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePatient {
    pub id: Option<String>,
    pub id_type: Option<String>,
    pub facility_id: Option<String>,
    pub kanji_name: Option<String>,
    pub kana_name: Option<String>,
    pub roman_name: Option<String>,
    /// MML0010 (female, male, other, unknown)
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    /// MML0011
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

impl SimplePatient {
    /// Name used to label the patient access grant: kanji, then kana, then roman
    pub fn primary_name(&self) -> Option<&str> {
        self.kanji_name
            .as_deref()
            .or(self.kana_name.as_deref())
            .or(self.roman_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primary_name_prefers_kanji() {
        let patient = SimplePatient {
            kanji_name: Some("宮田 奈々".to_string()),
            roman_name: Some("Nana Miyata".to_string()),
            ..Default::default()
        };
        assert_eq!(patient.primary_name(), Some("宮田 奈々"));
    }

    #[test]
    fn test_primary_name_falls_back_to_roman() {
        let patient = SimplePatient {
            roman_name: Some("Nana Miyata".to_string()),
            ..Default::default()
        };
        assert_eq!(patient.primary_name(), Some("Nana Miyata"));
        assert_eq!(SimplePatient::default().primary_name(), None);
    }

    #[test]
    fn test_staff_flattens_person_fields() {
        let staff: SimpleStaff = serde_json::from_value(json!({
            "superiority": "1",
            "staffClass": "chief surgeon",
            "id": "201605",
            "kanjiName": "青山 慶二"
        }))
        .unwrap();

        assert_eq!(staff.staff_class.as_deref(), Some("chief surgeon"));
        assert_eq!(staff.person.id.as_deref(), Some("201605"));
        assert_eq!(staff.person.kanji_name.as_deref(), Some("青山 慶二"));
    }
}
