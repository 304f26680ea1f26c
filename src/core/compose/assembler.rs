//! Composition assembler

use super::report::BuildReport;
use crate::adapters::{format_timestamp, Clock, IdMinter, RandomIdMinter, SystemClock};
use crate::config::BuilderConfig;
use crate::core::builder::access::{build_access_right, build_default_access_right, AccessSubject};
use crate::core::builder::doc_info::{build_doc_info, DocInfoBase};
use crate::core::builder::modules::build_patient_module;
use crate::core::builder::person::build_creator_info;
use crate::core::builder::{build_item, required};
use crate::domain::codes::{DEFAULT_PERSON_ID_TYPE, GENERATION_PURPOSE_RECORD};
use crate::domain::errors::ItemIssue;
use crate::domain::ids::DocumentUid;
use crate::domain::mml::{
    AccessRight, CreateDateAttr, CreatorInfo, Document, MmlBody, MmlHeader, ModuleContent,
    ModuleItem,
};
use crate::domain::simple::{Composition, ItemEnvelope, SimpleAccessRight};
use crate::domain::{BuildError, BuildResult, ContentType, Result};
use crate::{log_build_start, log_item_rejected, log_module_built};
use serde::Deserialize;
use serde_json::Value;

const MODULE: &str = "Composition";

/// Assembly policy, usually taken from the `[builder]` config section
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderOptions {
    /// Insert a patient module first when no item supplies one
    pub synthesize_patient_module: bool,
    pub person_id_type: String,
    pub generation_purpose: String,
    /// Used when the composition carries no access rights of its own
    pub default_permissions: Option<SimpleAccessRight>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            synthesize_patient_module: false,
            person_id_type: DEFAULT_PERSON_ID_TYPE.to_string(),
            generation_purpose: GENERATION_PURPOSE_RECORD.to_string(),
            default_permissions: None,
        }
    }
}

impl From<&BuilderConfig> for BuilderOptions {
    fn from(config: &BuilderConfig) -> Self {
        Self {
            synthesize_patient_module: config.synthesize_patient_module,
            person_id_type: config.person_id_type.clone(),
            generation_purpose: config.generation_purpose.clone(),
            default_permissions: config.default_permissions.map(|p| SimpleAccessRight {
                creator: Some(p.creator),
                experience: Some(p.experience),
                patient: Some(p.patient),
            }),
        }
    }
}

/// An assembled document with its build report
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub document: Document,
    pub report: BuildReport,
}

impl BuildOutcome {
    pub fn has_rejections(&self) -> bool {
        !self.report.is_successful()
    }
}

/// Data shared by every module of one build
struct SharedContext<'a> {
    confirm_date: &'a str,
    group_id: &'a str,
    creator_info: &'a CreatorInfo,
    access_rights: &'a [AccessRight],
}

/// Builds MML documents from simple compositions
///
/// Generic over its id minter and clock so that tests can fix both; with
/// fixed collaborators, equal inputs produce equal documents.
#[derive(Debug, Clone)]
pub struct CompositionAssembler<M: IdMinter = RandomIdMinter, C: Clock = SystemClock> {
    options: BuilderOptions,
    minter: M,
    clock: C,
}

impl CompositionAssembler {
    /// Creates an assembler with random ids and the system clock
    pub fn new(options: BuilderOptions) -> Self {
        Self::with_collaborators(options, RandomIdMinter, SystemClock)
    }
}

impl<M: IdMinter, C: Clock> CompositionAssembler<M, C> {
    pub fn with_collaborators(options: BuilderOptions, minter: M, clock: C) -> Self {
        Self {
            options,
            minter,
            clock,
        }
    }

    /// Builds the document of one composition
    ///
    /// Items that fail to build become `Rejected` slots at their input
    /// position; the remaining items are still built.
    ///
    /// # Errors
    ///
    /// Returns [`MmlError::Build`] when the patient, the creator or the
    /// explicit access rights of the composition cannot be built.
    ///
    /// [`MmlError::Build`]: crate::domain::MmlError::Build
    pub fn build(&self, composition: &Composition) -> Result<BuildOutcome> {
        let context = &composition.context;

        let patient = required(&context.patient, MODULE, "patient")?;
        let creator = required(&context.creator, MODULE, "creator")?;
        let patient_module = build_patient_module(patient)?;
        let creator_info = build_creator_info(creator)?;

        let subject = AccessSubject {
            patient_id: &patient_module.unique_info.master_id.id.value,
            patient_name: patient.primary_name(),
            person_id_type: &self.options.person_id_type,
        };
        let access_rights = match context
            .access_right
            .as_ref()
            .or(self.options.default_permissions.as_ref())
        {
            Some(permits) => build_access_right(&subject, permits)?,
            None => build_default_access_right(&subject),
        };

        let create_date = format_timestamp(self.clock.now());
        let confirm_date = context.confirm_date.as_deref().unwrap_or(&create_date);
        let group_id = match &context.uuid {
            Some(uuid) => uuid.clone(),
            None => self.minter.next_uuid().hyphenated().to_string(),
        };

        log_build_start!(group_id, composition.content.len());

        let shared = SharedContext {
            confirm_date,
            group_id: &group_id,
            creator_info: &creator_info,
            access_rights: &access_rights,
        };

        let mut report = BuildReport::new(group_id.as_str(), composition.content.len());
        let mut items = Vec::with_capacity(composition.content.len());
        let mut has_patient_module = false;

        for (index, item) in composition.content.iter().enumerate() {
            let tag = item.get("contentType").and_then(Value::as_str);

            match self.build_slot(item, tag, &shared) {
                Ok((content_type, built)) => {
                    has_patient_module |= content_type == ContentType::PatientInformation;
                    report.modules_built += built.len();
                    items.extend(built);
                }
                Err(error) => {
                    log_item_rejected!(index, tag, &error);
                    let issue = ItemIssue::new(index, tag, &error);
                    report.add_issue(issue.clone());
                    items.push(ModuleItem::Rejected { error: issue });
                }
            }
        }

        if self.options.synthesize_patient_module && !has_patient_module {
            let synthesized = self.wrap_module(
                ContentType::PatientInformation,
                ModuleContent::Patient(Box::new(patient_module.clone())),
                &DocInfoOverrides::default(),
                &SharedContext {
                    confirm_date: &create_date,
                    ..shared
                },
                creator_info.clone(),
            )?;
            items.insert(0, synthesized);
            report.modules_built += 1;
            report.patient_module_synthesized = true;
        }

        let document = Document {
            attr: CreateDateAttr { create_date },
            header: MmlHeader {
                creator_info,
                master_id: patient_module.unique_info.master_id,
                toc: Vec::new(),
            },
            body: MmlBody { items },
        };

        Ok(BuildOutcome { document, report })
    }

    /// Builds every module of one content item
    ///
    /// Either all modules of the item are returned or the item is rejected as
    /// a whole.
    fn build_slot(
        &self,
        item: &Value,
        tag: Option<&str>,
        shared: &SharedContext<'_>,
    ) -> BuildResult<(ContentType, Vec<ModuleItem>)> {
        let envelope =
            ItemEnvelope::deserialize(item).map_err(|e| BuildError::InvalidContent {
                content_type: tag.unwrap_or("content item").to_string(),
                message: e.to_string(),
            })?;
        let content_type: ContentType = envelope
            .content_type
            .as_deref()
            .ok_or(BuildError::MissingContentType)?
            .parse()?;

        let built = build_item(content_type, item)?;
        let creator = built.creator.unwrap_or_else(|| shared.creator_info.clone());
        let overrides = DocInfoOverrides {
            title: envelope.doc_title.as_deref(),
            parent_uuid: envelope.parent_uuid.as_deref(),
            parent_confirm_date: envelope.parent_confirm_date.as_deref(),
            event_date: envelope.event_date.as_deref(),
        };

        let modules = built
            .modules
            .into_iter()
            .map(|content| self.wrap_module(content_type, content, &overrides, shared, creator.clone()))
            .collect::<BuildResult<Vec<_>>>()?;

        Ok((content_type, modules))
    }

    /// Mints a module id and puts the `docInfo` envelope around one module
    fn wrap_module(
        &self,
        content_type: ContentType,
        content: ModuleContent,
        overrides: &DocInfoOverrides<'_>,
        shared: &SharedContext<'_>,
        creator_info: CreatorInfo,
    ) -> BuildResult<ModuleItem> {
        let uid = DocumentUid::from_uuid(self.minter.next_uuid());
        let base = DocInfoBase {
            module_type: content_type.module_type(),
            uid,
            confirm_date: shared.confirm_date,
            title: overrides.title,
            generation_purpose: &self.options.generation_purpose,
            group_id: Some(shared.group_id),
            parent_uuid: overrides.parent_uuid,
            parent_confirm_date: overrides.parent_confirm_date,
            event_date: overrides.event_date,
        };
        let doc_info = build_doc_info(&base, creator_info, shared.access_rights.to_vec())?;

        log_module_built!(content_type, doc_info.doc_id.uid);

        Ok(ModuleItem::Module {
            doc_info: Box::new(doc_info),
            content,
        })
    }
}

/// Per-item envelope fields
#[derive(Debug, Clone, Copy, Default)]
struct DocInfoOverrides<'a> {
    title: Option<&'a str>,
    parent_uuid: Option<&'a str>,
    parent_confirm_date: Option<&'a str>,
    event_date: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::Permit;
    use crate::domain::MmlError;
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    struct SequentialMinter(AtomicU64);

    impl IdMinter for SequentialMinter {
        fn next_uuid(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::SeqCst) + 1))
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2026, 10, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .unwrap()
        }
    }

    fn assembler(options: BuilderOptions) -> CompositionAssembler<SequentialMinter, FixedClock> {
        CompositionAssembler::with_collaborators(options, SequentialMinter(AtomicU64::new(0)), FixedClock)
    }

    fn composition(content: Value) -> Composition {
        serde_json::from_value(json!({
            "context": {
                "confirmDate": "2026-09-30T10:00:00",
                "patient": {
                    "id": "000123", "idType": "facility", "facilityId": "1.2.3",
                    "kanjiName": "宮田 奈々", "gender": "female", "dateOfBirth": "1980-04-01"
                },
                "creator": {
                    "id": "201605", "idType": "facility", "facilityId": "1.2.3",
                    "facilityIdType": "OID", "facilityName": "オープン病院",
                    "kanjiName": "青山 慶二", "license": "doctor"
                }
            },
            "content": content
        }))
        .unwrap()
    }

    fn diagnosis() -> Value {
        json!({"contentType": "Medical Diagnosis", "diagnosis": "胃潰瘍", "code": "K259", "system": "ICD10"})
    }

    #[test]
    fn test_group_id_minted_once_then_one_id_per_module() {
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([diagnosis(), diagnosis()])))
            .unwrap();
        let items = &outcome.document.body.items;

        let uid = |i: usize| items[i].doc_info().unwrap().doc_id.uid.to_string();
        assert_eq!(uid(0), Uuid::from_u128(2).hyphenated().to_string());
        assert_eq!(uid(1), Uuid::from_u128(3).hyphenated().to_string());

        let group = &items[0].doc_info().unwrap().doc_id.group_id.as_ref().unwrap()[0];
        assert_eq!(group.value, Uuid::from_u128(1).hyphenated().to_string());
        assert_eq!(group.attr.group_class, "registeredDiagnosis");
        assert_eq!(outcome.report.composition_uuid, group.value);
    }

    #[test]
    fn test_context_uuid_is_the_group_id() {
        let mut input = composition(json!([diagnosis()]));
        input.context.uuid = Some("composition-42".to_string());
        let outcome = assembler(BuilderOptions::default()).build(&input).unwrap();

        let doc_info = outcome.document.body.items[0].doc_info().unwrap();
        assert_eq!(doc_info.doc_id.group_id.as_ref().unwrap()[0].value, "composition-42");
        assert_eq!(doc_info.doc_id.uid.to_string(), Uuid::from_u128(1).hyphenated().to_string());
    }

    #[test]
    fn test_confirm_date_falls_back_to_create_date() {
        let mut input = composition(json!([diagnosis()]));
        input.context.confirm_date = None;
        let outcome = assembler(BuilderOptions::default()).build(&input).unwrap();

        assert_eq!(outcome.document.attr.create_date, "2026-10-01T09:30:00");
        let doc_info = outcome.document.body.items[0].doc_info().unwrap();
        assert_eq!(doc_info.confirm_date.value, "2026-10-01T09:30:00");
    }

    #[test]
    fn test_unknown_and_missing_tags_keep_their_slot() {
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([
                {"contentType": "Hemodialysis"},
                diagnosis(),
                {"diagnosis": "胃潰瘍"}
            ])))
            .unwrap();
        let items = &outcome.document.body.items;

        assert_eq!(items.len(), 3);
        assert!(items[0].is_rejected());
        assert!(!items[1].is_rejected());
        assert_eq!(
            serde_json::to_value(&items[0]).unwrap(),
            json!({"error": {
                "index": 0,
                "contentType": "Hemodialysis",
                "kind": "unknownContentType",
                "message": "unknown content type 'Hemodialysis'"
            }})
        );
        assert_eq!(items[2].issue().unwrap().index, 2);
        assert_eq!(outcome.report.items_rejected, 2);
        assert_eq!(outcome.report.modules_built, 1);
        assert!(outcome.has_rejections());
    }

    #[test]
    fn test_half_revision_link_rejects_item() {
        let mut item = diagnosis();
        item["parentUUID"] = json!("0b4f2c1e-8f51-4a8e-9a57-4b0f4f3d1a10");
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([item])))
            .unwrap();

        let issue = outcome.document.body.items[0].issue().unwrap();
        assert_eq!(issue.field.as_deref(), Some("parentConfirmDate"));
        assert_eq!(issue.content_type.as_deref(), Some("Medical Diagnosis"));
    }

    #[test]
    fn test_non_object_item_reports_serde_error() {
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([diagnosis(), 5])))
            .unwrap();

        let issue = outcome.document.body.items[1].issue().unwrap();
        assert_eq!(issue.kind, crate::domain::errors::IssueKind::InvalidContent);
        assert_eq!(issue.content_type, None);
        assert!(issue.message.starts_with("invalid content item content: invalid type: integer `5`"));
    }

    #[test]
    fn test_badly_typed_envelope_field_names_the_tag() {
        let mut item = diagnosis();
        item["docTitle"] = json!(5);
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([item])))
            .unwrap();

        let issue = outcome.document.body.items[0].issue().unwrap();
        assert_eq!(issue.kind, crate::domain::errors::IssueKind::InvalidContent);
        assert_eq!(issue.content_type.as_deref(), Some("Medical Diagnosis"));
        assert!(issue.message.starts_with("invalid Medical Diagnosis content: invalid type: integer `5`"));
        assert!(!issue.message.contains("contentType"));
    }

    #[test]
    fn test_doc_title_comes_from_envelope_key() {
        let mut titled = diagnosis();
        titled["docTitle"] = json!("傷病名");
        let referral = json!({
            "contentType": "Referral",
            "patient": {
                "id": "000123", "idType": "facility", "facilityId": "1.2.3",
                "kanjiName": "宮田 奈々", "gender": "female", "dateOfBirth": "1980-04-01"
            },
            "referFrom": {
                "id": "201605", "idType": "facility", "facilityId": "1.2.3",
                "facilityIdType": "OID", "facilityName": "オープン病院",
                "kanjiName": "青山 慶二", "license": "doctor"
            },
            "title": "診療情報提供書",
            "chiefComplaints": "胃痛"
        });
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([titled, referral])))
            .unwrap();
        let items = &outcome.document.body.items;

        assert_eq!(items[0].doc_info().unwrap().title.value, "傷病名");
        assert_eq!(items[1].doc_info().unwrap().title.value, "referral");
    }

    #[test]
    fn test_access_rights_from_composition_override_config() {
        let mut input = composition(json!([diagnosis()]));
        input.context.access_right = Some(SimpleAccessRight {
            creator: Some(Permit::All),
            experience: Some(Permit::None),
            patient: Some(Permit::Read),
        });
        let options = BuilderOptions {
            default_permissions: Some(SimpleAccessRight {
                creator: Some(Permit::Read),
                experience: Some(Permit::Read),
                patient: Some(Permit::Read),
            }),
            ..Default::default()
        };
        let outcome = assembler(options).build(&input).unwrap();

        let rights = &outcome.document.body.items[0].doc_info().unwrap().security_level;
        assert_eq!(rights.len(), 3);
        assert_eq!(rights[1].attr.permit, Permit::None);
    }

    #[test]
    fn test_default_policy_without_any_permissions() {
        let outcome = assembler(BuilderOptions::default())
            .build(&composition(json!([diagnosis()])))
            .unwrap();
        let rights = &outcome.document.body.items[0].doc_info().unwrap().security_level;
        assert_eq!(rights.len(), 2);
    }

    #[test]
    fn test_missing_creator_fails_whole_composition() {
        let mut input = composition(json!([diagnosis()]));
        input.context.creator = None;
        let err = assembler(BuilderOptions::default()).build(&input).unwrap_err();
        assert!(matches!(
            err,
            MmlError::Build(BuildError::MissingField { module: "Composition", field: "creator" })
        ));
    }

    #[test]
    fn test_synthesized_patient_module_goes_first() {
        let options = BuilderOptions {
            synthesize_patient_module: true,
            ..Default::default()
        };
        let outcome = assembler(options)
            .build(&composition(json!([diagnosis()])))
            .unwrap();
        let items = &outcome.document.body.items;

        assert_eq!(items.len(), 2);
        let doc_info = items[0].doc_info().unwrap();
        assert_eq!(doc_info.attr.content_module_type, "patientInfo");
        assert_eq!(doc_info.confirm_date.value, "2026-10-01T09:30:00");
        assert!(outcome.report.patient_module_synthesized);
        assert_eq!(outcome.report.modules_built, 2);
    }

    #[test]
    fn test_no_synthesis_when_patient_item_present() {
        let options = BuilderOptions {
            synthesize_patient_module: true,
            ..Default::default()
        };
        let patient = json!({
            "contentType": "Patient Information",
            "id": "000123", "idType": "national", "gender": "female", "dateOfBirth": "1980-04-01"
        });
        let outcome = assembler(options)
            .build(&composition(json!([diagnosis(), patient])))
            .unwrap();

        assert_eq!(outcome.document.body.items.len(), 2);
        assert!(!outcome.report.patient_module_synthesized);
    }

    #[test]
    fn test_options_from_builder_config() {
        let config = BuilderConfig {
            default_permissions: Some(crate::config::PermissionsConfig {
                creator: Permit::All,
                experience: Permit::Read,
                patient: Permit::None,
            }),
            ..Default::default()
        };
        let options = BuilderOptions::from(&config);

        assert_eq!(options.person_id_type, DEFAULT_PERSON_ID_TYPE);
        assert_eq!(
            options.default_permissions.and_then(|p| p.patient),
            Some(Permit::None)
        );
    }
}
