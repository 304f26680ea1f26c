//! Document-info assembler

use crate::domain::codes::RELATION_OLD_EDITION;
use crate::domain::ids::DocumentUid;
use crate::domain::mml::{
    AccessRight, ConfirmDate, ConfirmDateAttr, CreatorInfo, DocId, DocInfo, DocInfoAttr, DocTitle,
    GroupClassAttr, GroupId, ParentId, RelationAttr, TitleAttr,
};
use crate::domain::{BuildError, BuildResult};

const MODULE: &str = "DocInfo";

/// Envelope inputs of one module
///
/// `uid` is minted by the caller, one per module.
#[derive(Debug, Clone)]
pub struct DocInfoBase<'a> {
    /// MML0005 content module type
    pub module_type: &'a str,
    pub uid: DocumentUid,
    pub confirm_date: &'a str,
    /// Falls back to `module_type` when absent
    pub title: Option<&'a str>,
    pub generation_purpose: &'a str,
    pub group_id: Option<&'a str>,
    pub parent_uuid: Option<&'a str>,
    pub parent_confirm_date: Option<&'a str>,
    pub event_date: Option<&'a str>,
}

/// Builds the `docInfo` envelope of a module
///
/// A revision link needs both `parent_uuid` and `parent_confirm_date`; when it
/// is present, `confirmDate.attr` is replaced by `{firstConfirmDate}` and any
/// `eventDate` set on it is dropped.
pub fn build_doc_info(
    base: &DocInfoBase<'_>,
    creator_info: CreatorInfo,
    access_rights: Vec<AccessRight>,
) -> BuildResult<DocInfo> {
    let parent = match (base.parent_uuid, base.parent_confirm_date) {
        (Some(uuid), Some(date)) => Some((uuid, date)),
        (Some(_), None) => return Err(BuildError::missing(MODULE, "parentConfirmDate")),
        (None, Some(_)) => return Err(BuildError::missing(MODULE, "parentUUID")),
        (None, None) => None,
    };

    let mut confirm_date = ConfirmDate {
        value: base.confirm_date.to_string(),
        attr: base.event_date.map(|event_date| ConfirmDateAttr {
            event_date: Some(event_date.to_string()),
            ..Default::default()
        }),
    };

    let parent_id = parent.map(|(uuid, first_confirm_date)| {
        confirm_date.attr = Some(ConfirmDateAttr {
            first_confirm_date: Some(first_confirm_date.to_string()),
            event_date: None,
        });
        vec![ParentId {
            value: uuid.to_string(),
            attr: RelationAttr {
                relation: RELATION_OLD_EDITION,
            },
        }]
    });

    let group_id = base.group_id.map(|group| {
        vec![GroupId {
            value: group.to_string(),
            attr: GroupClassAttr {
                group_class: base.module_type.to_string(),
            },
        }]
    });

    Ok(DocInfo {
        attr: DocInfoAttr {
            content_module_type: base.module_type.to_string(),
        },
        security_level: access_rights,
        title: DocTitle {
            value: base.title.unwrap_or(base.module_type).to_string(),
            attr: TitleAttr {
                generation_purpose: base.generation_purpose.to_string(),
            },
        },
        doc_id: DocId {
            uid: base.uid.clone(),
            parent_id,
            group_id,
        },
        confirm_date,
        creator_info,
        ext_refs: Vec::new(),
    })
}
