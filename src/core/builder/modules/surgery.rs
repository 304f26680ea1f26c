//! Surgery module

use super::diagnosis::build_registered_diagnosis_module;
use crate::core::builder::person::build_personalized_info;
use crate::core::builder::primitives::{build_ext_ref, build_facility_department};
use crate::core::builder::required;
use crate::domain::mml::{
    Attributes, CodedText, Department, ProcedureItem, Staff, SurgeryItem, SurgeryModule,
    SurgicalInfo,
};
use crate::domain::simple::{
    SimpleCodedTitle, SimpleProcedure, SimpleStaff, SimpleSurgery, SimpleSurgeryContext,
    SimpleSurgeryItem,
};
use crate::domain::BuildResult;

const MODULE: &str = "SurgeryModule";

fn department(id: &Option<String>, name: &Option<String>) -> Option<Vec<Department>> {
    match (id, name) {
        (Some(id), Some(name)) => Some(vec![build_facility_department(id, name)]),
        _ => None,
    }
}

fn build_surgical_info(context: &SimpleSurgeryContext) -> BuildResult<SurgicalInfo> {
    Ok(SurgicalInfo {
        attr: Attributes::new().with_opt("type", context.surgery_type.as_ref()),
        date: required(&context.date, MODULE, "date")?.clone(),
        start_time: context.start_time.clone(),
        duration: context.duration.clone(),
        surgical_department: department(
            &context.surgical_department_id,
            &context.surgical_department_name,
        ),
        patient_department: department(
            &context.patient_department_id,
            &context.patient_department_name,
        ),
    })
}

fn coded(value: &str, code: &Option<String>, system: &Option<String>) -> CodedText {
    CodedText::new(
        value,
        Attributes::new()
            .with_opt("code", code.as_ref())
            .with_opt("system", system.as_ref()),
    )
}

fn build_procedure(procedure: &SimpleProcedure) -> BuildResult<ProcedureItem> {
    let operation = required(&procedure.operation, MODULE, "operation")?;
    Ok(ProcedureItem {
        operation: coded(operation, &procedure.code, &procedure.system),
        procedure_memo: procedure.procedure_memo.clone(),
    })
}

fn build_anesthesia(title: &SimpleCodedTitle) -> BuildResult<CodedText> {
    let value = required(&title.title, MODULE, "title")?;
    Ok(coded(value, &title.code, &title.system))
}

fn build_staff(staff: &SimpleStaff) -> BuildResult<Staff> {
    Ok(Staff {
        attr: Attributes::new()
            .with_opt("superiority", staff.superiority.as_ref())
            .with_opt("staffClass", staff.staff_class.as_ref()),
        staff_info: vec![build_personalized_info(&staff.person)?],
    })
}

fn build_staffs(staffs: Option<&Vec<SimpleStaff>>) -> BuildResult<Option<Vec<Staff>>> {
    staffs
        .map(|list| list.iter().map(build_staff).collect())
        .transpose()
}

fn build_surgery_item(item: &SimpleSurgeryItem) -> BuildResult<SurgeryItem> {
    let context = required(&item.context, MODULE, "context")?;
    let diagnoses = required(&item.surgical_diagnosis, MODULE, "surgicalDiagnosis")?;
    let procedures = required(&item.surgical_procedure, MODULE, "surgicalProcedure")?;

    Ok(SurgeryItem {
        surgical_info: build_surgical_info(context)?,
        surgical_diagnosis: diagnoses
            .iter()
            .map(build_registered_diagnosis_module)
            .collect::<BuildResult<_>>()?,
        surgical_procedure: procedures
            .iter()
            .map(build_procedure)
            .collect::<BuildResult<_>>()?,
        surgical_staffs: build_staffs(item.surgical_staffs.as_ref())?,
        anesthesia_procedure: item
            .anesthesia_procedure
            .as_ref()
            .map(|list| list.iter().map(build_anesthesia).collect::<BuildResult<Vec<_>>>())
            .transpose()?,
        anesthesiologists: build_staffs(item.anesthesiologists.as_ref())?,
        anesthesia_duration: item.anesthesia_duration.clone(),
        operative_notes: item.operative_notes.clone(),
        reference_info: item
            .reference_info
            .as_ref()
            .map(|r| build_ext_ref(r, MODULE))
            .transpose()?,
        memo: item.memo.clone(),
    })
}

/// Builds a surgery module from its list of surgery items
pub fn build_surgery_module(surgery: &SimpleSurgery) -> BuildResult<SurgeryModule> {
    let items = required(&surgery.surgery_item, MODULE, "surgeryItem")?;
    Ok(SurgeryModule {
        surgery_item: items
            .iter()
            .map(build_surgery_item)
            .collect::<BuildResult<_>>()?,
    })
}
