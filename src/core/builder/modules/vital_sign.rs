//! Vital sign and flow sheet modules

use crate::core::builder::required;
use crate::domain::codes::TABLE_MEDICAL_DEPARTMENT;
use crate::domain::mml::{
    Attributes, BoFrequency, BodilyOutput, CodedText, FlowSheetModule, Intake,
    ObservationContext, VitalSignItem, VitalSignModule, VitalSignProtocol,
};
use crate::domain::simple::{
    SimpleBodilyOutput, SimpleFlowSheet, SimpleIntake, SimpleObservationContext, SimpleVitalSign,
    SimpleVitalSignItem, SimpleVitalSignProtocol,
};
use crate::domain::BuildResult;

const VITAL_SIGN: &str = "VitalSignModule";
const FLOW_SHEET: &str = "FlowSheetModule";

/// How department codes are written into an observation context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DepartmentCodes {
    /// `depCode` against the medical department table; needs a code
    MedicalTable,
    /// `depCode` and `depCodeId` as given
    AsGiven,
}

fn coded(
    value: &Option<String>,
    code_key: &'static str,
    code: &Option<String>,
    id_key: &'static str,
    code_id: &Option<String>,
) -> Option<CodedText> {
    value.as_ref().map(|value| {
        CodedText::new(
            value.clone(),
            Attributes::new()
                .with_opt(code_key, code.as_ref())
                .with_opt(id_key, code_id.as_ref()),
        )
    })
}

fn build_context(context: &SimpleObservationContext, codes: DepartmentCodes) -> ObservationContext {
    let department = match codes {
        DepartmentCodes::MedicalTable => context.department.as_ref().map(|department| {
            let attr = match &context.dep_code {
                Some(code) => Attributes::new()
                    .with("depCode", code.clone())
                    .with("depCodeId", TABLE_MEDICAL_DEPARTMENT),
                None => Attributes::new(),
            };
            CodedText::new(department.clone(), attr)
        }),
        DepartmentCodes::AsGiven => coded(
            &context.department,
            "depCode",
            &context.dep_code,
            "depCodeId",
            &context.dep_code_id,
        ),
    };

    ObservationContext {
        facility: coded(
            &context.facility,
            "facilityCode",
            &context.facility_code,
            "facilityCodeId",
            &context.facility_code_id,
        ),
        department,
        ward: coded(
            &context.ward,
            "wardCode",
            &context.ward_code,
            "wardCodeId",
            &context.ward_code_id,
        ),
        observer: coded(
            &context.observer,
            "obsCode",
            &context.obs_code,
            "obsCodeId",
            &context.obs_code_id,
        ),
    }
}

fn build_item(item: &SimpleVitalSignItem) -> BuildResult<VitalSignItem> {
    Ok(VitalSignItem {
        item_name: required(&item.item_name, VITAL_SIGN, "itemName")?.clone(),
        value: item.value.clone(),
        num_value: item.num_value.clone(),
        unit: item.unit.clone(),
        item_memo: item.item_memo.clone(),
    })
}

fn build_protocol(protocol: &SimpleVitalSignProtocol) -> VitalSignProtocol {
    VitalSignProtocol {
        procedure: protocol.procedure.clone(),
        position: protocol.position.clone(),
        device: protocol.device.clone(),
        body_location: protocol.body_location.clone(),
        prot_memo: protocol.prot_memo.clone(),
    }
}

/// Builds one vital sign observation
pub fn build_vital_sign_module(vital_sign: &SimpleVitalSign) -> BuildResult<VitalSignModule> {
    let items = required(&vital_sign.item, VITAL_SIGN, "item")?;
    let observed_time = required(&vital_sign.observed_time, VITAL_SIGN, "observedTime")?;

    Ok(VitalSignModule {
        item: items.iter().map(build_item).collect::<BuildResult<_>>()?,
        observed_time: observed_time.clone(),
        context: vital_sign
            .context
            .as_ref()
            .map(|c| build_context(c, DepartmentCodes::MedicalTable)),
        protocol: vital_sign.protocol.as_ref().map(build_protocol),
        vs_memo: vital_sign.vs_memo.clone(),
    })
}

fn build_intake(intake: &SimpleIntake) -> BuildResult<Intake> {
    Ok(Intake {
        intake_type: required(&intake.intake_type, FLOW_SHEET, "intakeType")?.clone(),
        intake_volume: intake.intake_volume.clone(),
        intake_unit: intake.intake_unit.clone(),
        intake_pathway: intake.intake_pathway.clone(),
        intake_start_time: intake.intake_start_time.clone(),
        intake_end_time: intake.intake_end_time.clone(),
        intake_memo: intake.intake_memo.clone(),
    })
}

fn build_bodily_output(output: &SimpleBodilyOutput) -> BuildResult<BodilyOutput> {
    Ok(BodilyOutput {
        bo_type: required(&output.bo_type, FLOW_SHEET, "boType")?.clone(),
        bo_volume: output.bo_volume.clone(),
        bo_unit: output.bo_unit.clone(),
        bo_status: output.bo_status.clone(),
        bo_color: output.bo_color.clone(),
        bo_pathway: output.bo_pathway.clone(),
        bo_start_time: output.bo_start_time.clone(),
        bo_end_time: output.bo_end_time.clone(),
        bo_frequency: output.bo_frequency.as_ref().map(|list| {
            list.iter()
                .map(|f| BoFrequency {
                    bof_times: f.bof_times.clone(),
                    bof_period_start_time: f.bof_period_start_time.clone(),
                    bof_period_end_time: f.bof_period_end_time.clone(),
                    bof_memo: f.bof_memo.clone(),
                })
                .collect()
        }),
        bo_memo: output.bo_memo.clone(),
    })
}

/// Builds a flow sheet: nested vital signs plus intake and output balance
pub fn build_flow_sheet_module(flow_sheet: &SimpleFlowSheet) -> BuildResult<FlowSheetModule> {
    let context = required(&flow_sheet.context, FLOW_SHEET, "context")?;
    required(&context.facility, FLOW_SHEET, "facility")?;

    Ok(FlowSheetModule {
        context: build_context(context, DepartmentCodes::AsGiven),
        vital_sign: flow_sheet
            .vital_sign
            .as_ref()
            .map(|list| {
                list.iter()
                    .map(build_vital_sign_module)
                    .collect::<BuildResult<Vec<_>>>()
            })
            .transpose()?,
        intake: flow_sheet
            .intake
            .as_ref()
            .map(|list| list.iter().map(build_intake).collect::<BuildResult<Vec<_>>>())
            .transpose()?,
        bodily_output: flow_sheet
            .bodily_output
            .as_ref()
            .map(|list| {
                list.iter()
                    .map(build_bodily_output)
                    .collect::<BuildResult<Vec<_>>>()
            })
            .transpose()?,
        fs_memo: flow_sheet.fs_memo.clone(),
    })
}
