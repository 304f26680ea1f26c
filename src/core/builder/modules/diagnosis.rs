//! Registered diagnosis module

use crate::core::builder::required;
use crate::domain::codes::TABLE_DIAGNOSIS_CATEGORY;
use crate::domain::mml::{Attributes, CodedText, RegisteredDiagnosisModule};
use crate::domain::simple::SimpleDiagnosis;
use crate::domain::BuildResult;

const MODULE: &str = "RegisteredDiagnosisModule";

/// Builds one registered diagnosis
///
/// Diagnosis text, code and coding system are required. Onset and remission
/// dates map to `startDate` and `endDate`.
pub fn build_registered_diagnosis_module(
    diagnosis: &SimpleDiagnosis,
) -> BuildResult<RegisteredDiagnosisModule> {
    let name = required(&diagnosis.diagnosis, MODULE, "diagnosis")?;
    let code = required(&diagnosis.code, MODULE, "code")?;
    let system = required(&diagnosis.system, MODULE, "system")?;

    Ok(RegisteredDiagnosisModule {
        diagnosis: CodedText::new(
            name.clone(),
            Attributes::new()
                .with("code", code.clone())
                .with("system", system.clone()),
        ),
        categories: diagnosis.category.as_ref().map(|category| {
            vec![CodedText::new(
                category.clone(),
                Attributes::new().with("tableId", TABLE_DIAGNOSIS_CATEGORY),
            )]
        }),
        start_date: diagnosis.date_of_onset.clone(),
        end_date: diagnosis.date_of_remission.clone(),
        outcome: diagnosis.outcome.clone(),
    })
}
