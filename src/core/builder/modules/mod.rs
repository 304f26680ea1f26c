//! Clinical module builders, one per content type

pub mod clinical;
pub mod diagnosis;
pub mod medication;
pub mod patient;
pub mod referral;
pub mod report;
pub mod summary;
pub mod surgery;
pub mod test;
pub mod vital_sign;

pub use clinical::{
    build_base_clinic_module, build_first_clinic_module, build_lifestyle_module,
    build_progress_course_module,
};
pub use diagnosis::build_registered_diagnosis_module;
pub use medication::{build_injection_module, build_prescription_module};
pub use patient::{build_health_insurance_module, build_patient_module};
pub use referral::build_referral_module;
pub use report::build_report_module;
pub use summary::build_summary_module;
pub use surgery::build_surgery_module;
pub use test::build_test_module;
pub use vital_sign::{build_flow_sheet_module, build_vital_sign_module};
