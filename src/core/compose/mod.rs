//! Composition assembly
//!
//! [`CompositionAssembler`] turns one [`Composition`] into one [`Document`]:
//!
//! 1. Resolves the patient, creator and access rights once
//! 2. Dispatches every content item to its module builder, in input order
//! 3. Wraps each built module in a `docInfo` envelope with a freshly minted id
//! 4. Keeps a `Rejected` slot in place of any item that fails to build
//!
//! A [`BuildReport`] accompanies every document with counts and the issues
//! of rejected items.
//!
//! # Example
//!
//! ```rust
//! use mmlgen::core::compose::{BuilderOptions, CompositionAssembler};
//! use mmlgen::domain::simple::Composition;
//! use serde_json::json;
//!
//! let composition: Composition = serde_json::from_value(json!({
//!     "context": {
//!         "patient": {"id": "000123", "idType": "facility", "facilityId": "1.2.3",
//!                     "kanjiName": "宮田 奈々", "gender": "female", "dateOfBirth": "1980-04-01"},
//!         "creator": {"id": "201605", "idType": "facility", "facilityId": "1.2.3",
//!                     "facilityIdType": "OID", "facilityName": "オープン病院",
//!                     "kanjiName": "青山 慶二", "license": "doctor"}
//!     },
//!     "content": [
//!         {"contentType": "Medical Diagnosis", "diagnosis": "胃潰瘍", "code": "K259", "system": "ICD10"}
//!     ]
//! })).unwrap();
//!
//! let assembler = CompositionAssembler::new(BuilderOptions::default());
//! let outcome = assembler.build(&composition).unwrap();
//! assert_eq!(outcome.document.body.items.len(), 1);
//! assert_eq!(outcome.report.items_rejected, 0);
//! ```
//!
//! [`Composition`]: crate::domain::simple::Composition
//! [`Document`]: crate::domain::mml::Document

pub mod assembler;
pub mod report;

pub use assembler::{BuildOutcome, BuilderOptions, CompositionAssembler};
pub use report::BuildReport;
