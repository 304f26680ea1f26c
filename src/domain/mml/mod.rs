//! MML document tree
//!
//! Output records mirror the MML element structure as JSON: `attr` holds XML
//! attributes, `value` holds element text and capitalized keys (`Id`,
//! `Facility`, `PersonalizedInfo`...) name embedded common formats. Optional
//! elements are `Option`s skipped on serialization, so an absent input never
//! turns into a `null` key. Rendering to markup is the formatter's job.

pub mod clinical;
pub mod common;
pub mod document;
pub mod medication;
pub mod observation;

pub use clinical::*;
pub use common::*;
pub use document::*;
pub use medication::*;
pub use observation::*;
