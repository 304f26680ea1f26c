//! Domain models and types for mmlgen.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Input records** ([`simple`]) as posted by callers, every field optional
//! - **Output records** ([`mml`]) forming the MML document tree
//! - **Content-type tags** ([`ContentType`]) and fixed MML codes ([`codes`])
//! - **Error types** ([`MmlError`], [`BuildError`], [`ItemIssue`])
//! - **Result type aliases** ([`Result`], [`BuildResult`])
//!
//! # Error Handling
//!
//! Composition-level failures return [`Result<T, MmlError>`]. Builders for a
//! single module return [`BuildResult<T>`], whose error converts into
//! [`MmlError`] with `?`:
//!
//! ```rust
//! use mmlgen::domain::{BuildError, BuildResult, Result};
//!
//! fn build_one() -> BuildResult<()> {
//!     Err(BuildError::missing("PatientModule", "gender"))
//! }
//!
//! fn build_all() -> Result<()> {
//!     build_one()?;
//!     Ok(())
//! }
//!
//! assert!(build_all().is_err());
//! ```

pub mod codes;
pub mod content;
pub mod context;
pub mod errors;
pub mod ids;
pub mod mml;
pub mod result;
pub mod scalar;
pub mod simple;

// Re-export commonly used types for convenience
pub use content::ContentType;
pub use errors::{BuildError, IssueKind, ItemIssue, MmlError};
pub use ids::DocumentUid;
pub use result::{BuildResult, Result};
pub use scalar::Scalar;
