//! Result type alias for mmlgen
//!
//! Library operations that can fail at composition level return
//! `Result<T, MmlError>`. Single-module builders use
//! `std::result::Result<T, BuildError>` so the assembler can attach their
//! failures to one item slot.

use super::errors::MmlError;

/// Result type alias for mmlgen operations
///
/// # Examples
///
/// ```
/// use mmlgen::domain::result::Result;
/// use mmlgen::domain::errors::MmlError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MmlError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MmlError>;

/// Result type returned by the individual fragment and module builders
pub type BuildResult<T> = std::result::Result<T, super::errors::BuildError>;
