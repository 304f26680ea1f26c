//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to any `Result` whose error converts
//! into [`MmlError`], so library code can say what it was doing without
//! dropping down to `anyhow`.
//!
//! # Examples
//!
//! ```rust
//! use mmlgen::domain::Result;
//! use mmlgen::domain::context::ResultExt;
//!
//! fn read_composition(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read composition file: {}", path))
//! }
//! ```

use crate::domain::errors::MmlError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error (evaluated eagerly)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error using a closure, evaluated only on failure
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<MmlError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

// Keeps the variant of configuration and I/O errors so callers can still map
// them to exit codes after context was added.
fn wrap(base: MmlError, context: impl std::fmt::Display) -> MmlError {
    match base {
        MmlError::Configuration(msg) => MmlError::Configuration(format!("{context}: {msg}")),
        MmlError::Io(msg) => MmlError::Io(format!("{context}: {msg}")),
        MmlError::Serialization(msg) => MmlError::Serialization(format!("{context}: {msg}")),
        other => MmlError::Other(format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::BuildError;

    #[test]
    fn test_context_with_configuration_error() {
        let result: Result<()> = Err(MmlError::Configuration("Invalid config".to_string()));
        let err = result.context("Failed to load configuration").unwrap_err();

        assert!(matches!(err, MmlError::Configuration(_)));
        let msg = err.to_string();
        assert!(msg.contains("Failed to load configuration"));
        assert!(msg.contains("Invalid config"));
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let called = std::cell::Cell::new(false);
        let result: Result<i32> = Ok(42);
        let with_context = result.with_context(|| {
            called.set(true);
            "Expensive context"
        });

        assert!(with_context.is_ok());
        assert!(!called.get());
    }

    #[test]
    fn test_context_with_build_error() {
        let result: std::result::Result<(), BuildError> =
            Err(BuildError::missing("CreatorInfo", "license"));
        let err = result.context("Failed to resolve creator").unwrap_err();

        assert!(matches!(err, MmlError::Other(_)));
        let msg = err.to_string();
        assert!(msg.contains("Failed to resolve creator"));
        assert!(msg.contains("license"));
    }

    #[test]
    fn test_io_error_keeps_variant() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let result: std::result::Result<(), std::io::Error> = Err(io_error);
        let err = result.context("Failed to read input.json").unwrap_err();

        assert!(matches!(err, MmlError::Io(_)));
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<()> = Err(MmlError::Other("bad".to_string()));
        let err = result
            .context("Failed to assemble header")
            .context("Failed to build composition")
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Failed to build composition"));
        assert!(msg.contains("Failed to assemble header"));
        assert!(msg.contains("bad"));
    }
}
