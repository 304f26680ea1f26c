//! Configuration management for mmlgen.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! mmlgen reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `MMLGEN_<SECTION>_<KEY>` environment overrides
//! - Per-section validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mmlgen::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mmlgen.toml")?;
//!
//! println!("Person id type: {}", config.builder.person_id_type);
//! println!("Pretty output: {}", config.output.pretty);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`BuilderConfig`] - Document assembly policy and default permissions
//! - [`OutputConfig`] - Output directory, file suffix and JSON formatting
//! - [`LoggingConfig`] - Local JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [builder]
//! synthesize_patient_module = false
//! person_id_type = "dolphinUserId_2001-10-03"
//!
//! [builder.default_permissions]
//! creator = "all"
//! experience = "read"
//! patient = "read"
//!
//! [output]
//! pretty = true
//! directory = "${MMLGEN_OUT_DIR}"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, BuilderConfig, LoggingConfig, MmlgenConfig, OutputConfig,
    PermissionsConfig,
};
