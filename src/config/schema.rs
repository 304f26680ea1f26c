//! Configuration schema types
//!
//! Every section has serde defaults, so an empty file is a valid
//! configuration.

use crate::domain::codes::{Permit, DEFAULT_PERSON_ID_TYPE, GENERATION_PURPOSE_RECORD};
use serde::{Deserialize, Serialize};

/// Main mmlgen configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MmlgenConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Document assembly policy
    #[serde(default)]
    pub builder: BuilderConfig,

    /// Where and how built documents are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MmlgenConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.builder.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Permission levels for the three access-right targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    pub creator: Permit,
    pub experience: Permit,
    pub patient: Permit,
}

/// Document assembly policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Insert a patient information module first when the composition has none
    #[serde(default)]
    pub synthesize_patient_module: bool,

    /// Person id type written on the patient access grant
    #[serde(default = "default_person_id_type")]
    pub person_id_type: String,

    /// MML0007 generation purpose of every document title
    #[serde(default = "default_generation_purpose")]
    pub generation_purpose: String,

    /// Permissions used when a composition carries no access rights; the
    /// two-grant default policy applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permissions: Option<PermissionsConfig>,
}

impl BuilderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.person_id_type.trim().is_empty() {
            return Err("builder.person_id_type cannot be empty".to_string());
        }
        if self.generation_purpose.trim().is_empty() {
            return Err("builder.generation_purpose cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            synthesize_patient_module: false,
            person_id_type: default_person_id_type(),
            generation_purpose: default_generation_purpose(),
            default_permissions: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON documents
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Output directory; documents go to stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// Appended to the input file stem to name each output file
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(directory) = &self.directory {
            if directory.trim().is_empty() {
                return Err("output.directory cannot be empty when set".to_string());
            }
        }
        if self.file_suffix.trim().is_empty() {
            return Err("output.file_suffix cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            directory: None,
            file_suffix: default_file_suffix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_person_id_type() -> String {
    DEFAULT_PERSON_ID_TYPE.to_string()
}

fn default_generation_purpose() -> String {
    GENERATION_PURPOSE_RECORD.to_string()
}

fn default_file_suffix() -> String {
    ".mml.json".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
