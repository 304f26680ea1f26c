//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MmlgenConfig, PermissionsConfig};
use crate::domain::codes::Permit;
use crate::domain::errors::MmlError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MmlgenConfig
/// 4. Applies environment variable overrides (MMLGEN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use mmlgen::config::loader::load_config;
///
/// let config = load_config("mmlgen.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MmlgenConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MmlError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MmlError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MmlgenConfig = toml::from_str(&contents)
        .map_err(|e| MmlError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MmlError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the configuration file if it exists, otherwise returns defaults
///
/// Environment overrides apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<MmlgenConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = MmlgenConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        MmlError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All unset variables are reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MmlError::Configuration(format!("Invalid placeholder pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MmlError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_permit(var: &str, value: &str) -> Result<Permit> {
    value
        .parse()
        .map_err(|e| MmlError::Configuration(format!("{}: {}", var, e)))
}

/// Applies environment variable overrides using MMLGEN_* prefix
///
/// Environment variables follow the pattern: MMLGEN_<SECTION>_<KEY>
/// For example: MMLGEN_APPLICATION_LOG_LEVEL, MMLGEN_OUTPUT_DIRECTORY
fn apply_env_overrides(config: &mut MmlgenConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MMLGEN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Builder overrides
    if let Ok(val) = std::env::var("MMLGEN_BUILDER_SYNTHESIZE_PATIENT_MODULE") {
        config.builder.synthesize_patient_module = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MMLGEN_BUILDER_PERSON_ID_TYPE") {
        config.builder.person_id_type = val;
    }
    if let Ok(val) = std::env::var("MMLGEN_BUILDER_GENERATION_PURPOSE") {
        config.builder.generation_purpose = val;
    }

    // Default permissions override all three slots at once
    let permissions = [
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_CREATOR",
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_EXPERIENCE",
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_PATIENT",
    ]
    .map(|var| std::env::var(var).ok().map(|value| (var, value)));
    match permissions {
        [Some(creator), Some(experience), Some(patient)] => {
            config.builder.default_permissions = Some(PermissionsConfig {
                creator: parse_permit(creator.0, &creator.1)?,
                experience: parse_permit(experience.0, &experience.1)?,
                patient: parse_permit(patient.0, &patient.1)?,
            });
        }
        [None, None, None] => {}
        _ => {
            return Err(MmlError::Configuration(
                "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_* must set creator, experience and patient together"
                    .to_string(),
            ))
        }
    }

    // Output overrides
    if let Ok(val) = std::env::var("MMLGEN_OUTPUT_PRETTY") {
        config.output.pretty = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("MMLGEN_OUTPUT_DIRECTORY") {
        config.output.directory = Some(val);
    }
    if let Ok(val) = std::env::var("MMLGEN_OUTPUT_FILE_SUFFIX") {
        config.output.file_suffix = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MMLGEN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MMLGEN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MMLGEN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
