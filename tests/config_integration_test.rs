//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use mmlgen::config::{load_config, load_config_or_default};
use mmlgen::core::compose::BuilderOptions;
use mmlgen::domain::codes::Permit;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "MMLGEN_APPLICATION_LOG_LEVEL",
        "MMLGEN_BUILDER_SYNTHESIZE_PATIENT_MODULE",
        "MMLGEN_BUILDER_PERSON_ID_TYPE",
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_CREATOR",
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_EXPERIENCE",
        "MMLGEN_BUILDER_DEFAULT_PERMISSIONS_PATIENT",
        "MMLGEN_OUTPUT_PRETTY",
        "MMLGEN_OUTPUT_DIRECTORY",
        "MMLGEN_LOGGING_LOCAL_ROTATION",
        "TEST_MMLGEN_OUT_DIR",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[builder]
synthesize_patient_module = true
person_id_type = "local"
generation_purpose = "reportTest"

[builder.default_permissions]
creator = "all"
experience = "none"
patient = "read"

[output]
pretty = false
directory = "./out"
file_suffix = ".xml.json"

[logging]
local_enabled = true
local_path = "/tmp/mmlgen-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.builder.synthesize_patient_module);
    assert_eq!(config.builder.person_id_type, "local");
    assert_eq!(config.builder.generation_purpose, "reportTest");
    assert!(!config.output.pretty);
    assert_eq!(config.output.directory.as_deref(), Some("./out"));
    assert_eq!(config.output.file_suffix, ".xml.json");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");

    let options = BuilderOptions::from(&config.builder);
    let permits = options.default_permissions.unwrap();
    assert_eq!(permits.creator, Some(Permit::All));
    assert_eq!(permits.experience, Some(Permit::None));
    assert_eq!(permits.patient, Some(Permit::Read));
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config("[application]\nlog_level = \"warn\"\n");

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert!(!config.builder.synthesize_patient_module);
    assert_eq!(config.builder.person_id_type, "dolphinUserId_2001-10-03");
    assert!(config.builder.default_permissions.is_none());
    assert!(config.output.pretty);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_MMLGEN_OUT_DIR", "/var/mml");

    let temp_file = write_config("[output]\ndirectory = \"${TEST_MMLGEN_OUT_DIR}\"\n");
    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.output.directory.as_deref(), Some("/var/mml"));

    cleanup_env_vars();
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_MMLGEN_OUT_DIR"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("MMLGEN_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("MMLGEN_BUILDER_SYNTHESIZE_PATIENT_MODULE", "true");
    std::env::set_var("MMLGEN_OUTPUT_PRETTY", "false");
    std::env::set_var("MMLGEN_OUTPUT_DIRECTORY", "/tmp/override");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[output]
pretty = true
directory = "./out"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert!(config.builder.synthesize_patient_module);
    assert!(!config.output.pretty);
    assert_eq!(config.output.directory.as_deref(), Some("/tmp/override"));

    cleanup_env_vars();
}

#[test]
fn test_default_permissions_override_needs_all_three() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("MMLGEN_BUILDER_DEFAULT_PERMISSIONS_CREATOR", "all");

    let temp_file = write_config("");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("together"));

    std::env::set_var("MMLGEN_BUILDER_DEFAULT_PERMISSIONS_EXPERIENCE", "read");
    std::env::set_var("MMLGEN_BUILDER_DEFAULT_PERMISSIONS_PATIENT", "none");
    let config = load_config(temp_file.path()).unwrap();
    let permissions = config.builder.default_permissions.unwrap();
    assert_eq!(permissions.patient, Permit::None);

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let invalid_level = write_config("[application]\nlog_level = \"verbose\"\n");
    assert!(load_config(invalid_level.path()).is_err());

    let invalid_rotation = write_config("[logging]\nlocal_rotation = \"weekly\"\n");
    assert!(load_config(invalid_rotation.path()).is_err());

    let invalid_toml = write_config("[output\npretty = true\n");
    assert!(load_config(invalid_toml.path()).is_err());

    let invalid_permit = write_config(
        "[builder.default_permissions]\ncreator = \"owner\"\nexperience = \"read\"\npatient = \"read\"\n",
    );
    assert!(load_config(invalid_permit.path()).is_err());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("MMLGEN_LOGGING_LOCAL_ROTATION", "never");

    let dir = tempfile::tempdir().unwrap();
    let config = load_config_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.logging.local_rotation, "never");
    assert!(load_config(dir.path().join("absent.toml")).is_err());

    cleanup_env_vars();
}
