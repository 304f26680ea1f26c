//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the mmlgen configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after applying overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Synthesize Patient Module: {}",
            config.builder.synthesize_patient_module
        );
        println!("  Person Id Type: {}", config.builder.person_id_type);
        println!("  Generation Purpose: {}", config.builder.generation_purpose);
        match &config.builder.default_permissions {
            Some(p) => println!(
                "  Default Permissions: creator={}, experience={}, patient={}",
                p.creator, p.experience, p.patient
            ),
            None => println!("  Default Permissions: default policy"),
        }
        println!(
            "  Output: {}",
            config.output.directory.as_deref().unwrap_or("stdout")
        );
        println!("  Pretty JSON: {}", config.output.pretty);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_config_is_configuration_error() {
        let args = ValidateArgs {};
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
