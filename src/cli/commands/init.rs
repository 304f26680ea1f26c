//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mmlgen.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing mmlgen configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match tokio::fs::write(&self.output, Self::generate_config()).await {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: mmlgen validate-config");
                println!("  3. Build a document: mmlgen build composition.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# mmlgen Configuration File
# Simple JSON to MML clinical document builder
#
# Values may reference environment variables as ${VAR_NAME}.
# Any key can also be overridden with MMLGEN_<SECTION>_<KEY>,
# for example MMLGEN_OUTPUT_DIRECTORY=./out

[application]
# trace, debug, info, warn, error
log_level = "info"

[builder]
# Insert a patient information module first when a composition has none
synthesize_patient_module = false

# Person id type written on the patient access grant
person_id_type = "dolphinUserId_2001-10-03"

# MML0007 generation purpose of every document title
generation_purpose = "record"

# Permissions for compositions without explicit access rights.
# When this section is absent the two-grant default policy is used:
# creator facility "all", experienced facilities and patient "read".
# [builder.default_permissions]
# creator = "all"
# experience = "read"
# patient = "read"

[output]
pretty = true
# Documents go to stdout when no directory is set
# directory = "./out"
file_suffix = ".mml.json"

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}
