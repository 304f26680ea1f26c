//! Build command implementation
//!
//! This module implements the `build` command: one composition JSON file in,
//! one MML document out.

use crate::adapters::{DocumentFormatter, JsonFormatter};
use crate::config::load_config_or_default;
use crate::core::compose::{BuildOutcome, BuilderOptions, CompositionAssembler};
use crate::domain::context::ResultExt;
use crate::domain::simple::Composition;
use crate::domain::{MmlError, Result};
use crate::log_error_with_context;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Composition JSON files to build
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory for built documents (overrides output.directory; stdout when neither is set)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Exit with 0 even when some content items were rejected
    #[arg(long)]
    pub allow_rejected: bool,
}

/// Tally of one command run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BuildTally {
    built: usize,
    with_rejections: usize,
    failed: usize,
}

impl BuildTally {
    fn exit_code(&self, allow_rejected: bool) -> i32 {
        if self.failed > 0 {
            5
        } else if self.with_rejections > 0 && !allow_rejected {
            1
        } else {
            0
        }
    }
}

impl BuildArgs {
    /// Execute the build command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(inputs = self.inputs.len(), "Starting build command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration failed to load");
                eprintln!("❌ Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let assembler = CompositionAssembler::new(BuilderOptions::from(&config.builder));
        let formatter = JsonFormatter::new(config.output.pretty && !self.compact);
        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| config.output.directory.as_ref().map(PathBuf::from));

        if let Some(dir) = &output_dir {
            tokio::fs::create_dir_all(dir).await?;
        }

        // Status lines go to stderr so documents written to stdout stay clean
        let mut tally = BuildTally::default();
        for input in &self.inputs {
            let outcome = match build_file(&assembler, input).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log_error_with_context!(&e, "Failed to build composition");
                    eprintln!("❌ {}: {e}", input.display());
                    tally.failed += 1;
                    continue;
                }
            };
            outcome.report.log_summary();

            let rendered = formatter.format(&outcome.document)?;
            match &output_dir {
                Some(dir) => {
                    let path = output_path(dir, input, &config.output.file_suffix);
                    tokio::fs::write(&path, rendered).await?;
                    eprintln!("✅ {} -> {}", input.display(), path.display());
                }
                None => println!("{rendered}"),
            }

            tally.built += 1;
            if outcome.has_rejections() {
                tally.with_rejections += 1;
                eprintln!(
                    "⚠️  {}: {} of {} content items rejected",
                    input.display(),
                    outcome.report.items_rejected,
                    outcome.report.items_seen
                );
                for issue in &outcome.report.issues {
                    eprintln!("    - item {}: {}", issue.index, issue.message);
                }
            }
        }

        eprintln!();
        eprintln!("📊 Build Summary:");
        eprintln!("  Compositions: {}", self.inputs.len());
        eprintln!("  Built: {}", tally.built);
        eprintln!("  With Rejected Items: {}", tally.with_rejections);
        eprintln!("  Failed: {}", tally.failed);

        Ok(tally.exit_code(self.allow_rejected))
    }
}

async fn build_file(assembler: &CompositionAssembler, input: &Path) -> Result<BuildOutcome> {
    let contents = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read composition file: {}", input.display()))?;
    let composition: Composition = serde_json::from_str(&contents).map_err(|e| {
        MmlError::Serialization(format!("Invalid composition {}: {}", input.display(), e))
    })?;
    assembler.build(&composition)
}

/// `<dir>/<input stem><suffix>`
fn output_path(dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "composition".to_string());
    dir.join(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_output_path_replaces_extension() {
        let path = output_path(Path::new("out"), Path::new("data/visit-01.json"), ".mml.json");
        assert_eq!(path, PathBuf::from("out/visit-01.mml.json"));
    }

    #[test_case(0, 0, false, 0)]
    #[test_case(0, 2, false, 1)]
    #[test_case(0, 2, true, 0)]
    #[test_case(1, 0, true, 5)]
    fn test_exit_code(failed: usize, with_rejections: usize, allow_rejected: bool, expected: i32) {
        let tally = BuildTally {
            built: 3,
            with_rejections,
            failed,
        };
        assert_eq!(tally.exit_code(allow_rejected), expected);
    }

    #[tokio::test]
    async fn test_build_file_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let assembler = CompositionAssembler::new(BuilderOptions::default());
        let err = build_file(&assembler, &path).await.unwrap_err();
        assert!(matches!(err, MmlError::Serialization(_)));
    }
}
