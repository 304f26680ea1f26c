// mmlgen - Simple JSON to MML clinical document builder
// Copyright (c) 2025 mmlgen Contributors
// Licensed under the MIT License

use mmlgen::cli::{Cli, Commands};
use mmlgen::config::{load_config_or_default, MmlgenConfig};
use mmlgen::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // A broken config still gets console logging; the command reports the error
    let config = load_config_or_default(&cli.config).unwrap_or_else(|_| MmlgenConfig::default());
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let logging_guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "mmlgen - Simple JSON to MML clinical document builder"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(logging_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Build(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
