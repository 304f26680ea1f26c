//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for mmlgen using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// mmlgen - Simple JSON to MML clinical document builder
#[derive(Parser, Debug)]
#[command(name = "mmlgen")]
#[command(version, about, long_about = None)]
#[command(author = "mmlgen Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "mmlgen.toml", env = "MMLGEN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MMLGEN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build MML documents from composition JSON files
    Build(commands::build::BuildArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
