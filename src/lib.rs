// mmlgen - Simple JSON to MML clinical document builder
// Copyright (c) 2025 mmlgen Contributors
// Licensed under the MIT License

//! # mmlgen - Simple JSON to MML
//!
//! mmlgen turns a developer-friendly JSON description of a clinical encounter
//! into an MML (Medical Markup Language) document tree: patient, creator and
//! access-control boilerplate filled in, one module per clinical content item.
//!
//! ## Overview
//!
//! This library provides:
//! - **Builders** mapping "simple" records to MML fragments and modules
//! - **Assembly** of a whole composition into a document with per-module envelopes
//! - **Collect-errors** handling: a bad content item becomes a rejected slot,
//!   its siblings are still built
//! - **Formatting** of the finished tree as JSON
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Module builders and composition assembly
//! - [`adapters`] - Id minting, clock and document formatting collaborators
//! - [`domain`] - Input records, MML output records, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mmlgen::adapters::{DocumentFormatter, JsonFormatter};
//! use mmlgen::config::load_config;
//! use mmlgen::core::compose::{BuilderOptions, CompositionAssembler};
//! use mmlgen::domain::simple::Composition;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("mmlgen.toml")?;
//!     let assembler = CompositionAssembler::new(BuilderOptions::from(&config.builder));
//!
//!     let composition: Composition =
//!         serde_json::from_str(&std::fs::read_to_string("composition.json")?)?;
//!     let outcome = assembler.build(&composition)?;
//!     outcome.report.log_summary();
//!
//!     println!("{}", JsonFormatter::pretty().format(&outcome.document)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Composition-level failures (missing patient or creator) return
//! [`domain::MmlError`]. Failures of a single content item are reported in the
//! document body and in [`core::compose::BuildReport`]:
//!
//! ```rust
//! use mmlgen::core::compose::{BuilderOptions, CompositionAssembler};
//! use mmlgen::domain::simple::Composition;
//!
//! let assembler = CompositionAssembler::new(BuilderOptions::default());
//! assert!(assembler.build(&Composition::default()).is_err());
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
