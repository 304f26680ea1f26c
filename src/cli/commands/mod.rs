//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod build;
pub mod init;
pub mod validate;
