//! Core logic of mmlgen.
//!
//! # Modules
//!
//! - [`builder`] - Free functions mapping simple records to MML fragments and modules
//! - [`compose`] - The composition assembler and its build report
//!
//! Builders never mint ids or read the clock. The assembler owns both through
//! the collaborators in [`crate::adapters`].

pub mod builder;
pub mod compose;
