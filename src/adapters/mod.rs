//! Collaborators of the composition assembler
//!
//! The builders are pure. Everything that varies between runs sits behind a
//! trait here so tests can swap in fixed implementations:
//!
//! - [`ids`] - UUID minting for module and composition ids
//! - [`clock`] - the current timestamp written as the document creation date
//! - [`formatter`] - rendering a finished [`Document`] to text
//!
//! # Example
//!
//! ```rust
//! use mmlgen::adapters::{Clock, DocumentFormatter, IdMinter, JsonFormatter, RandomIdMinter, SystemClock};
//!
//! let minter = RandomIdMinter;
//! assert_eq!(minter.next_uuid().get_version_num(), 4);
//!
//! let created = SystemClock.now();
//! let formatter = JsonFormatter::compact();
//! # let _ = (created, formatter);
//! ```
//!
//! [`Document`]: crate::domain::mml::Document

pub mod clock;
pub mod formatter;
pub mod ids;

pub use clock::{format_timestamp, Clock, SystemClock, TIMESTAMP_FORMAT};
pub use formatter::{DocumentFormatter, JsonFormatter};
pub use ids::{IdMinter, RandomIdMinter};
