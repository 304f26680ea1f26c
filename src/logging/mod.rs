//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - human-readable console output
//! - optional JSON log files with daily or hourly rotation
//! - `RUST_LOG` overrides the configured level
//!
//! # Example
//!
//! ```no_run
//! use mmlgen::logging::init_logging;
//! use mmlgen::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a composition build
///
/// # Example
///
/// ```no_run
/// use mmlgen::log_build_start;
///
/// log_build_start!("6c5e7b9a-3d1f-4a2b-9c8d-7e6f5a4b3c2d", 4);
/// ```
#[macro_export]
macro_rules! log_build_start {
    ($composition_uuid:expr, $item_count:expr) => {
        tracing::info!(
            composition_uuid = %$composition_uuid,
            item_count = $item_count,
            "Building composition"
        );
    };
}

/// Log one module added to the document body
///
/// # Example
///
/// ```no_run
/// use mmlgen::log_module_built;
/// use mmlgen::domain::ContentType;
///
/// log_module_built!(ContentType::Medication, "0c4b1e9a-5f2d-4c3b-8a7e-6d5c4b3a2f1e");
/// ```
#[macro_export]
macro_rules! log_module_built {
    ($content_type:expr, $uid:expr) => {
        tracing::debug!(
            content_type = %$content_type,
            module_uid = %$uid,
            "Module built"
        );
    };
}

/// Log a content item that was rejected
///
/// # Example
///
/// ```no_run
/// use mmlgen::log_item_rejected;
/// use mmlgen::domain::BuildError;
///
/// let error = BuildError::missing("PrescriptionModule", "dose");
/// log_item_rejected!(2, Some("Medication"), &error);
/// ```
#[macro_export]
macro_rules! log_item_rejected {
    ($index:expr, $content_type:expr, $error:expr) => {
        tracing::warn!(
            index = $index,
            content_type = ?$content_type,
            error = %$error,
            "Content item rejected"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mmlgen::log_error_with_context;
/// use mmlgen::domain::MmlError;
///
/// let error = MmlError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
