//! Document formatters

use crate::domain::mml::Document;
use crate::domain::{MmlError, Result};

/// Renders an assembled document to its wire text
pub trait DocumentFormatter {
    /// # Errors
    ///
    /// Returns a serialization error if the document cannot be rendered.
    fn format(&self, document: &Document) -> Result<String>;
}

/// JSON rendering of the MML tree
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty() -> Self {
        Self::new(true)
    }

    pub fn compact() -> Self {
        Self::new(false)
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::pretty()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        rendered.map_err(|e| MmlError::Serialization(format!("Failed to render document: {}", e)))
    }
}
