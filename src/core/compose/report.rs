//! Build report
//!
//! Counts and issues of one composition build, logged after the document is
//! assembled.

use crate::domain::errors::ItemIssue;
use serde::Serialize;

/// Summary of a composition build
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Composition id, caller supplied or minted
    pub composition_uuid: String,

    /// Number of content items in the composition
    pub items_seen: usize,

    /// Number of modules placed in the body; a medication item may yield up to three
    pub modules_built: usize,

    /// Number of content items kept as rejected slots
    pub items_rejected: usize,

    /// Whether a patient module was inserted ahead of the content items
    pub patient_module_synthesized: bool,

    /// One issue per rejected item, in input order
    pub issues: Vec<ItemIssue>,
}

impl BuildReport {
    /// Create a new empty report
    pub fn new(composition_uuid: impl Into<String>, items_seen: usize) -> Self {
        Self {
            composition_uuid: composition_uuid.into(),
            items_seen,
            ..Default::default()
        }
    }

    /// Record a rejected item
    pub fn add_issue(&mut self, issue: ItemIssue) {
        self.items_rejected += 1;
        self.issues.push(issue);
    }

    /// Check if every content item was built
    pub fn is_successful(&self) -> bool {
        self.items_rejected == 0
    }

    /// Get success rate as a percentage of content items
    pub fn success_rate(&self) -> f64 {
        if self.items_seen == 0 {
            return 100.0;
        }
        let built = self.items_seen.saturating_sub(self.items_rejected);
        (built as f64 / self.items_seen as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            composition_uuid = %self.composition_uuid,
            items_seen = self.items_seen,
            modules_built = self.modules_built,
            items_rejected = self.items_rejected,
            patient_module_synthesized = self.patient_module_synthesized,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Composition built"
        );

        if !self.issues.is_empty() {
            tracing::warn!(
                rejected_count = self.issues.len(),
                "Composition built with rejected items"
            );
            for issue in &self.issues {
                tracing::warn!(
                    index = issue.index,
                    content_type = ?issue.content_type,
                    kind = ?issue.kind,
                    message = %issue.message,
                    "Rejected item"
                );
            }
        }
    }
}
