//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.
//! Per-rule problems never abort an export; they are collected here and
//! turned into the diagnostic text returned to the caller.

use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of molecule types declared
    pub molecule_types_exported: usize,

    /// Number of reaction rules written
    pub rules_exported: usize,

    /// Number of reaction rules left out because of an error
    pub rules_skipped: usize,

    /// Number of compartments declared (default compartment excluded)
    pub compartments_exported: usize,

    /// Duration of the export
    pub duration: Duration,

    /// Recoverable errors encountered during export
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            molecule_types_exported: 0,
            rules_exported: 0,
            rules_skipped: 0,
            compartments_exported: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Check if the export was clean (nothing skipped)
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// Diagnostic text for the caller, one error message per line
    ///
    /// An empty string means the export was complete.
    pub fn error_text(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            molecule_types = self.molecule_types_exported,
            rules = self.rules_exported,
            rules_skipped = self.rules_skipped,
            compartments = self.compartments_exported,
            duration_ms = self.duration.as_millis(),
            "BNGL export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "BNGL export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_kind = ?error.kind,
                    message = %error.message,
                    context = ?error.context,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of recoverable export error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorKind {
    /// The rule is valid but the target language cannot express it
    UnsupportedReaction,
    /// The rule has no known molecularity class
    UnexpectedReaction,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    pub kind: ExportErrorKind,

    /// Human readable message, includes the rendered rule
    pub message: String,

    /// Optional context (e.g. rule index)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(kind: ExportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
