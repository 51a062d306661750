//! Redaction results and diagnostics

use super::PiiCategory;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Error raised by a matcher or anonymizer while processing one fragment
///
/// These never escape the engine; they are converted into
/// [`RedactionFailure`] diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RedactionError {
    /// Pattern execution failed (e.g. backtracking limit exceeded)
    #[error("matcher for {category} failed: {message}")]
    Matcher {
        /// Category whose matcher failed
        category: PiiCategory,
        /// Underlying message
        message: String,
    },

    /// Anonymizer could not produce a replacement
    #[error("anonymizer for {category} failed: {message}")]
    Anonymizer {
        /// Category whose anonymizer failed
        category: PiiCategory,
        /// Underlying message
        message: String,
    },
}

impl RedactionError {
    /// Category the error belongs to
    pub fn category(&self) -> PiiCategory {
        match self {
            Self::Matcher { category, .. } | Self::Anonymizer { category, .. } => *category,
        }
    }
}

/// One substituted span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Category that matched
    pub category: PiiCategory,
    /// SHA-256 of the original value (never the plaintext)
    pub value_hash: String,
    /// Replacement written into the text
    pub replacement: String,
}

/// Diagnostic for a category that could not be applied to a fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionFailure {
    /// Category that failed
    pub category: PiiCategory,
    /// 1-based page number, when known
    pub page: Option<usize>,
    /// 0-based fragment index within the page, when known
    pub fragment: Option<usize>,
    /// SHA-256 of the fragment text
    pub fragment_hash: String,
    /// Error message
    pub message: String,
}

impl RedactionFailure {
    /// Build a diagnostic from an engine error and the fragment it hit
    pub fn new(error: &RedactionError, fragment_text: &str) -> Self {
        Self {
            category: error.category(),
            page: None,
            fragment: None,
            fragment_hash: hash_value(fragment_text),
            message: error.to_string(),
        }
    }

    /// Attach the page/fragment location
    pub fn at(mut self, page: usize, fragment: usize) -> Self {
        self.page = Some(page);
        self.fragment = Some(fragment);
        self
    }
}

/// Result of redacting one piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionOutcome {
    /// Redacted text (the input unchanged in dry-run mode)
    pub text: String,
    /// Substitutions made, in evaluation order
    pub detections: Vec<Detection>,
    /// Categories skipped because they failed
    pub failures: Vec<RedactionFailure>,
}

impl RedactionOutcome {
    /// Whether any category failed on this text
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of detections for a category
    pub fn count(&self, category: PiiCategory) -> usize {
        self.detections
            .iter()
            .filter(|d| d.category == category)
            .count()
    }
}

/// Hash a value using SHA-256
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
