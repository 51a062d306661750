//! Domain error types
//!
//! This module defines the error hierarchy for Veil. Errors that abort an
//! operation live in [`VeilError`]; per-fragment problems that the engine
//! recovers from are reported as diagnostics instead (see
//! [`crate::redaction::models::RedactionFailure`]).

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The generic-number detector was ordered before a specific category
    #[error(
        "Invalid detector ordering: {category} (priority {priority}) must sort after \
         {conflicting} (priority {conflicting_priority})"
    )]
    InvalidOrdering {
        /// Category being registered
        category: String,
        /// Priority requested for it
        priority: u32,
        /// Category it conflicts with
        conflicting: String,
        /// Priority of the conflicting category
        conflicting_priority: u32,
    },

    /// The input is not a loadable document
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// A pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// A render sink rejected output
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VeilError {
    /// Whether this error was caused by the caller's input rather than configuration
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnsupportedInput(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
