//! Redaction module for Veil
//!
//! This module provides PII detection and substitution for extracted
//! document text. Detection is a deterministic, regular-expression-based
//! pass; there is no statistical model.
//!
//! # Architecture
//!
//! The redaction pipeline consists of:
//! - **Detection**: an ordered [`DetectorRegistry`] of category matchers
//! - **Anonymization**: per-category replacement producers
//! - **Engine**: category-by-category substitution with span protection
//! - **Reporting**: per-document statistics and failure diagnostics
//!
//! # Usage
//!
//! ```rust
//! use veil::redaction::{DetectorRegistry, RedactionEngine};
//!
//! let engine = RedactionEngine::new(DetectorRegistry::default_detectors().unwrap());
//! assert_eq!(engine.redact("card 4111-1111-1111-1111"), "card 4444-4444-4444-4444");
//! ```

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod report;

// Re-export main types
pub use config::RedactionConfig;
pub use detector::{DetectorRegistry, PatternLibrary};
pub use engine::RedactionEngine;
pub use models::{PiiCategory, RedactionFailure, RedactionOutcome};
pub use report::DocumentReport;
