// Veil - PII redaction for extracted document text

//! # Veil - PII redaction for extracted document text
//!
//! Veil finds personally identifiable information in text pulled out of a
//! document and replaces it with format-preserving placeholders, keeping each
//! fragment's position so the result can be laid back over the page.
//!
//! ## Overview
//!
//! - **Detect** ten PII categories with an ordered table of regular expressions
//! - **Anonymize** each match with a category-specific replacement
//! - **Traverse** documents page by page, tolerating per-fragment failures
//! - **Render** redacted fragments as positioned overlay spans plus flat text
//!
//! Detection is deterministic pattern matching. It is best effort and makes
//! no claim to find every occurrence of PII.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Detector registry, anonymizers, engine, reports
//! - [`document`] - Document sources, render sinks, traversal
//! - [`domain`] - Error types and positioned text values
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::redaction::{DetectorRegistry, RedactionEngine};
//!
//! # fn main() -> veil::domain::Result<()> {
//! let engine = RedactionEngine::new(DetectorRegistry::default_detectors()?);
//! assert_eq!(
//!     engine.redact("John Smith SSN: 123-45-6789 called 555-123-4567"),
//!     "FN LN SSN: 999-99-9999 called 555-555-5555"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Detector Order
//!
//! Categories run one after another over the whole text, most specific
//! first. A substituted span is never matched again, and generic-number
//! always runs last so it cannot eat digits that belong to a phone number,
//! SSN or date. Registering it any earlier fails with
//! [`domain::VeilError::InvalidOrdering`].
//!
//! ## Reproducible Output
//!
//! Email and MRN placeholders draw random numbers. Inject a
//! [`redaction::anonymizer::RandomSource`] (or set `redaction.seed`) to pin
//! them:
//!
//! ```rust
//! use std::sync::Arc;
//! use veil::redaction::anonymizer::SequenceSource;
//! use veil::redaction::{DetectorRegistry, RedactionEngine};
//!
//! # fn main() -> veil::domain::Result<()> {
//! let engine = RedactionEngine::new(DetectorRegistry::default_detectors()?)
//!     .with_random_source(Arc::new(SequenceSource::new(vec![17])));
//! assert_eq!(engine.redact("jane.doe@example.com"), "anonymous17@example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Configuration and input problems are [`domain::VeilError`]s. A category
//! that fails on one fragment is not an error: the engine records a
//! [`redaction::RedactionFailure`] (with a hash of the fragment, never its
//! text) and carries on.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod logging;
pub mod redaction;
