//! Redaction data models

pub mod category;
pub mod outcome;

pub use category::PiiCategory;
pub use outcome::{hash_value, Detection, RedactionError, RedactionFailure, RedactionOutcome};
