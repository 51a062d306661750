//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - JSON file logging with rotation
//!
//! Log lines never carry fragment plaintext. Anything identifying a fragment
//! is a SHA-256 hash.
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//! use veil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a finished page
///
/// # Example
///
/// ```no_run
/// use veil::log_page_redacted;
///
/// log_page_redacted!(1, 24, 3, 0);
/// ```
#[macro_export]
macro_rules! log_page_redacted {
    ($page:expr, $fragments:expr, $detections:expr, $failures:expr) => {
        tracing::debug!(
            page = $page,
            fragments = $fragments,
            detections = $detections,
            failures = $failures,
            "Page redacted"
        );
    };
}

/// Log a recovered redaction failure
///
/// Takes a [`crate::redaction::RedactionFailure`]; only its hash, category
/// and location are logged.
///
/// # Example
///
/// ```no_run
/// use veil::log_redaction_failure;
/// use veil::redaction::models::{RedactionError, RedactionFailure, PiiCategory};
///
/// let error = RedactionError::Anonymizer {
///     category: PiiCategory::Email,
///     message: "boom".to_string(),
/// };
/// let failure = RedactionFailure::new(&error, "jane@example.com");
/// log_redaction_failure!(failure);
/// ```
#[macro_export]
macro_rules! log_redaction_failure {
    ($failure:expr) => {
        tracing::warn!(
            category = %$failure.category,
            fragment_hash = %$failure.fragment_hash,
            page = ?$failure.page,
            fragment = ?$failure.fragment,
            error = %$failure.message,
            "Redaction failed for category, text passed through"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::redaction::models::{PiiCategory, RedactionError, RedactionFailure};

    #[test]
    fn test_macros_expand() {
        let error = RedactionError::Matcher {
            category: PiiCategory::Ssn,
            message: "limit".to_string(),
        };
        let failure = RedactionFailure::new(&error, "123-45-6789").at(2, 5);
        log_redaction_failure!(failure);
        log_page_redacted!(2, 10, 1, 1);
        // Fields are read by reference; the failure is still usable.
        assert_eq!(failure.page, Some(2));
    }
}
