//! PII detection module
//!
//! Provides the [`Matcher`] interface, the regex-backed implementation, the
//! pattern library and the ordered [`DetectorRegistry`].

pub mod patterns;
pub mod regex;
pub mod registry;

pub use self::regex::RegexMatcher;
pub use patterns::PatternLibrary;
pub use registry::{DetectorEntry, DetectorRegistry};

use anyhow::Result;
use std::ops::Range;

/// Trait for PII matchers
pub trait Matcher: Send + Sync {
    /// Find the leftmost match beginning at or after byte offset `start`
    ///
    /// Text before `start` remains visible as context (word boundaries,
    /// lookbehind), it just cannot be part of the match.
    fn find_at(&self, text: &str, start: usize) -> Result<Option<Range<usize>>>;

    /// Pattern source, for diagnostics
    fn describe(&self) -> &str;
}
