//! Anonymizer module
//!
//! An anonymizer turns a matched substring into its replacement. The
//! built-ins are pure apart from the two that draw from a [`RandomSource`].

pub mod builtin;
pub mod random;

pub use builtin::default_anonymizer;
pub use random::{EntropySource, RandomSource, SeededSource, SequenceSource};

use anyhow::Result;

/// Trait for anonymization implementations
pub trait Anonymizer: Send + Sync {
    /// Produce the replacement for one matched substring
    fn anonymize(&self, matched: &str, random: &dyn RandomSource) -> Result<String>;
}

impl<F> Anonymizer for F
where
    F: Fn(&str, &dyn RandomSource) -> Result<String> + Send + Sync,
{
    fn anonymize(&self, matched: &str, random: &dyn RandomSource) -> Result<String> {
        self(matched, random)
    }
}
