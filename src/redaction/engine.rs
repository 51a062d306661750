//! Main redaction engine
//!
//! This module provides the [`RedactionEngine`] that runs a
//! [`DetectorRegistry`] over text and substitutes every match with its
//! category's anonymizer output.
//!
//! # Algorithm
//!
//! Categories run one at a time, in registry order, over the whole
//! (progressively rewritten) text; generic-number always runs last. Every
//! substituted span becomes protected: later categories still see it as
//! context for word boundaries and lookaround, but a match overlapping a
//! protected span is discarded and searching resumes after that span. The
//! first category to claim a region therefore wins it.
//!
//! # Failure handling
//!
//! A matcher error or anonymizer error aborts only that category on that
//! text. The text is left as the previous categories produced it, a
//! [`RedactionFailure`] is recorded and the remaining categories still run.
//!
//! # Examples
//!
//! ```
//! use veil::redaction::{DetectorRegistry, RedactionEngine};
//!
//! # fn example() -> veil::domain::Result<()> {
//! let engine = RedactionEngine::new(DetectorRegistry::default_detectors()?);
//! let redacted = engine.redact("John Smith SSN: 123-45-6789 called 555-123-4567");
//! assert_eq!(redacted, "FN LN SSN: 999-99-9999 called 555-555-5555");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::domain::{RedactedFragment, Result, TextFragment};
use crate::redaction::{
    anonymizer::{EntropySource, RandomSource, SeededSource},
    config::RedactionConfig,
    detector::{DetectorEntry, DetectorRegistry, Matcher, PatternLibrary},
    models::{hash_value, Detection, RedactionError, RedactionFailure, RedactionOutcome},
};
use std::ops::Range;
use std::sync::Arc;

/// Main redaction engine
///
/// # Thread Safety
///
/// The registry is shared read-only behind an `Arc` and the random source
/// is `Send + Sync`, so one engine can redact fragments from many tasks.
pub struct RedactionEngine {
    registry: Arc<DetectorRegistry>,
    random: Arc<dyn RandomSource>,
    dry_run: bool,
}

impl RedactionEngine {
    /// Create an engine over a registry, drawing randomness from entropy
    pub fn new(registry: DetectorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            random: Arc::new(EntropySource),
            dry_run: false,
        }
    }

    /// Create an engine from configuration
    ///
    /// Starts from the built-in pattern library, applies the configured
    /// library on top, and drops disabled categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the pattern library
    /// cannot be loaded, or its priorities violate the ordering rule.
    pub fn from_config(config: &RedactionConfig) -> Result<Self> {
        config.validate()?;

        let disabled = config.disabled_categories.as_slice();
        let mut registry =
            DetectorRegistry::from_library(&PatternLibrary::builtin()?, disabled)?;
        if let Some(ref path) = config.pattern_library {
            let library = PatternLibrary::from_file(path)?;
            registry.apply_library(&library, disabled)?;
        }

        let random: Arc<dyn RandomSource> = match config.seed {
            Some(seed) => Arc::new(SeededSource::new(seed)),
            None => Arc::new(EntropySource),
        };

        tracing::info!(
            categories = registry.len(),
            dry_run = config.dry_run,
            seeded = config.seed.is_some(),
            "Redaction engine ready"
        );

        Ok(Self {
            registry: Arc::new(registry),
            random,
            dry_run: config.dry_run,
        })
    }

    /// Replace the random source
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Detect without rewriting text
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Registry in use
    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Redact text, returning only the redacted string
    pub fn redact(&self, text: &str) -> String {
        self.redact_detailed(text).text
    }

    /// Redact text, returning detections and failures alongside the result
    pub fn redact_detailed(&self, text: &str) -> RedactionOutcome {
        let mut working = WorkingText::new(text);
        let mut detections = Vec::new();
        let mut failures = Vec::new();

        let (numeric, specific): (Vec<&DetectorEntry>, Vec<&DetectorEntry>) = self
            .registry
            .entries()
            .iter()
            .partition(|e| e.category.is_generic_number());

        for entry in specific.into_iter().chain(numeric) {
            match working.apply(entry, self.random.as_ref()) {
                Ok(found) => detections.extend(found),
                Err(error) => {
                    let failure = RedactionFailure::new(&error, text);
                    crate::log_redaction_failure!(failure);
                    failures.push(failure);
                }
            }
        }

        RedactionOutcome {
            text: if self.dry_run {
                text.to_string()
            } else {
                working.text
            },
            detections,
            failures,
        }
    }

    /// Redact one positioned fragment
    pub fn redact_fragment(
        &self,
        fragment: &TextFragment,
    ) -> (RedactedFragment, RedactionOutcome) {
        let outcome = self.redact_detailed(&fragment.text);
        (fragment.with_redacted_text(outcome.text.clone()), outcome)
    }
}

/// Text under redaction plus the spans already substituted
struct WorkingText {
    text: String,
    /// Sorted, non-overlapping byte ranges into `text`
    protected: Vec<Range<usize>>,
}

impl WorkingText {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            protected: Vec::new(),
        }
    }

    /// Run one category; on error the text is left untouched
    fn apply(
        &mut self,
        entry: &DetectorEntry,
        random: &dyn RandomSource,
    ) -> std::result::Result<Vec<Detection>, RedactionError> {
        let spans = self
            .find_unprotected(entry.matcher.as_ref())
            .map_err(|e| RedactionError::Matcher {
                category: entry.category,
                message: e.to_string(),
            })?;
        if spans.is_empty() {
            return Ok(Vec::new());
        }

        let mut replacements = Vec::with_capacity(spans.len());
        let mut detections = Vec::with_capacity(spans.len());
        for span in spans {
            let original = &self.text[span.clone()];
            let replacement = entry
                .anonymizer
                .anonymize(original, random)
                .map_err(|e| RedactionError::Anonymizer {
                    category: entry.category,
                    message: e.to_string(),
                })?;
            detections.push(Detection {
                category: entry.category,
                value_hash: hash_value(original),
                replacement: replacement.clone(),
            });
            replacements.push((span, replacement));
        }

        self.splice(replacements);
        Ok(detections)
    }

    /// Leftmost-first, non-overlapping matches that avoid protected spans
    ///
    /// A match that runs into a protected span is retried against the text
    /// cut off at that span, so a shorter match ending before it is still
    /// found. Only when nothing fits does the search resume past the span.
    fn find_unprotected(&self, matcher: &dyn Matcher) -> anyhow::Result<Vec<Range<usize>>> {
        let text = self.text.as_str();
        let mut spans = Vec::new();
        let mut pos = 0;
        let mut cutoff: Option<Range<usize>> = None;

        while pos <= text.len() {
            let haystack = cutoff.as_ref().map_or(text, |blocked| &text[..blocked.start]);
            let found = if pos <= haystack.len() {
                matcher.find_at(haystack, pos)?
            } else {
                None
            };

            let Some(found) = found else {
                match cutoff.take() {
                    Some(blocked) => {
                        pos = blocked.end;
                        continue;
                    }
                    None => break,
                }
            };

            if found.is_empty() {
                pos = next_boundary(text, found.end);
                continue;
            }

            if let Some(blocked) = self
                .protected
                .iter()
                .find(|p| p.start < found.end && found.start < p.end)
            {
                let narrower = cutoff.as_ref().map_or(true, |c| blocked.start < c.start);
                if blocked.start > found.start && narrower {
                    cutoff = Some(blocked.clone());
                } else {
                    pos = ceil_boundary(text, blocked.end.max(found.start + 1));
                    cutoff = None;
                }
                continue;
            }

            pos = found.end;
            spans.push(found);
        }

        Ok(spans)
    }

    /// Rewrite the text with `replacements` (sorted, disjoint from protected spans)
    fn splice(&mut self, replacements: Vec<(Range<usize>, String)>) {
        let mut events: Vec<(Range<usize>, Option<String>)> = self
            .protected
            .drain(..)
            .map(|range| (range, None))
            .chain(
                replacements
                    .into_iter()
                    .map(|(range, text)| (range, Some(text))),
            )
            .collect();
        events.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.text.len());
        let mut protected = Vec::with_capacity(events.len());
        let mut cursor = 0;

        for (range, replacement) in events {
            out.push_str(&self.text[cursor..range.start]);
            let start = out.len();
            match replacement {
                Some(text) => out.push_str(&text),
                None => out.push_str(&self.text[range.clone()]),
            }
            protected.push(start..out.len());
            cursor = range.end;
        }
        out.push_str(&self.text[cursor..]);

        self.text = out;
        self.protected = protected;
    }
}

/// Byte offset just past the character starting at `pos`
fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Smallest char boundary at or after `pos`
fn ceil_boundary(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}
