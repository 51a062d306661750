//! Detector registry
//!
//! Ordered bindings of category to matcher, anonymizer and priority. The
//! registry is built once and then shared read-only by the engine.
//!
//! Ordering rule: generic-number must sort strictly after every other
//! category. It matches any bare digit run, so running it earlier would
//! consume SSNs, phone numbers and dates before their own detectors see them.

use super::{Matcher, PatternLibrary};
use crate::domain::{Result, VeilError};
use crate::redaction::anonymizer::{default_anonymizer, Anonymizer};
use crate::redaction::models::PiiCategory;

/// One category binding
pub struct DetectorEntry {
    /// Category this entry detects
    pub category: PiiCategory,
    /// Pattern recognizing the category
    pub matcher: Box<dyn Matcher>,
    /// Replacement producer
    pub anonymizer: Box<dyn Anonymizer>,
    /// Evaluation rank, lower runs first
    pub priority: u32,
}

impl std::fmt::Debug for DetectorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorEntry")
            .field("category", &self.category)
            .field("pattern", &self.matcher.describe())
            .field("priority", &self.priority)
            .finish()
    }
}

/// Ordered collection of detectors
#[derive(Debug, Default)]
pub struct DetectorRegistry {
    entries: Vec<DetectorEntry>,
}

impl DetectorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in pattern library and anonymizers
    pub fn default_detectors() -> Result<Self> {
        Self::from_library(&PatternLibrary::builtin()?, &[])
    }

    /// Build a registry from a pattern library, skipping `disabled` categories
    pub fn from_library(library: &PatternLibrary, disabled: &[PiiCategory]) -> Result<Self> {
        let mut registry = Self::new();
        registry.apply_library(library, disabled)?;
        Ok(registry)
    }

    /// Add or replace bindings from a library, using each category's default anonymizer
    pub fn apply_library(
        &mut self,
        library: &PatternLibrary,
        disabled: &[PiiCategory],
    ) -> Result<()> {
        // Specific categories first so a numeric entry is checked against all of them
        let (numeric, specific): (Vec<_>, Vec<_>) = library
            .patterns()
            .into_iter()
            .filter(|p| !disabled.contains(&p.category))
            .partition(|p| p.category.is_generic_number());

        for pattern in specific.into_iter().chain(numeric) {
            self.register(
                pattern.category,
                Box::new(pattern.matcher.clone()),
                default_anonymizer(pattern.category),
                pattern.priority,
            )?;
        }
        Ok(())
    }

    /// Add or replace a category's binding
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::InvalidOrdering`] if the binding would let
    /// generic-number run before (or alongside) any other category. The
    /// registry is left unchanged in that case.
    pub fn register(
        &mut self,
        category: PiiCategory,
        matcher: Box<dyn Matcher>,
        anonymizer: Box<dyn Anonymizer>,
        priority: u32,
    ) -> Result<()> {
        self.check_ordering(category, priority)?;

        self.entries.retain(|e| e.category != category);
        let position = self
            .entries
            .iter()
            .position(|e| e.priority > priority)
            .unwrap_or(self.entries.len());

        tracing::debug!(
            category = %category,
            priority,
            pattern = matcher.describe(),
            "Registered detector"
        );

        self.entries.insert(
            position,
            DetectorEntry {
                category,
                matcher,
                anonymizer,
                priority,
            },
        );
        Ok(())
    }

    /// Remove a category's binding, returning whether one existed
    pub fn remove(&mut self, category: PiiCategory) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.category != category);
        self.entries.len() != before
    }

    /// Bindings in evaluation order, generic-number last
    pub fn entries(&self) -> &[DetectorEntry] {
        &self.entries
    }

    /// Binding for a category
    pub fn get(&self, category: PiiCategory) -> Option<&DetectorEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Categories in evaluation order
    pub fn categories(&self) -> Vec<PiiCategory> {
        self.entries.iter().map(|e| e.category).collect()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_ordering(&self, category: PiiCategory, priority: u32) -> Result<()> {
        let others = self.entries.iter().filter(|e| e.category != category);

        if category.is_generic_number() {
            if let Some(blocking) = others
                .filter(|e| e.priority >= priority)
                .max_by_key(|e| e.priority)
            {
                return Err(VeilError::InvalidOrdering {
                    category: category.to_string(),
                    priority,
                    conflicting: blocking.category.to_string(),
                    conflicting_priority: blocking.priority,
                });
            }
        } else if let Some(numeric) = others
            .filter(|e| e.category.is_generic_number())
            .find(|e| e.priority <= priority)
        {
            return Err(VeilError::InvalidOrdering {
                category: numeric.category.to_string(),
                priority: numeric.priority,
                conflicting: category.to_string(),
                conflicting_priority: priority,
            });
        }
        Ok(())
    }
}
