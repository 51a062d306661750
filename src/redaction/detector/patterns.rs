//! Pattern library for PII detection
//!
//! Libraries are TOML documents of `[patterns.<name>]` tables. The built-in
//! library is embedded at compile time; a user library is applied on top of
//! it and may add or replace categories.

use super::RegexMatcher;
use crate::domain::{Result, VeilError};
use crate::redaction::models::PiiCategory;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Category label; defaults to the table name
    #[serde(default)]
    pub category: Option<String>,
    /// Regex source
    pub pattern: String,
    /// Evaluation rank, lower runs first
    pub priority: u32,
    /// Backtracking step limit for patterns that use lookaround
    #[serde(default)]
    pub backtrack_limit: Option<usize>,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Library entry name
    pub name: String,
    /// PII category
    pub category: PiiCategory,
    /// Compiled matcher
    pub matcher: RegexMatcher,
    /// Evaluation rank
    pub priority: u32,
}

#[derive(Debug, Deserialize)]
struct RawLibrary {
    #[serde(default)]
    patterns: BTreeMap<String, PatternDefinition>,
}

/// Parsed and compiled pattern library
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<CompiledPattern>,
}

impl PatternLibrary {
    /// Load a pattern library from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VeilError::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse a pattern library from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawLibrary = toml::from_str(content).map_err(|e| {
            VeilError::Configuration(format!("Failed to parse pattern library TOML: {e}"))
        })?;

        let mut patterns = Vec::with_capacity(raw.patterns.len());
        for (name, def) in raw.patterns {
            let label = def.category.as_deref().unwrap_or(&name);
            let category: PiiCategory = label.parse().map_err(|_| {
                VeilError::Configuration(format!(
                    "Invalid category in pattern '{name}': {label}"
                ))
            })?;

            let compiled = match def.backtrack_limit {
                Some(0) => {
                    return Err(VeilError::Configuration(format!(
                        "Pattern '{name}' has a zero backtrack_limit"
                    )))
                }
                Some(limit) => RegexMatcher::with_backtrack_limit(&def.pattern, limit),
                None => RegexMatcher::new(&def.pattern),
            };
            let matcher = compiled.map_err(|e| {
                VeilError::Configuration(format!("Pattern '{name}' does not compile: {e}"))
            })?;

            patterns.push(CompiledPattern {
                name,
                category,
                matcher,
                priority: def.priority,
            });
        }

        Ok(Self { patterns })
    }

    /// The built-in library
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/default_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All patterns, ordered by priority
    pub fn patterns(&self) -> Vec<&CompiledPattern> {
        let mut sorted: Vec<&CompiledPattern> = self.patterns.iter().collect();
        sorted.sort_by_key(|p| p.priority);
        sorted
    }

    /// Pattern for a category, if present
    pub fn pattern_for(&self, category: PiiCategory) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.category == category)
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
