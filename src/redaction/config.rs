//! Redaction configuration

use crate::domain::{Result, VeilError};
use crate::redaction::models::PiiCategory;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for building a [`crate::redaction::RedactionEngine`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Dry-run mode (detect but don't rewrite text)
    #[serde(default)]
    pub dry_run: bool,

    /// Path to a pattern library TOML file applied over the built-ins
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Seed for reproducible random replacements
    #[serde(default)]
    pub seed: Option<u64>,

    /// Categories that are never registered
    #[serde(default)]
    pub disabled_categories: Vec<PiiCategory>,
}

impl RedactionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(VeilError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(VeilError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        if self.disabled_categories.len() >= PiiCategory::ALL.len() {
            return Err(VeilError::Configuration(
                "disabled_categories disables every category".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_REDACTION_DRY_RUN") {
            self.dry_run = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_REDACTION_DRY_RUN value: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("VEIL_REDACTION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("VEIL_REDACTION_SEED") {
            self.seed = Some(val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_REDACTION_SEED value: {val}"))
            })?);
        }

        if let Ok(val) = std::env::var("VEIL_REDACTION_DISABLED_CATEGORIES") {
            self.disabled_categories = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<PiiCategory>())
                .collect::<Result<Vec<PiiCategory>>>()?;
        }

        Ok(())
    }
}
