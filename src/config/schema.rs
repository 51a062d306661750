//! Configuration schema types
//!
//! This module defines the `veil.toml` structure. Every section is optional;
//! an empty file is a valid configuration.

use crate::domain::{Result, VeilError};
use crate::redaction::RedactionConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Veil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VeilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detector and anonymizer settings
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Document loading settings
    #[serde(default)]
    pub document: DocumentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Configuration`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.application
            .validate()
            .and_then(|_| self.document.validate())
            .and_then(|_| self.logging.validate())
            .map_err(VeilError::Configuration)?;
        self.redaction.validate()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Document loading configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Factor applied to page dimensions when laying out overlays
    #[serde(default = "default_viewport_scale")]
    pub viewport_scale: f64,
}

impl DocumentConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.viewport_scale.is_finite() || self.viewport_scale <= 0.0 {
            return Err(format!(
                "document.viewport_scale must be a positive number, got {}",
                self.viewport_scale
            ));
        }
        if self.viewport_scale > 10.0 {
            return Err(format!(
                "document.viewport_scale must be <= 10, got {}",
                self.viewport_scale
            ));
        }
        Ok(())
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            viewport_scale: default_viewport_scale(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.as_os_str().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_viewport_scale() -> f64 {
    1.5
}

fn default_local_path() -> PathBuf {
    PathBuf::from("logs")
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
