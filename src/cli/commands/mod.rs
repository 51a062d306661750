//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod redact;
pub mod text;
pub mod validate;

use crate::config::{load_config_or_default, VeilConfig};
use crate::redaction::RedactionEngine;

/// Load configuration and build an engine, printing the problem on failure
///
/// Returns `Err(2)` (the configuration exit code) when either step fails.
pub(crate) fn prepare_engine(
    config_path: &str,
    dry_run: bool,
) -> std::result::Result<(VeilConfig, RedactionEngine), i32> {
    let mut config = load_config_or_default(config_path).map_err(|e| {
        eprintln!("❌ Failed to load configuration: {e}");
        2
    })?;

    if dry_run {
        tracing::info!("Enabling dry-run mode from CLI");
        config.redaction.dry_run = true;
    }

    let engine = RedactionEngine::from_config(&config.redaction).map_err(|e| {
        eprintln!("❌ Failed to build detectors: {e}");
        2
    })?;

    Ok((config, engine))
}
