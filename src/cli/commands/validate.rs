//! Validate config command implementation
//!
//! This module implements the `validate-config` command. Besides the file
//! itself it builds the detector registry, so pattern syntax and priority
//! ordering problems are reported too.

use crate::config::load_config;
use crate::redaction::RedactionEngine;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let engine = match RedactionEngine::from_config(&config.redaction) {
            Ok(engine) => {
                println!("✅ Detectors are valid");
                engine
            }
            Err(e) => {
                println!("❌ Detector configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.redaction.dry_run);
        println!(
            "  Pattern Library: {}",
            config
                .redaction
                .pattern_library
                .as_ref()
                .map_or("(built-in)".to_string(), |p| p.display().to_string())
        );
        println!(
            "  Seed: {}",
            config
                .redaction
                .seed
                .map_or("(entropy)".to_string(), |s| s.to_string())
        );
        println!("  Viewport Scale: {}", config.document.viewport_scale);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        println!("Detector Order:");
        for entry in engine.registry().entries() {
            println!(
                "  {:>5}  {:24} {}",
                entry.priority,
                entry.category.as_str(),
                entry.matcher.describe()
            );
        }
        println!();
        Ok(0)
    }
}
