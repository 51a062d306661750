//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Veil configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: veil validate-config");
                println!("  3. Redact a document: veil redact scan.json --output overlay.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Veil Configuration File

[application]
log_level = "info"

[redaction]
dry_run = false
disabled_categories = []

[document]
viewport_scale = 1.5

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Veil Configuration File
# PII redaction for extracted document text
#
# Every key is optional. ${VAR_NAME} placeholders are replaced with
# environment variables, and VEIL_<SECTION>_<KEY> variables override values
# after parsing (for example VEIL_REDACTION_DRY_RUN=true).

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Redaction
# ============================================================================
[redaction]
# Detect PII but leave text unchanged
dry_run = false

# Extra or replacement patterns, applied over the built-in table.
# Entries look like:
#   [patterns.employee_id]
#   category = "medical-record-number"
#   pattern = '\bEMP-\d{6}\b'
#   priority = 25
#   backtrack_limit = 1000000   # optional, for lookaround patterns
# generic-number must keep the highest priority.
# pattern_library = "patterns/custom.toml"

# Seed for reproducible email/MRN placeholders (omit for fresh randomness)
# seed = 42

# Categories to skip entirely:
#   generic-number, ssn, phone-number, email, date-of-birth,
#   drivers-license, credit-card, medical-record-number, person-name,
#   street-address
disabled_categories = []

# ============================================================================
# Document Loading
# ============================================================================
[document]
# Factor applied to page width/height for overlay layout
viewport_scale = 1.5

# ============================================================================
# Logging
# ============================================================================
[logging]
# Write JSON logs to files in addition to the console
local_enabled = false

# Directory for log files
local_path = "logs"

# Rotation strategy (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
