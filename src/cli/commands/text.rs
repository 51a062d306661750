//! Text command implementation
//!
//! Redacts a single string given on the command line.

use super::prepare_engine;
use clap::Args;

/// Arguments for the text command
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to redact
    pub text: String,

    /// Detect PII without changing text
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full outcome (detections with hashed values, failures) as JSON
    #[arg(long)]
    pub json: bool,
}

impl TextArgs {
    /// Execute the text command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, engine) = match prepare_engine(config_path, self.dry_run) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let outcome = engine.redact_detailed(&self.text);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}", outcome.text);
        }

        if outcome.has_failures() {
            for failure in &outcome.failures {
                eprintln!("⚠️  {}", failure.message);
            }
            return Ok(1);
        }
        Ok(0)
    }
}
