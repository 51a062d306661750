//! Redact command implementation
//!
//! Redacts a whole document and writes the overlay layout, the flat text,
//! and optionally a JSON report.

use super::prepare_engine;
use crate::document::{open_document, DocumentRedactor, OverlayRenderer};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Document to redact (.json text content or .txt)
    pub input: PathBuf,

    /// Write the overlay layout (pages and positioned spans) as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the flat redacted text; printed to stdout when neither
    /// --output nor --text is given
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Write the redaction report as JSON
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Detect PII without changing text
    #[arg(long)]
    pub dry_run: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting redact command");

        let (config, engine) = match prepare_engine(config_path, self.dry_run) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let source = match open_document(&self.input, config.document.viewport_scale).await {
            Ok(source) => source,
            Err(e) => {
                eprintln!("❌ Cannot load {}: {e}", self.input.display());
                return Ok(3);
            }
        };

        if engine.is_dry_run() {
            eprintln!("🔍 DRY RUN MODE - text will not be changed");
        }

        let redactor = DocumentRedactor::new(Arc::new(engine));
        let mut overlay = OverlayRenderer::new();
        let report = match redactor.redact_document(source.as_ref(), &mut overlay).await {
            Ok(report) => report,
            Err(e) => {
                eprintln!("❌ Redaction aborted: {e}");
                return Ok(if e.is_input_error() { 3 } else { 5 });
            }
        };

        let rendered = overlay.finish();

        if let Some(ref path) = self.output {
            std::fs::write(path, serde_json::to_string_pretty(&rendered)?)?;
            eprintln!("✅ Overlay written to {}", path.display());
        }

        match self.text {
            Some(ref path) => {
                std::fs::write(path, &rendered.text)?;
                eprintln!("✅ Text written to {}", path.display());
            }
            None if self.output.is_none() => println!("{}", rendered.text.trim_end()),
            None => {}
        }

        if let Some(ref path) = self.report {
            report.write_to_file(path)?;
            eprintln!("✅ Report written to {}", path.display());
        }

        eprint!("{}", report.format_console());

        if report.has_failures() {
            eprintln!("⚠️  Redaction completed with failures; affected text was passed through");
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(input: PathBuf) -> RedactArgs {
        RedactArgs {
            input,
            output: None,
            text: None,
            report: None,
            dry_run: false,
        }
    }

    #[tokio::test]
    async fn test_unsupported_input_exit_code() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let code = args(file.path().to_path_buf())
            .execute("nonexistent-veil.toml")
            .await
            .unwrap();
        assert_eq!(code, 3);
    }

    #[tokio::test]
    async fn test_writes_outputs() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("note.txt");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "Card 4111-1111-1111-1111").unwrap();

        let mut redact = args(input);
        redact.output = Some(dir.path().join("overlay.json"));
        redact.text = Some(dir.path().join("out.txt"));
        redact.report = Some(dir.path().join("report.json"));

        let code = redact.execute("nonexistent-veil.toml").await.unwrap();
        assert_eq!(code, 0);

        let text = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(text, "FN 4444-4444-4444-4444 ");
        let overlay = std::fs::read_to_string(dir.path().join("overlay.json")).unwrap();
        assert!(overlay.contains("\"spans\""));
        let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        assert!(report.contains("\"credit-card\": 1"));
    }
}
