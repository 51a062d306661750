//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Veil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Veil - PII redaction for extracted document text
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "veil.toml", env = "VEIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact a document (.json text content or .txt)
    Redact(commands::redact::RedactArgs),

    /// Redact a single string and print it
    Text(commands::text::TextArgs),

    /// Validate configuration file and pattern library
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Execute the command, returning the process exit code
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            Commands::Redact(args) => args.execute(config_path).await,
            Commands::Text(args) => args.execute(config_path).await,
            Commands::ValidateConfig(args) => args.execute(config_path).await,
            Commands::Init(args) => args.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_redact() {
        let cli = Cli::parse_from(["veil", "redact", "scan.json", "--output", "overlay.json"]);
        assert_eq!(cli.config, "veil.toml");
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.input, PathBuf::from("scan.json"));
                assert_eq!(args.output, Some(PathBuf::from("overlay.json")));
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["veil", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["veil", "--log-level", "debug", "text", "hi"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_text_dry_run() {
        let cli = Cli::parse_from(["veil", "text", "--dry-run", "John 555-123-4567"]);
        match cli.command {
            Commands::Text(args) => {
                assert!(args.dry_run);
                assert_eq!(args.text, "John 555-123-4567");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["veil", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }

    #[test]
    fn test_redact_requires_input() {
        assert!(Cli::try_parse_from(["veil", "redact"]).is_err());
    }
}
