//! Configuration management for Veil.
//!
//! Veil reads an optional `veil.toml`. Every section and key has a default,
//! so the file only needs the values being changed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//! println!("Viewport scale: {}", config.document.viewport_scale);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`crate::redaction::RedactionConfig`] - Pattern library, seed, dry-run, disabled categories
//! - [`DocumentConfig`] - Viewport scale
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [redaction]
//! pattern_library = "patterns/hospital.toml"
//! seed = ${VEIL_SEED}
//! disabled_categories = ["street-address"]
//!
//! [document]
//! viewport_scale = 1.5
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing. After parsing,
//! `VEIL_<SECTION>_<KEY>` variables override individual values:
//!
//! ```bash
//! export VEIL_REDACTION_DRY_RUN=true
//! export VEIL_REDACTION_DISABLED_CATEGORIES="person-name,street-address"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{ApplicationConfig, DocumentConfig, LoggingConfig, VeilConfig};
