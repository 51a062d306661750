//! Domain models and types for Veil.
//!
//! The domain layer provides:
//! - **Error types** ([`VeilError`])
//! - **Result type alias** ([`Result`])
//! - **Layout value types** ([`TextFragment`], [`RedactedFragment`], [`Viewport`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, VeilError>`]:
//!
//! ```rust,no_run
//! use veil::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = veil::config::load_config("veil.toml")?;
//!     println!("log level: {}", config.application.log_level);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod fragment;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VeilError;
pub use fragment::{RedactedFragment, TextFragment, Viewport};
pub use result::Result;
