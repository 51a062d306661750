//! Document sources, render sinks, and whole-document traversal
//!
//! A [`DocumentSource`] hands out positioned text fragments one page at a
//! time. [`DocumentRedactor`] runs each fragment through the redaction engine
//! and emits the result to a [`RenderSink`], usually an [`OverlayRenderer`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use veil::document::{open_document, DocumentRedactor, OverlayRenderer};
//! use veil::redaction::{DetectorRegistry, RedactionEngine};
//!
//! # async fn example() -> veil::domain::Result<()> {
//! let source = open_document("scan.json", 1.5).await?;
//! let engine = Arc::new(RedactionEngine::new(DetectorRegistry::default_detectors()?));
//! let mut overlay = OverlayRenderer::new();
//!
//! let report = DocumentRedactor::new(engine)
//!     .redact_document(source.as_ref(), &mut overlay)
//!     .await?;
//! println!("{} substitutions", report.total_detections);
//! # Ok(())
//! # }
//! ```

pub mod json;
pub mod pipeline;
pub mod render;
pub mod text;

pub use json::JsonDocument;
pub use pipeline::DocumentRedactor;
pub use render::{OverlayRenderer, OverlaySpan, RenderSink, RenderedDocument, RenderedPage};
pub use text::PlainTextDocument;

use crate::domain::{Result, TextFragment, Viewport, VeilError};
use async_trait::async_trait;
use std::path::Path;

/// One page of extracted text
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// Page dimensions after scaling
    pub viewport: Viewport,
    /// Fragments in reading order
    pub fragments: Vec<TextFragment>,
}

/// Provider of paged, positioned text
///
/// Page numbers are 1-based. Fetching a page may suspend; everything after
/// that is synchronous.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Label used in reports and logs
    fn name(&self) -> &str;

    /// Number of pages
    fn page_count(&self) -> usize;

    /// Fetch a page
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::UnsupportedInput`] for a page number outside
    /// `1..=page_count()`.
    async fn page(&self, number: usize) -> Result<PageContent>;
}

/// Open a document by file extension
///
/// `.json` files are read as extracted text content, `.txt` files as plain
/// text. `scale` is applied to page dimensions.
///
/// # Errors
///
/// Returns [`VeilError::UnsupportedInput`] for any other extension or a file
/// that does not parse as its format, and [`VeilError::Io`] if it cannot be
/// read.
pub async fn open_document(
    path: impl AsRef<Path>,
    scale: f64,
) -> Result<Box<dyn DocumentSource>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonDocument::from_file(path, scale).await?)),
        Some("txt") => Ok(Box::new(PlainTextDocument::from_file(path, scale).await?)),
        _ => Err(VeilError::UnsupportedInput(format!(
            "{} is not a supported document (expected .json or .txt)",
            path.display()
        ))),
    }
}

pub(crate) fn page_out_of_range(name: &str, number: usize, count: usize) -> VeilError {
    VeilError::UnsupportedInput(format!(
        "{name} has {count} page(s), page {number} does not exist"
    ))
}
