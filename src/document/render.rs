//! Render sinks
//!
//! The redactor hands every redacted fragment to a [`RenderSink`]. The
//! [`OverlayRenderer`] lays fragments out as absolutely positioned spans
//! over each page and collects the flat document text.

use crate::domain::{RedactedFragment, Result, VeilError, Viewport};
use serde::{Deserialize, Serialize};

/// Receiver of redacted pages
pub trait RenderSink: Send {
    /// Start a page
    fn begin_page(&mut self, number: usize, viewport: Viewport) -> Result<()>;

    /// Emit one fragment of the current page
    fn emit(&mut self, fragment: &RedactedFragment) -> Result<()>;

    /// Finish the current page
    fn end_page(&mut self, number: usize) -> Result<()>;
}

/// Absolutely positioned text over a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySpan {
    /// Distance from the left edge
    pub left: f64,
    /// Distance from the top edge (`height - y`)
    pub top: f64,
    /// Font size
    pub font_size: f64,
    /// Font family
    pub font_family: String,
    /// Redacted text with a trailing space
    pub text: String,
}

/// One laid-out page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// 1-based page number
    pub number: usize,
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
    /// Spans in emission order
    pub spans: Vec<OverlaySpan>,
}

/// Everything an overlay renderer produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Laid-out pages
    pub pages: Vec<RenderedPage>,
    /// All redacted fragment texts, each followed by a space
    pub text: String,
}

/// Sink producing overlay layout and the whole-document text buffer
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    document: RenderedDocument,
    current: Option<RenderedPage>,
}

impl OverlayRenderer {
    /// Create an empty renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed pages
    pub fn pages(&self) -> &[RenderedPage] {
        &self.document.pages
    }

    /// Whole-document text so far
    pub fn text(&self) -> &str {
        &self.document.text
    }

    /// Take the rendered output
    pub fn finish(self) -> RenderedDocument {
        self.document
    }
}

impl RenderSink for OverlayRenderer {
    fn begin_page(&mut self, number: usize, viewport: Viewport) -> Result<()> {
        if let Some(open) = &self.current {
            return Err(VeilError::Render(format!(
                "page {number} started before page {} ended",
                open.number
            )));
        }
        self.current = Some(RenderedPage {
            number,
            width: viewport.width,
            height: viewport.height,
            spans: Vec::new(),
        });
        Ok(())
    }

    fn emit(&mut self, fragment: &RedactedFragment) -> Result<()> {
        let page = self
            .current
            .as_mut()
            .ok_or_else(|| VeilError::Render("fragment emitted outside a page".to_string()))?;

        let text = format!("{} ", fragment.text);
        page.spans.push(OverlaySpan {
            left: fragment.x,
            top: page.height - fragment.y,
            font_size: fragment.font_size,
            font_family: fragment.font_name.clone(),
            text: text.clone(),
        });
        self.document.text.push_str(&text);
        Ok(())
    }

    fn end_page(&mut self, number: usize) -> Result<()> {
        match self.current.take() {
            Some(page) if page.number == number => {
                self.document.pages.push(page);
                Ok(())
            }
            Some(page) => {
                let open = page.number;
                self.current = Some(page);
                Err(VeilError::Render(format!(
                    "end of page {number} while page {open} is open"
                )))
            }
            None => Err(VeilError::Render(format!("page {number} was never started"))),
        }
    }
}
