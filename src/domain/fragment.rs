//! Positioned text fragments
//!
//! A [`TextFragment`] is the unit of text a document source hands over: the
//! raw string plus where and how it was drawn on the page. Redaction turns it
//! into a [`RedactedFragment`] carrying the same layout metadata.

use serde::{Deserialize, Serialize};

/// Page dimensions in layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// Raw positioned text as produced by document parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    /// Extracted text
    pub text: String,
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset, measured from the bottom of the page
    pub y: f64,
    /// Font size
    pub font_size: f64,
    /// Font identifier
    pub font_name: String,
}

impl TextFragment {
    /// Create a fragment
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        font_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            font_name: font_name.into(),
        }
    }

    /// Produce the redacted counterpart, keeping layout metadata
    pub fn with_redacted_text(&self, text: String) -> RedactedFragment {
        RedactedFragment {
            text,
            x: self.x,
            y: self.y,
            font_size: self.font_size,
            font_name: self.font_name.clone(),
        }
    }
}

/// Fragment after redaction; same metadata, transformed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedFragment {
    /// Redacted text
    pub text: String,
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset, measured from the bottom of the page
    pub y: f64,
    /// Font size
    pub font_size: f64,
    /// Font identifier
    pub font_name: String,
}
