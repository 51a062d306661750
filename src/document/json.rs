//! Extracted text content in JSON form
//!
//! The accepted shape is what PDF text extractors emit per page:
//!
//! ```json
//! { "pages": [ { "width": 612, "height": 792,
//!     "items": [ { "str": "Jane Doe", "transform": [12, 0, 0, 12, 72, 700],
//!                  "fontName": "g_d0_f1" } ] } ] }
//! ```
//!
//! `transform[0]` is the font size and `transform[4..6]` the origin.

use super::{page_out_of_range, DocumentSource, PageContent};
use crate::domain::{Result, TextFragment, VeilError, Viewport};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDocument {
    pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    width: f64,
    height: f64,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(rename = "str")]
    text: String,
    transform: [f64; 6],
    #[serde(default)]
    font_name: String,
}

impl From<RawItem> for TextFragment {
    fn from(item: RawItem) -> Self {
        let [font_size, _, _, _, x, y] = item.transform;
        TextFragment::new(item.text, x, y, font_size, item.font_name)
    }
}

/// Document loaded from extracted JSON text content
#[derive(Debug, Clone)]
pub struct JsonDocument {
    name: String,
    pages: Vec<PageContent>,
}

impl JsonDocument {
    /// Read and parse a file
    ///
    /// # Errors
    ///
    /// [`VeilError::Io`] if the file cannot be read,
    /// [`VeilError::UnsupportedInput`] if it is not a text-content document.
    pub async fn from_file(path: impl AsRef<Path>, scale: f64) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        Self::parse(path.display().to_string(), &contents, scale)
    }

    /// Parse JSON text
    pub fn parse(name: impl Into<String>, json: &str, scale: f64) -> Result<Self> {
        let name = name.into();
        let raw: RawDocument = serde_json::from_str(json).map_err(|e| {
            VeilError::UnsupportedInput(format!("{name} is not a text-content document: {e}"))
        })?;

        let pages = raw
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                if !(page.width > 0.0 && page.height > 0.0) {
                    return Err(VeilError::UnsupportedInput(format!(
                        "{name} page {} has invalid dimensions {}x{}",
                        index + 1,
                        page.width,
                        page.height
                    )));
                }
                Ok(PageContent {
                    viewport: Viewport::new(page.width, page.height).scaled(scale),
                    fragments: page.items.into_iter().map(TextFragment::from).collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(document = %name, pages = pages.len(), "Loaded JSON document");

        Ok(Self { name, pages })
    }
}

#[async_trait]
impl DocumentSource for JsonDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page(&self, number: usize) -> Result<PageContent> {
        number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .cloned()
            .ok_or_else(|| page_out_of_range(&self.name, number, self.pages.len()))
    }
}
