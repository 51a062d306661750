//! Plain text as a single-page document

use super::{page_out_of_range, DocumentSource, PageContent};
use crate::domain::{Result, TextFragment, Viewport};
use async_trait::async_trait;
use std::path::Path;

/// US Letter in points
const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 72.0;
const FONT_SIZE: f64 = 12.0;
const LINE_HEIGHT: f64 = 14.0;
const FONT_NAME: &str = "monospace";

/// One page, one fragment per line, synthetic positions
#[derive(Debug, Clone)]
pub struct PlainTextDocument {
    name: String,
    page: PageContent,
}

impl PlainTextDocument {
    /// Read a text file
    pub async fn from_file(path: impl AsRef<Path>, scale: f64) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(Self::new(path.display().to_string(), &contents, scale))
    }

    /// Lay out text
    pub fn new(name: impl Into<String>, text: &str, scale: f64) -> Self {
        let fragments = text
            .lines()
            .enumerate()
            .map(|(line, content)| {
                let y = PAGE_HEIGHT - MARGIN - line as f64 * LINE_HEIGHT;
                TextFragment::new(content, MARGIN, y, FONT_SIZE, FONT_NAME)
            })
            .collect();

        Self {
            name: name.into(),
            page: PageContent {
                viewport: Viewport::new(PAGE_WIDTH, PAGE_HEIGHT).scaled(scale),
                fragments,
            },
        }
    }
}

#[async_trait]
impl DocumentSource for PlainTextDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        1
    }

    async fn page(&self, number: usize) -> Result<PageContent> {
        if number == 1 {
            Ok(self.page.clone())
        } else {
            Err(page_out_of_range(&self.name, number, 1))
        }
    }
}
