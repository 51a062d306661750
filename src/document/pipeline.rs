//! Whole-document redaction

use super::{DocumentSource, RenderSink};
use crate::domain::Result;
use crate::redaction::{DocumentReport, RedactionEngine};
use std::sync::Arc;
use std::time::Instant;

/// Drives a [`RedactionEngine`] over every page of a document
#[derive(Clone)]
pub struct DocumentRedactor {
    engine: Arc<RedactionEngine>,
}

impl DocumentRedactor {
    /// Create a redactor sharing `engine`
    pub fn new(engine: Arc<RedactionEngine>) -> Self {
        Self { engine }
    }

    /// Engine in use
    pub fn engine(&self) -> &RedactionEngine {
        &self.engine
    }

    /// Redact every page of `source` into `sink`
    ///
    /// Pages are fetched in order. Each fragment is redacted and emitted
    /// before the next one is looked at. A category that fails on a fragment
    /// is recorded in the report and traversal continues.
    ///
    /// # Errors
    ///
    /// Returns an error if a page cannot be fetched or the sink rejects
    /// output. Redaction failures are never errors here.
    pub async fn redact_document(
        &self,
        source: &dyn DocumentSource,
        sink: &mut dyn RenderSink,
    ) -> Result<DocumentReport> {
        let start = Instant::now();
        let mut report = DocumentReport::new(source.name(), self.engine.is_dry_run());

        tracing::info!(
            document = %source.name(),
            pages = source.page_count(),
            dry_run = self.engine.is_dry_run(),
            "Redacting document"
        );

        for number in 1..=source.page_count() {
            let page = source.page(number).await?;
            report.add_page();
            sink.begin_page(number, page.viewport)?;

            let mut detections = 0;
            let mut failures = 0;
            for (index, fragment) in page.fragments.iter().enumerate() {
                let (redacted, outcome) = self.engine.redact_fragment(fragment);
                detections += outcome.detections.len();
                failures += outcome.failures.len();
                report.add_fragment(&fragment.text, &outcome, number, index);
                sink.emit(&redacted)?;
            }

            sink.end_page(number)?;
            crate::log_page_redacted!(number, page.fragments.len(), detections, failures);
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            document = %source.name(),
            fragments = report.total_fragments,
            detections = report.total_detections,
            failures = report.failures.len(),
            duration_ms = report.processing_time_ms,
            "Document redacted"
        );

        Ok(report)
    }
}
