//! Document redaction reporting
//!
//! Collects per-document statistics while fragments are redacted: how many
//! fragments changed, detections per category, and the failure diagnostics
//! the engine recovered from.

use crate::redaction::models::{PiiCategory, RedactionFailure, RedactionOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report for one redacted document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Where the document came from
    pub source: String,

    /// When the report was started
    pub generated_at: DateTime<Utc>,

    /// Whether text was left unchanged
    pub dry_run: bool,

    /// Pages traversed
    pub total_pages: usize,

    /// Fragments redacted
    pub total_fragments: usize,

    /// Fragments whose text changed
    pub fragments_changed: usize,

    /// Total substitutions
    pub total_detections: usize,

    /// Substitutions by category
    pub detections_by_category: BTreeMap<PiiCategory, usize>,

    /// Recovered failures
    pub failures: Vec<RedactionFailure>,

    /// Wall-clock processing time (ms)
    pub processing_time_ms: u64,
}

impl DocumentReport {
    /// Create an empty report
    pub fn new(source: impl Into<String>, dry_run: bool) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            dry_run,
            total_pages: 0,
            total_fragments: 0,
            fragments_changed: 0,
            total_detections: 0,
            detections_by_category: BTreeMap::new(),
            failures: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Count a traversed page
    pub fn add_page(&mut self) {
        self.total_pages += 1;
    }

    /// Fold in one fragment's outcome
    pub fn add_fragment(
        &mut self,
        original: &str,
        outcome: &RedactionOutcome,
        page: usize,
        index: usize,
    ) {
        self.total_fragments += 1;
        if outcome.text != original || (self.dry_run && !outcome.detections.is_empty()) {
            self.fragments_changed += 1;
        }

        self.total_detections += outcome.detections.len();
        for detection in &outcome.detections {
            *self
                .detections_by_category
                .entry(detection.category)
                .or_insert(0) += 1;
        }

        self.failures.extend(
            outcome
                .failures
                .iter()
                .cloned()
                .map(|failure| failure.at(page, index)),
        );
    }

    /// Whether any category failed anywhere in the document
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if self.dry_run {
            output.push_str("                 REDACTION DRY-RUN REPORT                      \n");
        } else {
            output.push_str("                     REDACTION REPORT                          \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Source:                {}\n", self.source));
        output.push_str(&format!("  Pages:                 {}\n", self.total_pages));
        output.push_str(&format!("  Fragments:             {}\n", self.total_fragments));
        output.push_str(&format!("  Fragments With PII:    {}\n", self.fragments_changed));
        output.push_str(&format!("  Total Substitutions:   {}\n", self.total_detections));
        output.push_str(&format!("  Processing Time:       {} ms\n", self.processing_time_ms));
        output.push('\n');

        if !self.detections_by_category.is_empty() {
            output.push_str("🔍 DETECTIONS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.as_str(), count));
            }
            output.push('\n');
        }

        if !self.failures.is_empty() {
            output.push_str("⚠️  FAILURES (text passed through)\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for failure in &self.failures {
                output.push_str(&format!(
                    "  • page {} fragment {}: {}\n",
                    failure.page.map_or("?".to_string(), |p| p.to_string()),
                    failure.fragment.map_or("?".to_string(), |f| f.to_string()),
                    failure.message
                ));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::{hash_value, Detection, RedactionError};

    fn outcome(text: &str, categories: &[PiiCategory]) -> RedactionOutcome {
        RedactionOutcome {
            text: text.to_string(),
            detections: categories
                .iter()
                .map(|c| Detection {
                    category: *c,
                    value_hash: hash_value("x"),
                    replacement: "y".to_string(),
                })
                .collect(),
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_report_creation() {
        let report = DocumentReport::new("scan.json", false);
        assert_eq!(report.total_pages, 0);
        assert_eq!(report.total_fragments, 0);
        assert!(report.detections_by_category.is_empty());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_add_fragments() {
        let mut report = DocumentReport::new("scan.json", false);
        report.add_page();
        report.add_fragment("plain", &outcome("plain", &[]), 1, 0);
        report.add_fragment(
            "John 555-123-4567",
            &outcome("FN 555-555-5555", &[PiiCategory::PhoneNumber, PiiCategory::PersonName]),
            1,
            1,
        );

        assert_eq!(report.total_pages, 1);
        assert_eq!(report.total_fragments, 2);
        assert_eq!(report.fragments_changed, 1);
        assert_eq!(report.total_detections, 2);
        assert_eq!(
            report.detections_by_category.get(&PiiCategory::PhoneNumber),
            Some(&1)
        );
    }

    #[test]
    fn test_failures_get_location() {
        let mut report = DocumentReport::new("scan.json", false);
        let error = RedactionError::Matcher {
            category: PiiCategory::Email,
            message: "limit".to_string(),
        };
        let mut failed = outcome("a@b.co", &[]);
        failed.failures.push(RedactionFailure::new(&error, "a@b.co"));

        report.add_fragment("a@b.co", &failed, 3, 4);

        assert!(report.has_failures());
        assert_eq!(report.failures[0].page, Some(3));
        assert_eq!(report.failures[0].fragment, Some(4));
    }

    #[test]
    fn test_dry_run_counts_detected_fragments() {
        let mut report = DocumentReport::new("scan.json", true);
        report.add_fragment("Alice", &outcome("Alice", &[PiiCategory::PersonName]), 1, 0);
        assert_eq!(report.fragments_changed, 1);
    }

    #[test]
    fn test_format_console() {
        let mut report = DocumentReport::new("scan.json", true);
        report.total_pages = 2;
        report.total_detections = 5;

        let output = report.format_console();
        assert!(output.contains("REDACTION DRY-RUN REPORT"));
        assert!(output.contains("Pages:                 2"));
        assert!(output.contains("Total Substitutions:   5"));
    }

    #[test]
    fn test_format_json() {
        let report = DocumentReport::new("scan.json", false);
        let json = report.format_json().unwrap();
        assert!(json.contains("\"source\": \"scan.json\""));
    }
}
