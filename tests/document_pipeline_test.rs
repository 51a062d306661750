//! Integration tests for whole-document traversal

use std::io::Write;
use std::sync::Arc;
use veil::document::{
    open_document, DocumentRedactor, DocumentSource, JsonDocument, OverlayRenderer,
};
use veil::domain::VeilError;
use veil::redaction::anonymizer::{default_anonymizer, Anonymizer, EntropySource, RandomSource};
use veil::redaction::detector::RegexMatcher;
use veil::redaction::{DetectorRegistry, PiiCategory, RedactionEngine};

const CLINIC_NOTE: &str = r#"{
  "pages": [
    {
      "width": 612,
      "height": 792,
      "items": [
        { "str": "Patient: Mary Jones", "transform": [12, 0, 0, 12, 72, 720], "fontName": "Helvetica" },
        { "str": "DOB 04/22/1961", "transform": [12, 0, 0, 12, 72, 700], "fontName": "Helvetica" },
        { "str": "SSN 321-54-9876", "transform": [12, 0, 0, 12, 72, 680], "fontName": "Helvetica" }
      ]
    },
    {
      "width": 612,
      "height": 792,
      "items": [
        { "str": "Follow up: call 555-987-6543", "transform": [10, 0, 0, 10, 72, 720], "fontName": "Times" },
        { "str": "Dose 2.5 mg", "transform": [10, 0, 0, 10, 72, 700], "fontName": "Times" }
      ]
    }
  ]
}"#;

fn json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn redactor(registry: DetectorRegistry, dry_run: bool) -> DocumentRedactor {
    DocumentRedactor::new(Arc::new(
        RedactionEngine::new(registry).with_dry_run(dry_run),
    ))
}

#[tokio::test]
async fn test_redacts_every_page() {
    let file = json_file(CLINIC_NOTE);
    let source = open_document(file.path(), 1.5).await.unwrap();
    assert_eq!(source.page_count(), 2);

    let mut overlay = OverlayRenderer::new();
    let report = redactor(DetectorRegistry::default_detectors().unwrap(), false)
        .redact_document(source.as_ref(), &mut overlay)
        .await
        .unwrap();

    let rendered = overlay.finish();
    assert_eq!(
        rendered.text,
        "FN: FN LN DOB 04/22/1990 SSN 999-99-9999 \
         FN up: call 555-555-5555 FN 0.0 mg "
    );

    let first = &rendered.pages[0];
    assert_eq!(first.width, 918.0);
    assert_eq!(first.height, 1188.0);
    assert_eq!(first.spans[0].top, 1188.0 - 720.0);
    assert_eq!(first.spans[0].font_family, "Helvetica");

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.total_fragments, 5);
    assert_eq!(report.fragments_changed, 5);
    assert!(!report.has_failures());
}

#[tokio::test]
async fn test_failing_anonymizer_does_not_stop_traversal() {
    let mut registry = DetectorRegistry::default_detectors().unwrap();
    let broken = |_: &str, _: &dyn RandomSource| -> anyhow::Result<String> {
        anyhow::bail!("replacement table unavailable")
    };
    registry
        .register(
            PiiCategory::Ssn,
            Box::new(RegexMatcher::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap()),
            Box::new(broken),
            30,
        )
        .unwrap();

    let source = JsonDocument::parse("note.json", CLINIC_NOTE, 1.0).unwrap();
    let mut overlay = OverlayRenderer::new();
    let report = redactor(registry, false)
        .redact_document(&source, &mut overlay)
        .await
        .unwrap();

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.category, PiiCategory::Ssn);
    assert_eq!(failure.page, Some(1));
    assert_eq!(failure.fragment, Some(2));
    assert!(!failure.message.contains("321-54-9876"));

    // The numeric pass still scrubs the digits the SSN pass left behind,
    // and later pages are unaffected
    let pages = overlay.pages();
    assert_eq!(pages[0].spans[2].text, "SSN 000-00-0000 ");
    assert_eq!(pages[1].spans[0].text, "FN up: call 555-555-5555 ");
}

#[tokio::test]
async fn test_dry_run_reports_without_changing_text() {
    let source = JsonDocument::parse("note.json", CLINIC_NOTE, 1.0).unwrap();
    let mut overlay = OverlayRenderer::new();
    let report = redactor(DetectorRegistry::default_detectors().unwrap(), true)
        .redact_document(&source, &mut overlay)
        .await
        .unwrap();

    assert!(report.dry_run);
    assert!(overlay.text().contains("SSN 321-54-9876"));
    assert_eq!(report.detections_by_category.get(&PiiCategory::Ssn), Some(&1));
    assert_eq!(
        report.detections_by_category.get(&PiiCategory::PhoneNumber),
        Some(&1)
    );
}

#[tokio::test]
async fn test_document_without_pages() {
    let file = json_file(r#"{"pages": []}"#);
    let source = open_document(file.path(), 1.5).await.unwrap();

    let mut overlay = OverlayRenderer::new();
    let report = redactor(DetectorRegistry::default_detectors().unwrap(), false)
        .redact_document(source.as_ref(), &mut overlay)
        .await
        .unwrap();

    assert_eq!(report.total_pages, 0);
    assert_eq!(report.total_fragments, 0);
    assert!(!report.has_failures());

    let rendered = overlay.finish();
    assert!(rendered.pages.is_empty());
    assert!(rendered.text.is_empty());
}

#[tokio::test]
async fn test_unsupported_input_rejected_before_traversal() {
    let file = json_file(r#"{"items": ["not", "a", "document"]}"#);
    let result = open_document(file.path(), 1.5).await;
    assert!(matches!(result, Err(VeilError::UnsupportedInput(_))));
}

#[test]
fn test_default_anonymizer_ignores_separators() {
    let anonymizer = default_anonymizer(PiiCategory::CreditCard);
    let value = anonymizer
        .anonymize("4111 1111 1111 1111", &EntropySource)
        .unwrap();
    assert_eq!(value, "4444-4444-4444-4444");
}
