//! Integration tests for detector registration and ordering

use std::io::Write;
use veil::domain::VeilError;
use veil::redaction::anonymizer::{default_anonymizer, RandomSource};
use veil::redaction::detector::{Matcher, RegexMatcher};
use veil::redaction::{DetectorRegistry, PatternLibrary, PiiCategory, RedactionEngine};

fn matcher(pattern: &str) -> Box<dyn Matcher> {
    Box::new(RegexMatcher::new(pattern).unwrap())
}

#[test]
fn test_numeric_category_always_last() {
    let registry = DetectorRegistry::default_detectors().unwrap();
    let categories = registry.categories();

    assert_eq!(categories.len(), 10);
    assert_eq!(categories.last(), Some(&PiiCategory::GenericNumber));

    let priorities: Vec<u32> = registry.entries().iter().map(|e| e.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
}

#[test]
fn test_generic_number_before_specific_rejected() {
    let mut registry = DetectorRegistry::default_detectors().unwrap();
    let err = registry
        .register(
            PiiCategory::GenericNumber,
            matcher(r"\d+"),
            default_anonymizer(PiiCategory::GenericNumber),
            50,
        )
        .unwrap_err();

    match err {
        VeilError::InvalidOrdering {
            category,
            conflicting,
            ..
        } => {
            assert_eq!(category, "generic-number");
            assert_eq!(conflicting, "person-name");
        }
        other => panic!("unexpected error {other}"),
    }

    // Unchanged on failure
    assert_eq!(
        registry.get(PiiCategory::GenericNumber).map(|e| e.priority),
        Some(1000)
    );
}

#[test]
fn test_equal_priority_with_numeric_rejected() {
    let mut registry = DetectorRegistry::new();
    registry
        .register(
            PiiCategory::GenericNumber,
            matcher(r"\d+"),
            default_anonymizer(PiiCategory::GenericNumber),
            100,
        )
        .unwrap();

    let result = registry.register(
        PiiCategory::Email,
        matcher(r"\S+@\S+"),
        default_anonymizer(PiiCategory::Email),
        100,
    );
    assert!(matches!(result, Err(VeilError::InvalidOrdering { .. })));

    registry
        .register(
            PiiCategory::Email,
            matcher(r"\S+@\S+"),
            default_anonymizer(PiiCategory::Email),
            99,
        )
        .unwrap();
    assert_eq!(
        registry.categories(),
        vec![PiiCategory::Email, PiiCategory::GenericNumber]
    );
}

#[test]
fn test_custom_binding_used_by_engine() {
    let mut registry = DetectorRegistry::default_detectors().unwrap();
    let tag = |_: &str, _: &dyn RandomSource| Ok::<_, anyhow::Error>("[ID]".to_string());
    registry
        .register(PiiCategory::DriversLicense, matcher(r"\bEMP-\d{4}\b"), Box::new(tag), 60)
        .unwrap();

    let engine = RedactionEngine::new(registry);
    assert_eq!(engine.redact("badge EMP-1234 issued"), "badge [ID] issued");
}

#[test]
fn test_library_file_overrides_builtin() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[patterns.employee]
category = "medical-record-number"
pattern = '\bEMP-\d{{6}}\b'
priority = 15
"#
    )
    .unwrap();

    let library = PatternLibrary::from_file(file.path()).unwrap();
    assert_eq!(library.len(), 1);

    let mut registry = DetectorRegistry::default_detectors().unwrap();
    registry.apply_library(&library, &[]).unwrap();

    let mrn = registry.get(PiiCategory::MedicalRecordNumber).unwrap();
    assert_eq!(mrn.priority, 15);
    assert_eq!(registry.len(), 10);
    assert_eq!(registry.categories()[1], PiiCategory::MedicalRecordNumber);
}

#[test]
fn test_library_with_bad_regex_is_configuration_error() {
    let result = PatternLibrary::from_toml(
        r#"
[patterns.ssn]
pattern = '(\d{3}'
priority = 30
"#,
    );
    assert!(matches!(result, Err(VeilError::Configuration(_))));
}

#[test]
fn test_library_with_unknown_category_rejected() {
    let result = PatternLibrary::from_toml(
        r#"
[patterns.passport]
pattern = '[A-Z]{2}\d{7}'
priority = 30
"#,
    );
    assert!(matches!(result, Err(VeilError::Configuration(_))));
}
