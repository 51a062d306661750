//! Integration tests for configuration loading and engine construction
//!
//! Tests that touch environment variables hold `ENV_MUTEX`.

use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use veil::config::load_config;
use veil::domain::VeilError;
use veil::redaction::{PiiCategory, RedactionEngine};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "VEIL_APPLICATION_LOG_LEVEL",
        "VEIL_REDACTION_DRY_RUN",
        "VEIL_REDACTION_SEED",
        "VEIL_REDACTION_DISABLED_CATEGORIES",
        "VEIL_REDACTION_PATTERN_LIBRARY",
        "VEIL_DOCUMENT_VIEWPORT_SCALE",
        "TEST_VEIL_SEED",
    ] {
        std::env::remove_var(var);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[application]
log_level = "debug"

[redaction]
dry_run = true
seed = 11
disabled_categories = ["person-name", "street-address"]

[document]
viewport_scale = 2.0

[logging]
local_enabled = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert!(config.redaction.dry_run);
    assert_eq!(config.redaction.seed, Some(11));
    assert_eq!(config.document.viewport_scale, 2.0);

    let engine = RedactionEngine::from_config(&config.redaction).unwrap();
    assert!(engine.is_dry_run());
    assert!(engine.registry().get(PiiCategory::PersonName).is_none());
    assert_eq!(engine.registry().len(), 8);
}

#[test]
fn test_env_substitution_and_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("TEST_VEIL_SEED", "21");
    std::env::set_var("VEIL_REDACTION_DISABLED_CATEGORIES", "phone, email");
    std::env::set_var("VEIL_APPLICATION_LOG_LEVEL", "warn");

    let file = config_file("[redaction]\nseed = ${TEST_VEIL_SEED}\n");
    let config = load_config(file.path());
    cleanup_env_vars();

    let config = config.unwrap();
    assert_eq!(config.redaction.seed, Some(21));
    assert_eq!(
        config.redaction.disabled_categories,
        vec![PiiCategory::PhoneNumber, PiiCategory::Email]
    );
    assert_eq!(config.application.log_level, "warn");
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[redaction]\nseed = ${TEST_VEIL_SEED}\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_VEIL_SEED"));
}

#[test]
fn test_invalid_override_value() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("VEIL_REDACTION_DISABLED_CATEGORIES", "ssn,passport");
    let file = config_file("");
    let result = load_config(file.path());
    cleanup_env_vars();

    assert!(matches!(result, Err(VeilError::Configuration(_))));
}

#[test]
fn test_seeded_engines_reproduce_output() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[redaction]\nseed = 1234\n");
    let config = load_config(file.path()).unwrap();

    let text = "jane@example.com MRN: 1234567";
    let first = RedactionEngine::from_config(&config.redaction)
        .unwrap()
        .redact(text);
    let second = RedactionEngine::from_config(&config.redaction)
        .unwrap()
        .redact(text);
    assert_eq!(first, second);
    assert!(first.starts_with("anonymous"));
}

#[test]
fn test_pattern_library_ordering_error_surfaces() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let library = config_file(
        r#"
[patterns.numbers]
category = "generic-number"
pattern = '\d+'
priority = 1
"#,
    );
    let file = config_file(&format!(
        "[redaction]\npattern_library = {:?}\n",
        library.path().to_string_lossy()
    ));

    let config = load_config(file.path()).unwrap();
    let result = RedactionEngine::from_config(&config.redaction);
    assert!(matches!(result, Err(VeilError::InvalidOrdering { .. })));
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for contents in [
        "[application]\nlog_level = \"loud\"\n",
        "[document]\nviewport_scale = -1.0\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[redaction]\npattern_library = \"/missing/patterns.toml\"\n",
    ] {
        let file = config_file(contents);
        assert!(
            matches!(load_config(file.path()), Err(VeilError::Configuration(_))),
            "accepted {contents}"
        );
    }
}
