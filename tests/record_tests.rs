//! Tests for the record model
//!
//! These tests verify:
//! - Level parsing, display, and serde representation
//! - Default substitution for every defaultable field
//! - Boundary validation (required message, unknown level token)

use logforge::{ForgeError, Level, RecordDraft};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft_with_message(message: &str) -> RecordDraft {
    RecordDraft {
        message: Some(message.to_string()),
        ..RecordDraft::default()
    }
}

// =============================================================================
// Level Tests
// =============================================================================

#[test]
fn test_level_parse_is_case_insensitive() {
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("WaRn".parse::<Level>().unwrap(), Level::Warn);
}

#[test]
fn test_level_parse_rejects_unknown_token() {
    assert!("VERBOSE".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn test_level_display_is_uppercase() {
    assert_eq!(Level::Trace.to_string(), "TRACE");
    assert_eq!(Level::Fatal.to_string(), "FATAL");
}

#[test]
fn test_level_serde_uses_uppercase_tokens() {
    assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARN\"");

    let level: Level = serde_json::from_str("\"DEBUG\"").unwrap();
    assert_eq!(level, Level::Debug);
}

#[test]
fn test_level_ordering_follows_severity() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Error < Level::Fatal);
}

// =============================================================================
// Normalize: Default Substitution
// =============================================================================

#[test]
fn test_normalize_fills_every_default() {
    let record = draft_with_message("hello").normalize().unwrap();

    assert_eq!(record.level, Level::Info);
    assert_eq!(record.message, "hello");
    assert_eq!(record.source, "unknown");
    assert_eq!(record.hostname, "unknown");
    assert_eq!(record.environment, "development");
    assert!(record.metadata.is_empty());
    assert!(record.timestamp.is_none());
}

#[test]
fn test_normalize_empty_level_defaults_to_info() {
    let mut draft = draft_with_message("m");
    draft.level = Some(String::new());

    let record = draft.normalize().unwrap();
    assert_eq!(record.level, Level::Info);
}

#[test]
fn test_normalize_empty_source_defaults_to_unknown() {
    let mut draft = draft_with_message("m");
    draft.source = Some(String::new());

    let record = draft.normalize().unwrap();
    assert_eq!(record.source, "unknown");
}

#[test]
fn test_normalize_keeps_supplied_fields() {
    let mut draft = draft_with_message("disk full");
    draft.level = Some("error".to_string());
    draft.source = Some("disk-monitor".to_string());
    draft.hostname = Some("web-01".to_string());
    draft.environment = Some("production".to_string());

    let record = draft.normalize().unwrap();
    assert_eq!(record.level, Level::Error);
    assert_eq!(record.source, "disk-monitor");
    assert_eq!(record.hostname, "web-01");
    assert_eq!(record.environment, "production");
}

#[test]
fn test_normalize_keeps_supplied_metadata() {
    let mut metadata = logforge::Metadata::new();
    metadata.insert("k".to_string(), serde_json::json!("v"));

    let mut draft = draft_with_message("m");
    draft.metadata = Some(metadata);

    let record = draft.normalize().unwrap();
    assert_eq!(record.metadata["k"], "v");
}

// =============================================================================
// Normalize: Validation
// =============================================================================

#[test]
fn test_normalize_missing_message_is_rejected() {
    let result = RecordDraft::default().normalize();

    assert!(matches!(result.unwrap_err(), ForgeError::Validation(_)));
}

#[test]
fn test_normalize_empty_message_is_rejected() {
    let result = draft_with_message("").normalize();

    assert!(matches!(result.unwrap_err(), ForgeError::Validation(_)));
}

#[test]
fn test_normalize_unknown_level_is_rejected() {
    let mut draft = draft_with_message("m");
    draft.level = Some("VERBOSE".to_string());

    let result = draft.normalize();
    assert!(matches!(result.unwrap_err(), ForgeError::Validation(_)));
}

// =============================================================================
// Draft Deserialization
// =============================================================================

#[test]
fn test_draft_deserializes_from_partial_json() {
    let draft: RecordDraft =
        serde_json::from_str(r#"{"message":"boot","level":"warn"}"#).unwrap();

    let record = draft.normalize().unwrap();
    assert_eq!(record.message, "boot");
    assert_eq!(record.level, Level::Warn);
    assert_eq!(record.hostname, "unknown");
}

#[test]
fn test_draft_deserializes_metadata_object() {
    let draft: RecordDraft =
        serde_json::from_str(r#"{"message":"m","metadata":{"attempt":3}}"#).unwrap();

    let record = draft.normalize().unwrap();
    assert_eq!(record.metadata["attempt"], 3);
}
