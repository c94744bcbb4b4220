//! Integration tests for Error types
//!
//! Tests error construction, display, context, and fatality.

use gramcheck_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_tag() {
    let err = Error::unknown_tag("ZZ");
    assert!(matches!(err.kind, ErrorKind::UnknownTag(_)));
    assert!(format!("{err}").contains("ZZ"));
    assert!(!err.is_fatal());
}

#[test]
fn error_oracle_unavailable() {
    let err = Error::oracle_unavailable("tagger", "connection refused");
    assert!(matches!(err.kind, ErrorKind::OracleUnavailable { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("tagger"));
    assert!(msg.contains("connection refused"));
    assert!(err.is_fatal());
}

#[test]
fn error_parse() {
    let err = Error::parse("expected words", 3, 1, "NN");
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 3, column: 1, .. }));
    assert!(format!("{err}").contains("3:1"));
}

#[test]
fn error_oracle_unavailable_with_source() {
    let err = Error::oracle_unavailable("tagger", "model file missing")
        .with_context(ErrorContext::new().with_source("models/en_tokenizer.bin"));
    assert!(err.is_fatal());
    let context = err.context.expect("context");
    assert_eq!(context.source.as_deref(), Some("models/en_tokenizer.bin"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = Error::from(io);
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.is_fatal());
}

#[test]
fn error_internal() {
    let err = Error::internal("boom");
    assert!(!err.is_fatal());
    assert_eq!(format!("{err}"), "internal error: boom");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::unknown_tag("ZZ").with_context(
        ErrorContext::new()
            .with_sentence("I ought go.")
            .with_rule("pronoun-i"),
    );
    let context = err.context.expect("context");
    assert_eq!(context.sentence.as_deref(), Some("I ought go."));
    assert_eq!(context.rule.as_deref(), Some("pronoun-i"));
    assert_eq!(context.source, None);
}

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_source("words.lex")
        .with_rule("etcetera")
        .with_sentence("A, b.");
    let msg = format!("{context}");
    assert!(msg.starts_with("at words.lex"));
    assert!(msg.contains("in rule etcetera"));
    assert!(msg.contains("\"A, b.\""));
}

#[test]
fn context_does_not_change_fatality() {
    let err = Error::oracle_unavailable("splitter", "down")
        .with_context(ErrorContext::new().with_sentence("x"));
    assert!(err.is_fatal());
}
