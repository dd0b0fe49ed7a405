//! Unit tests for domain error types

use pantry_domain::Error;

#[test]
fn test_store_unavailable_error() {
    let error = Error::store_unavailable("connection refused");
    assert!(error.is_store_unavailable());
    assert!(error.to_string().contains("connection refused"));
}

#[test]
fn test_store_unavailable_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let error = Error::store_unavailable_with_source("get failed", io);
    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("timed out"));
}

#[test]
fn test_invalid_name_error() {
    let error = Error::invalid_name("   ");
    match error {
        Error::InvalidName { ref name } => assert_eq!(name, "   "),
        _ => panic!("Expected InvalidName error"),
    }
    assert!(!error.is_store_unavailable());
}

#[test]
fn test_invalid_document_error() {
    let error = Error::invalid_document("Flour", "missing quantity");
    let display = error.to_string();
    assert!(display.contains("Flour"));
    assert!(display.contains("missing quantity"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
