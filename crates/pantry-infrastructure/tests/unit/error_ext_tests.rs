//! Error Extension Tests

use pantry_domain::error::{Error, Result};
use pantry_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = Err(not_found()).config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8> = Ok::<u8, io::Error>(7).io_context("unused");
    assert_eq!(value.unwrap(), 7);
}
