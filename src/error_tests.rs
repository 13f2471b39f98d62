//! Tests for error types

use super::*;

#[test]
fn test_invalid_url_display() {
    let error = RevuError::InvalidUrl {
        url: "not a url".to_string(),
        reason: "relative URL without a base".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("not a url"));
    assert!(msg.contains("relative URL"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "log dir missing");
    let err = RevuError::from(io_err);
    assert!(matches!(err, RevuError::Io(_)));
    assert!(err.to_string().contains("log dir missing"));
}

#[test]
fn test_empty_input_names_the_field() {
    let err = ViewError::EmptyInput("Review");
    assert_eq!(err.to_string(), "Review is empty");
}

#[test]
fn test_view_error_equality() {
    assert_eq!(ViewError::NoSelection, ViewError::NoSelection);
    assert_ne!(ViewError::EmptyInput("Query"), ViewError::EmptyInput("Review"));
}
