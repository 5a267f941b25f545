//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tangle_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_null_argument() {
    let err = Error::null_argument("value");
    assert!(matches!(err.kind, ErrorKind::NullArgument { argument: "value" }));
    assert!(format!("{err}").contains("value"));
}

#[test]
fn error_unknown_type() {
    let err = Error::unknown_type("Enderman");
    assert!(matches!(err.kind, ErrorKind::UnknownType(ref name) if name == "Enderman"));
    assert_eq!(format!("{err}"), "unknown type: Enderman");
}

#[test]
fn error_unsupported() {
    let err = Error::unsupported("replace_values");
    assert!(err.is_unsupported());
    assert_eq!(format!("{err}"), "unsupported operation: replace_values");
}

#[test]
fn error_cycle_detected() {
    let err = Error::cycle_detected(4);
    assert!(matches!(err.kind, ErrorKind::CycleDetected { remaining: 4 }));
    assert!(format!("{err}").contains('4'));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::unsupported("size");
    assert!(err.context.is_none());
}

#[test]
fn context_round_trips() {
    let err = Error::null_argument("key").with_context(
        ErrorContext::new()
            .with_source("block-events")
            .with_operation("put"),
    );

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(format!("{ctx}"), "in block-events::put");
    // Display of the error itself only names the kind
    assert_eq!(format!("{err}"), "missing required argument: key");
}

#[test]
fn errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::cycle_detected(2));
}
