//! Error types for the Tangle collections.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Absence (a missing node, edge, or registration) is never an error; these
//! types cover precondition violations and unsupported operations only.

use std::fmt;

use thiserror::Error;

/// The main error type for Tangle operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn null_argument(argument: &'static str) -> Self {
        Self::new(ErrorKind::NullArgument { argument })
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates an unsupported operation error.
    #[must_use]
    pub fn unsupported(operation: &'static str) -> Self {
        Self::new(ErrorKind::Unsupported { operation })
    }

    /// Creates a cycle detected error.
    #[must_use]
    pub fn cycle_detected(remaining: usize) -> Self {
        Self::new(ErrorKind::CycleDetected { remaining })
    }

    /// Returns true if this error reports an unsupported operation.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, ErrorKind::Unsupported { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required argument was absent.
    #[error("missing required argument: {argument}")]
    NullArgument {
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// A type is not known to the hierarchy it was used with.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A type was redeclared with a different superclass.
    #[error("type {name} already declared with parent {existing}, not {requested}")]
    ConflictingParent {
        /// The redeclared type name.
        name: String,
        /// The parent recorded by the first declaration.
        existing: String,
        /// The parent requested by the conflicting declaration.
        requested: String,
    },

    /// The operation is deliberately not implemented.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A cycle prevented a complete ordering.
    #[error("cycle detected: {remaining} nodes could not be ordered")]
    CycleDetected {
        /// Number of nodes left unordered.
        remaining: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the registry or graph that raised the error.
    pub source: Option<String>,
    /// The operation that failed.
    pub operation: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.operation) {
            (Some(source), Some(op)) => write!(f, "in {source}::{op}"),
            (Some(source), None) => write!(f, "in {source}"),
            (None, Some(op)) => write!(f, "in {op}"),
            (None, None) => Ok(()),
        }
    }
}
