use serde_json::Value;
use thiserror::Error;

use crate::labels::{self, MULTIPLE_ERRORS_OCCURRED};

/// Message carried by every bulk write error
pub const BULK_WRITE_MESSAGE: &str = "batch op errors occurred";

/// The specialization of an operation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Any failed database operation
    Generic,
    /// A failed single-document write
    Write,
    /// A write that violated a uniqueness constraint
    DuplicateKey,
    /// A batch in which one or more operations failed
    BulkWrite,
}

/// A database operation that was rejected or aborted.
///
/// Carries an optional server error code and an optional details payload.
/// Both are fixed at construction and only exposed through accessors, so the
/// same value can be inspected by several readers at once.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct OperationFailure {
    message: String,
    code: Option<i32>,
    details: Option<Value>,
    kind: FailureKind,
}

impl OperationFailure {
    /// Create a generic operation failure
    pub fn new(message: impl Into<String>, code: Option<i32>, details: Option<Value>) -> Self {
        Self::with_kind(FailureKind::Generic, message, code, details)
    }

    /// Create a failure for a single write operation
    pub fn write_error(
        message: impl Into<String>,
        code: Option<i32>,
        details: Option<Value>,
    ) -> Self {
        Self::with_kind(FailureKind::Write, message, code, details)
    }

    /// Create a failure for a write that hit a duplicate key
    pub fn duplicate_key(
        message: impl Into<String>,
        code: Option<i32>,
        details: Option<Value>,
    ) -> Self {
        Self::with_kind(FailureKind::DuplicateKey, message, code, details)
    }

    /// Create the aggregate failure for a batch of operations.
    ///
    /// The message and code are fixed; `results` is kept verbatim as the
    /// details payload.
    pub fn bulk_write(results: impl Into<Value>) -> Self {
        Self::with_kind(
            FailureKind::BulkWrite,
            BULK_WRITE_MESSAGE,
            Some(MULTIPLE_ERRORS_OCCURRED),
            Some(results.into()),
        )
    }

    fn with_kind(
        kind: FailureKind,
        message: impl Into<String>,
        code: Option<i32>,
        details: Option<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            code,
            details,
            kind,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Take ownership of the details payload
    pub fn into_details(self) -> Option<Value> {
        self.details
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// True for write errors and their duplicate-key specialization
    pub fn is_write_error(&self) -> bool {
        matches!(self.kind, FailureKind::Write | FailureKind::DuplicateKey)
    }

    pub fn is_duplicate_key(&self) -> bool {
        self.kind == FailureKind::DuplicateKey
    }

    pub fn is_bulk_write(&self) -> bool {
        self.kind == FailureKind::BulkWrite
    }

    /// Check whether this failure carries an error label such as
    /// [`labels::TEMPORARY_TXN_FAILURE`]. Unknown labels are never carried.
    pub fn has_label(&self, label: &str) -> bool {
        labels::builtin_has_label(label, self.code)
    }

    /// All built-in labels carried by this failure
    pub fn labels(&self) -> Vec<&'static str> {
        labels::builtin_labels_for(self.code)
    }
}

/// Errors raised while executing database operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatabaseError {
    /// Something is incorrectly configured
    #[error("{0}")]
    Configuration(String),

    /// The client attempted an operation that is not allowed
    #[error("{0}")]
    InvalidOperation(String),

    /// A database or collection name is invalid
    #[error("{0}")]
    InvalidName(String),

    /// Collection validation failed
    #[error("{0}")]
    CollectionInvalid(String),

    #[error(transparent)]
    OperationFailure(#[from] OperationFailure),
}

impl DatabaseError {
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(message)
            | Self::InvalidOperation(message)
            | Self::InvalidName(message)
            | Self::CollectionInvalid(message) => message,
            Self::OperationFailure(failure) => failure.message(),
        }
    }

    pub fn as_operation_failure(&self) -> Option<&OperationFailure> {
        match self {
            Self::OperationFailure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Server code, present only on operation failures
    pub fn code(&self) -> Option<i32> {
        self.as_operation_failure().and_then(OperationFailure::code)
    }

    /// Labels are only carried by operation failures
    pub fn has_label(&self, label: &str) -> bool {
        self.as_operation_failure()
            .is_some_and(|failure| failure.has_label(label))
    }
}
