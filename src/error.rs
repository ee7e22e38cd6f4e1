use crate::encoding::{EncodingError, InvalidDocumentError};
use crate::operation::{DatabaseError, OperationFailure};

pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised by this library.
///
/// Encoding and database errors are separate families; this enum is only the
/// union of the two for callers that handle both in one place.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Self::Encoding(err) => err.message(),
            Self::Database(err) => err.message(),
        }
    }

    pub fn as_operation_failure(&self) -> Option<&OperationFailure> {
        match self {
            Self::Database(err) => err.as_operation_failure(),
            Self::Encoding(_) => None,
        }
    }

    /// Labels are only carried by operation failures
    pub fn has_label(&self, label: &str) -> bool {
        self.as_operation_failure()
            .is_some_and(|failure| failure.has_label(label))
    }
}

impl From<OperationFailure> for Error {
    fn from(failure: OperationFailure) -> Self {
        Self::Database(failure.into())
    }
}

impl From<InvalidDocumentError> for Error {
    fn from(err: InvalidDocumentError) -> Self {
        Self::Encoding(err.into())
    }
}
