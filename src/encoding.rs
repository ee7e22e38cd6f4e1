use thiserror::Error;

/// A document that could not be encoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDocumentError {
    /// The document is not representable in the binary encoding
    #[error("{0}")]
    Invalid(String),

    /// The encoded document exceeds the size limit
    #[error("{0}")]
    TooLarge(String),
}

impl InvalidDocumentError {
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid(message) | Self::TooLarge(message) => message,
        }
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLarge(_))
    }
}

/// Errors raised while converting documents to and from their binary encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Any other encoding or decoding failure
    #[error("{0}")]
    Encoding(String),

    /// Data that cannot form a valid object identifier
    #[error("{0}")]
    InvalidId(String),

    #[error(transparent)]
    InvalidDocument(#[from] InvalidDocumentError),
}

impl EncodingError {
    /// Create a generic encoding error
    pub fn new(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId(message.into())
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument(InvalidDocumentError::Invalid(message.into()))
    }

    pub fn document_too_large(message: impl Into<String>) -> Self {
        Self::InvalidDocument(InvalidDocumentError::TooLarge(message.into()))
    }

    /// Get the human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Encoding(message) | Self::InvalidId(message) => message,
            Self::InvalidDocument(inner) => inner.message(),
        }
    }

    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId(_))
    }

    /// True for every invalid-document error, including oversized documents
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, Self::InvalidDocument(_))
    }

    pub fn is_document_too_large(&self) -> bool {
        matches!(self, Self::InvalidDocument(inner) if inner.is_too_large())
    }
}
