//! Error types for the XLim document database client.
//!
//! Two families of errors are defined:
//!
//! * [`EncodingError`] for failures while converting documents to and from
//!   their binary encoding.
//! * [`DatabaseError`] for failures while executing database operations. Its
//!   [`OperationFailure`] variant carries a server error code and a details
//!   payload, and can be asked whether it carries a retry label.
//!
//! [`Error`] is the union of both for callers that handle every failure in one
//! place.

pub mod config;
pub mod encoding;
pub mod error;
pub mod labels;
pub mod operation;

pub use crate::config::Config;
pub use crate::encoding::{EncodingError, InvalidDocumentError};
pub use crate::error::{Error, Result};
pub use crate::labels::LabelTable;
pub use crate::operation::{DatabaseError, FailureKind, OperationFailure, BULK_WRITE_MESSAGE};
