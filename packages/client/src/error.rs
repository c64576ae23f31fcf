//! Error types for the law API client.
//!
//! Every failure maps onto exactly one [`ErrorKind`]. The `Display` output of
//! [`LawApiError`] is the most specific message available, so callers can show
//! it to users as-is.

use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::config::messages;

/// Coarse classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    NotAcceptable,
    ServerError,
    NetworkError,
    InvalidDate,
    XmlParseError,
}

/// Main error type for the client library.
#[derive(Debug, Error)]
pub enum LawApiError {
    /// HTTP 400, or required request parameters were missing.
    #[error("{0}")]
    BadRequest(String),

    /// HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// HTTP 406: response too large, or the law could not be disambiguated.
    #[error("{0}")]
    NotAcceptable(String),

    /// HTTP 500, or the body carried the error result code.
    #[error("{0}")]
    ServerError(String),

    /// Unrecognized HTTP status.
    #[error("{0}")]
    Network(String),

    /// The request itself failed (connection, timeout, body read).
    #[error("{}: {}", messages::NETWORK_ERROR, .0)]
    Http(#[from] reqwest::Error),

    /// Caller supplied a malformed date, or one before the update-list floor.
    #[error("{}: '{}'", messages::INVALID_DATE, .0)]
    InvalidDate(String),

    /// Response body is not well-formed XML.
    #[error("Failed to parse XML: {0}")]
    XmlParse(#[from] roxmltree::Error),
}

impl LawApiError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NotAcceptable(_) => ErrorKind::NotAcceptable,
            Self::ServerError(_) => ErrorKind::ServerError,
            Self::Network(_) | Self::Http(_) => ErrorKind::NetworkError,
            Self::InvalidDate(_) => ErrorKind::InvalidDate,
            Self::XmlParse(_) => ErrorKind::XmlParseError,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, LawApiError>;
