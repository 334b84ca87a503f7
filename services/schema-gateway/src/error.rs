//! Kind-tagged error type shared by the gateway components.
//!
//! # Purpose
//! Every failure crossing a component boundary carries an [`ErrorKind`] so the
//! HTTP layer can branch on the kind without parsing message text.
//!
//! # Key invariants
//! - Wrapping with [`Error::context`] prepends a short step description and
//!   never changes the kind.
//! - Errors that arrive without a kind (`anyhow::Error`, storage failures) are
//!   coerced to [`ErrorKind::Internal`].
use crate::store::StoreError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Exhaustive list of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unexpected failure; details are logged, callers get a generic message.
    Internal,
    /// The schema registry could not be reached or answered unexpectedly.
    Remote,
    /// A request field is missing or malformed.
    Validation,
    /// The requested subject/version does not exist in the registry.
    NotFound,
    /// The HTTP request body could not be decoded.
    InvalidJsonBody,
    /// The topic is already bound to another subject/version.
    BadRequest,
    /// The caller went away before the work completed.
    Cancelled,
}

impl ErrorKind {
    /// Stable snake-case identifier used in API error bodies and metric labels.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Internal => "internal",
            ErrorKind::Remote => "remote_error",
            ErrorKind::Validation => "validation_error",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidJsonBody => "invalid_json_body",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Internal => "internal error",
            ErrorKind::Remote => "remote error",
            ErrorKind::Validation => "validation error",
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidJsonBody => "invalid json body",
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Remote, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn invalid_json_body(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidJsonBody, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cancelled, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Prefix the message with the step that failed, keeping the kind.
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(format!("{err:#}"))
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}
