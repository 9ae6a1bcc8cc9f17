use std::io;

use thiserror::Error;

/// Library-wide error type for arraygen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid or unsupported option value.
    #[error("{0}")]
    Configuration(String),

    /// Raw value text could not be turned into a value.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// A value shape that has no array-literal form.
    #[error("Unsupported value type: {type_name}")]
    UnsupportedType { type_name: String },

    /// Target file exists and overwriting is disabled.
    #[error("File \"{0}\" already exists and overwrite=false")]
    Conflict(String),

    /// Internal invariant or reporting failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::Parse { what: what.into(), details: details.into() }
    }

    /// Closest `io::ErrorKind` for callers that classify failures that way.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::Parse { .. } | AppError::UnsupportedType { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::Conflict(_) => io::ErrorKind::AlreadyExists,
            AppError::Internal(_) => io::ErrorKind::Other,
        }
    }
}
