//! Unified application error types for linkshare.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// The server capability set could not be fetched.
    CapabilityFetch,
    /// Creating or updating a share failed.
    ShareSave,
    /// A date field could not be read.
    DateParse,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A filesystem I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::CapabilityFetch => write!(f, "CAPABILITY_FETCH"),
            Self::ShareSave => write!(f, "SHARE_SAVE"),
            Self::DateParse => write!(f, "DATE_PARSE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// The unified application error used throughout linkshare.
///
/// Collaborator failures (capability fetch, share save) arrive as
/// `AppError` and are recovered by the dialog session; only the CLI host
/// ever turns one into a process exit.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a capability fetch error.
    pub fn capability_fetch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapabilityFetch, message)
    }

    /// Create a date parse error.
    pub fn date_parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DateParse, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// The message to show inline in a form, without the kind prefix.
    ///
    /// Falls back to the underlying cause when the message itself is empty.
    pub fn user_message(&self) -> String {
        if !self.message.trim().is_empty() {
            return self.message.clone();
        }
        match &self.source {
            Some(source) => source.to_string(),
            None => self.kind.to_string(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::new(ErrorKind::ShareSave, "Link could not be created");
        assert_eq!(err.to_string(), "SHARE_SAVE: Link could not be created");
    }

    #[test]
    fn test_user_message_strips_kind() {
        let err = AppError::new(ErrorKind::ShareSave, "Password is required");
        assert_eq!(err.user_message(), "Password is required");
    }

    #[test]
    fn test_user_message_falls_back_to_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
        let err = AppError::with_source(ErrorKind::ShareSave, "", io);
        assert_eq!(err.user_message(), "connection timed out");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("boom");
        let err: AppError = io.into();
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Io);
        assert!(cloned.source.is_none());
    }
}
