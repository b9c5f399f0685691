//! Unified error types for qgen-review.
//!
//! This module provides the error hierarchy for the library, with
//! enough context that a failed backend call can be shown to the user
//! as a single readable notice.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qgen-review operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QgenError {
    /// Errors talking to the qgen backend
    #[error("Backend request failed: {context}")]
    Api {
        context: String,
        #[source]
        source: ApiErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific backend error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {code}: {detail}")]
    Status { code: u16, detail: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiErrorKind {
    /// HTTP status code, if the backend answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for qgen-review operations
pub type Result<T> = std::result::Result<T, QgenError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl QgenError {
    /// Create a backend error with context
    pub fn api(context: impl Into<String>, source: ApiErrorKind) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    /// Create a backend error for a non-success HTTP status
    pub fn status(context: impl Into<String>, code: u16, detail: impl Into<String>) -> Self {
        Self::api(
            context,
            ApiErrorKind::Status {
                code,
                detail: detail.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Short, single-line text for the status bar.
    #[must_use]
    pub fn notice_text(&self) -> String {
        match self {
            Self::Api { context, source } => format!("{context}: {source}"),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for QgenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for QgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::api(
            "JSON deserialization",
            ApiErrorKind::InvalidResponse(err.to_string()),
        )
    }
}

impl From<reqwest::Error> for QgenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::api(
                "decoding response",
                ApiErrorKind::InvalidResponse(err.to_string()),
            );
        }
        let context = err
            .url()
            .map_or_else(|| "request".to_string(), |u| u.path().to_string());
        Self::api(context, ApiErrorKind::Network(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// so a failure reads as the path through the code that produced it.
///
/// ```ignore
/// use qgen_review::error::ErrorContext;
///
/// backend
///     .save_tuples(project, Stage::Approved, &picked)
///     .context("approving tuples")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<QgenError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: QgenError, new_ctx: &str) -> QgenError {
    match err {
        QgenError::Api {
            context: existing,
            source,
        } => QgenError::Api {
            context: chain_context(new_ctx, &existing),
            source,
        },
        QgenError::Io {
            path,
            message,
            source,
        } => QgenError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        QgenError::Config(msg) => QgenError::Config(chain_context(new_ctx, &msg)),
        QgenError::Validation(msg) => QgenError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
