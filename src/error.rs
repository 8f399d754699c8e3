//! Unified error types for vex-tools.
//!
//! Only the parsing and canonical-encoding boundaries are fallible. Matching
//! and effective statement resolution are total: a missing match is an empty
//! result or `None`, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vex-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VexError {
    /// Errors while reading structured VEX data
    #[error("Failed to parse VEX data: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while building the canonical encoding of a document
    #[error("Canonical encoding failed: {context}")]
    Encoding {
        context: String,
        #[source]
        source: EncodingErrorKind,
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

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unsupported document context: {0}")]
    UnsupportedContext(String),
}

/// Specific canonical encoding error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodingErrorKind {
    #[error("Document has no timestamp")]
    MissingTimestamp,

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for vex-tools operations
pub type Result<T> = std::result::Result<T, VexError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl VexError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an out-of-vocabulary field value
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::parse(
            "invalid field value",
            ParseErrorKind::InvalidValue {
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// The parse error kind carried by this error. Other variants are
    /// rendered into [`ParseErrorKind::InvalidJson`].
    #[must_use]
    pub fn into_parse_kind(self) -> ParseErrorKind {
        match self {
            Self::Parse { source, .. } => source,
            other => ParseErrorKind::InvalidJson(other.to_string()),
        }
    }

    /// Create an encoding error with context
    pub fn encoding(context: impl Into<String>, source: EncodingErrorKind) -> Self {
        Self::Encoding {
            context: context.into(),
            source,
        }
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
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for VexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for VexError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain such as `"loading vex.json: JSON deserialization"`.
///
/// ```ignore
/// use vex_tools::error::ErrorContext;
///
/// let doc = Document::load(path)
///     .with_context(|| format!("loading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VexError>> ErrorContext<T> for std::result::Result<T, E> {
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
fn add_context_to_error(err: VexError, new_ctx: &str) -> VexError {
    match err {
        VexError::Parse {
            context: existing,
            source,
        } => VexError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VexError::Encoding {
            context: existing,
            source,
        } => VexError::Encoding {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VexError::Io {
            path,
            message,
            source,
        } => VexError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        VexError::Config(msg) => VexError::Config(chain_context(new_ctx, &msg)),
        VexError::Validation(msg) => VexError::Validation(chain_context(new_ctx, &msg)),
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
