//! Error types for the infographic library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`InfographicError`]. Request-facing errors additionally know the HTTP
//! status and the fixed user-facing message they are reported with.
//!
//! # Examples
//!
//! ```
//! use infographic::error::{InfographicError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(InfographicError::invalid_input("text field is missing"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! ```

use std::borrow::Cow;
use std::io;

use thiserror::Error;

/// Message returned when the `text` field is missing or malformed.
pub const INVALID_INPUT_MESSAGE: &str = "Текст не предоставлен или имеет неверный формат";

/// Message returned when the text exceeds the default length bound.
/// Other bounds are reported through [`too_long_message`].
pub const TOO_LONG_MESSAGE: &str = "Текст слишком длинный. Максимум 5000 символов.";

/// User-facing message for a text longer than `max` characters.
pub fn too_long_message(max: usize) -> String {
    format!("Текст слишком длинный. Максимум {max} символов.")
}

/// Message returned for any unexpected failure during analysis.
pub const INTERNAL_ERROR_MESSAGE: &str = "Произошла ошибка при анализе текста";

/// The main error type for infographic operations.
#[derive(Error, Debug)]
pub enum InfographicError {
    /// The request payload has no usable `text` field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The text is longer than the accepted bound.
    #[error("Text too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },

    /// Analysis-related errors (pattern compilation, tokenization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Preference store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with InfographicError.
pub type Result<T> = std::result::Result<T, InfographicError>;

impl InfographicError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        InfographicError::InvalidInput(msg.into())
    }

    /// Create a new too-long error.
    pub fn too_long(len: usize, max: usize) -> Self {
        InfographicError::TooLong { len, max }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        InfographicError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        InfographicError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        InfographicError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        InfographicError::Other(msg.into())
    }

    /// Whether the error was caused by the caller rather than by the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InfographicError::InvalidInput(_) | InfographicError::TooLong { .. }
        )
    }

    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    /// Message shown to the caller. Internal details never leak here.
    pub fn user_message(&self) -> Cow<'static, str> {
        match self {
            InfographicError::InvalidInput(_) => Cow::Borrowed(INVALID_INPUT_MESSAGE),
            InfographicError::TooLong { max, .. } => Cow::Owned(too_long_message(*max)),
            _ => Cow::Borrowed(INTERNAL_ERROR_MESSAGE),
        }
    }
}
