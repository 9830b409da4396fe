//! Error types for CoNLL writing.

use conll_model::FieldName;
use thiserror::Error;

/// Errors that can occur when compiling a row format or writing rows.
#[derive(Debug, Error)]
pub enum WriterError {
    /// A template segment that is not a `${name}` placeholder.
    #[error("malformed placeholder {token:?} at position {position}: expected `${{name}}`")]
    MalformedPlaceholder { token: String, position: usize },

    /// The same field selected twice.
    #[error("field {field} appears more than once in the row format")]
    DuplicateField { field: FieldName },

    /// Output encoding other than UTF-8.
    #[error("unsupported output encoding: {encoding} (only UTF-8 is supported)")]
    UnsupportedEncoding { encoding: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for writer operations.
pub type Result<T> = std::result::Result<T, WriterError>;

impl WriterError {
    /// Create a MalformedPlaceholder error.
    pub fn malformed_placeholder(token: impl Into<String>, position: usize) -> Self {
        Self::MalformedPlaceholder {
            token: token.into(),
            position,
        }
    }

    /// Create an UnsupportedEncoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }

    /// True for errors raised while compiling configuration, before any output.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
