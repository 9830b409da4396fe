use thiserror::Error;

use crate::span::Span;

/// Errors raised while building or validating an annotation document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A span whose end precedes its begin.
    #[error("inverted span {span}")]
    InvertedSpan { span: Span },

    /// A span reaching past the end of the document text.
    #[error("span {span} exceeds document text length {len}")]
    SpanOutOfRange { span: Span, len: usize },

    /// A span that does not fall on UTF-8 character boundaries.
    #[error("span {span} does not fall on character boundaries")]
    SpanNotOnCharBoundary { span: Span },

    /// A dependency arc naming a token that does not exist.
    #[error("dependency {index} references unknown token {token}")]
    UnknownToken { index: usize, token: usize },

    /// Unknown CoNLL field name.
    #[error("unknown field name: {name}")]
    UnknownField { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
