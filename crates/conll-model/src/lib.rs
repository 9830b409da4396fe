//! Data model for CoNLL serialization.
//!
//! - [`Document`]: a text with stand-off annotation layers (sentences, tokens,
//!   morphology, dependency arcs, semantic predicates and arguments)
//! - [`FieldName`]: the closed CoNLL-2009 column vocabulary
//! - [`WriterOptions`]: output configuration (template, separator, header, ...)

pub mod document;
pub mod error;
pub mod field;
pub mod options;
pub mod span;

pub use document::{
    Dependency, Document, MorphologicalFeatures, SemanticArgument, SemanticPredicate, Sentence,
    Token, TokenId,
};
pub use error::{ModelError, Result};
pub use field::FieldName;
pub use options::{
    DEFAULT_CONLL2009_ROW_FORMAT, DEFAULT_ENCODING, DEFAULT_FIELD_SEPARATOR,
    DEFAULT_FILENAME_SUFFIX, WriterOptions,
};
pub use span::Span;
