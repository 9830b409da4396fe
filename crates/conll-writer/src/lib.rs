//! CoNLL writer.
//!
//! Converts sentence annotation graphs into CoNLL-style tabular text:
//!
//! - [`FormatDescriptor`]: a row format (`${form}, ${pos}, ...`) compiled into
//!   a column layout and header
//! - [`FieldBuffer`]: the single-row working set printed through a layout
//! - [`SentenceRows`]: one row per token, with dependency heads and
//!   predicate-argument columns resolved
//! - [`ConllWriter`]: writes sentence blocks to any [`std::io::Write`] sink
//!
//! # Example
//!
//! ```
//! use conll_model::{Document, Token, WriterOptions};
//! use conll_writer::to_conll_string;
//!
//! let mut doc = Document::new("Dogs bark.");
//! doc.add_sentence(0, 10);
//! let dogs = doc.add_token(Token::new(0, 4).with_pos("NNS"));
//! let bark = doc.add_token(Token::new(5, 9).with_pos("VBZ"));
//! doc.add_token(Token::new(9, 10).with_pos("."));
//! doc.add_dependency(bark, dogs, "nsubj");
//! doc.add_dependency(bark, bark, "root");
//!
//! let options = WriterOptions::default()
//!     .with_header(false)
//!     .with_row_format("${form}, ${pos}, ${head}, ${deprel}");
//! let output = to_conll_string(&doc, &options).unwrap();
//! assert_eq!(output, "1\tDogs\tNNS\t2\tnsubj\n2\tbark\tVBZ\t0\troot\n3\t.\t.\t_\t_\n\n");
//! ```

mod buffer;
mod error;
mod format;
mod row;
mod writer;

pub use buffer::{FieldBuffer, UNUSED};
pub use error::{Result, WriterError};
pub use format::{FormatBuilder, FormatDescriptor};
pub use row::{Head, Row, SentenceRows};
pub use writer::{
    ConllWriter, WriteSummary, compile_options, output_path, to_conll_string, write_conll,
};

pub use conll_model::{DEFAULT_CONLL2009_ROW_FORMAT, FieldName, WriterOptions};
