//! CoNLL document writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use conll_model::{Document, Sentence, WriterOptions};
use tracing::{debug, debug_span};

use crate::buffer::FieldBuffer;
use crate::error::{Result, WriterError};
use crate::format::FormatDescriptor;
use crate::row::SentenceRows;

/// Counts for one written document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub sentences: usize,
    pub tokens: usize,
}

/// Writes sentence blocks to a text sink.
///
/// Each block is an optional header line, one line per token and a blank
/// line. A failed write leaves the current block truncated.
pub struct ConllWriter<W: Write> {
    writer: BufWriter<W>,
    descriptor: Arc<FormatDescriptor>,
    buffer: FieldBuffer,
    include_header: bool,
}

impl<W: Write> ConllWriter<W> {
    /// Compile `options` and create a writer over `sink`.
    ///
    /// # Errors
    ///
    /// Fails on an unsupported encoding or a malformed row format.
    pub fn new(sink: W, options: &WriterOptions) -> Result<Self> {
        let descriptor = compile_options(options)?;
        Ok(Self::with_descriptor(sink, descriptor, options.include_header))
    }

    /// Create a writer from an already compiled layout.
    ///
    /// The descriptor can be shared between writers; each writer keeps its own
    /// field buffer.
    pub fn with_descriptor(
        sink: W,
        descriptor: Arc<FormatDescriptor>,
        include_header: bool,
    ) -> Self {
        Self {
            writer: BufWriter::new(sink),
            buffer: FieldBuffer::new(Arc::clone(&descriptor)),
            descriptor,
            include_header,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &Arc<FormatDescriptor> {
        &self.descriptor
    }

    /// Write every sentence of `doc` in span order.
    pub fn write_document(&mut self, doc: &Document) -> Result<WriteSummary> {
        let mut summary = WriteSummary::default();
        for sentence in doc.sentences() {
            summary.tokens += self.write_sentence(doc, sentence)?;
            summary.sentences += 1;
        }
        debug!(
            document = doc.id.as_deref().unwrap_or("-"),
            sentences = summary.sentences,
            tokens = summary.tokens,
            "wrote document"
        );
        Ok(summary)
    }

    /// Write one sentence block and return the number of rows written.
    pub fn write_sentence(&mut self, doc: &Document, sentence: &Sentence) -> Result<usize> {
        let rows = SentenceRows::build(doc, sentence);
        let _span = debug_span!(
            "sentence",
            begin = sentence.span.begin,
            tokens = rows.len(),
            predicates = rows.predicate_count()
        )
        .entered();

        if self.include_header {
            writeln!(self.writer, "{}", self.descriptor.header())?;
        }
        for row in rows.rows() {
            rows.populate(row, &mut self.buffer);
            self.buffer.write_line(&mut self.writer)?;
        }
        writeln!(self.writer)?;
        Ok(rows.len())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| WriterError::Io(err.into_error()))
    }
}

impl ConllWriter<File> {
    /// Create a file for writing.
    pub fn create(path: &Path, options: &WriterOptions) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file, options)
    }
}

/// Validate the encoding and compile the row format of `options`.
///
/// # Errors
///
/// Fails on an unsupported encoding or a malformed row format.
pub fn compile_options(options: &WriterOptions) -> Result<Arc<FormatDescriptor>> {
    check_encoding(&options.encoding)?;
    let descriptor = FormatDescriptor::compile(&options.row_format, &options.field_separator)?;
    Ok(Arc::new(descriptor))
}

/// Write `doc` to the file at `path`.
pub fn write_conll(path: &Path, doc: &Document, options: &WriterOptions) -> Result<WriteSummary> {
    let mut writer = ConllWriter::create(path, options)?;
    let summary = writer.write_document(doc)?;
    writer.flush()?;
    Ok(summary)
}

/// Render `doc` into a string.
pub fn to_conll_string(doc: &Document, options: &WriterOptions) -> Result<String> {
    let mut writer = ConllWriter::new(Vec::new(), options)?;
    writer.write_document(doc)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes)
        .map_err(|err| WriterError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Output file for a document stem: `dir/<stem><filename_suffix>`.
#[must_use]
pub fn output_path(dir: &Path, stem: &str, options: &WriterOptions) -> PathBuf {
    dir.join(format!("{stem}{}", options.filename_suffix))
}

/// Accept the spellings of UTF-8 (`UTF-8`, `utf8`, `UTF_8`, ...).
fn check_encoding(encoding: &str) -> Result<()> {
    let normalized: String = encoding
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .collect::<String>()
        .to_ascii_lowercase();
    if normalized == "utf8" {
        Ok(())
    } else {
        Err(WriterError::unsupported_encoding(encoding))
    }
}
