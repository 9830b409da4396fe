//! Per-document conversion: read, write, summarize.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use conll_model::WriterOptions;
use conll_writer::{ConllWriter, FormatDescriptor, output_path};
use tracing::{debug, info};

use crate::ingest::{document_stem, read_document};

/// Outcome of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub document: String,
    pub sentences: usize,
    pub tokens: usize,
    /// Written file, or `None` when the document went to a shared sink.
    pub output: Option<PathBuf>,
}

/// Totals over a conversion run.
#[derive(Debug, Default)]
pub struct ConvertResult {
    pub documents: Vec<DocumentSummary>,
    pub errors: Vec<String>,
}

impl ConvertResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn total_sentences(&self) -> usize {
        self.documents.iter().map(|doc| doc.sentences).sum()
    }

    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.documents.iter().map(|doc| doc.tokens).sum()
    }
}

/// Output file for `input`: `<output_dir>/<stem><suffix>`, or next to the input.
#[must_use]
pub fn target_path(input: &Path, output_dir: Option<&Path>, options: &WriterOptions) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    output_path(&dir, &document_stem(input), options)
}

/// Convert the document at `input` into `<output_dir>/<stem><suffix>`.
///
/// Without an output directory the file is written next to the input.
pub fn convert_file(
    input: &Path,
    output_dir: Option<&Path>,
    options: &WriterOptions,
    descriptor: &Arc<FormatDescriptor>,
) -> Result<DocumentSummary> {
    let doc = read_document(input)?;
    let path = target_path(input, output_dir, options);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut writer =
        ConllWriter::with_descriptor(file, Arc::clone(descriptor), options.include_header);
    let summary = writer
        .write_document(&doc)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;

    info!(
        output = %path.display(),
        sentences = summary.sentences,
        tokens = summary.tokens,
        "converted document"
    );
    Ok(DocumentSummary {
        document: doc.id.unwrap_or_else(|| document_stem(input)),
        sentences: summary.sentences,
        tokens: summary.tokens,
        output: Some(path),
    })
}

/// Convert every input into one shared sink (e.g. stdout).
///
/// Unreadable documents are recorded and skipped; a failed write stops the run.
pub fn convert_to_sink<W: Write>(
    inputs: &[PathBuf],
    sink: W,
    options: &WriterOptions,
    descriptor: &Arc<FormatDescriptor>,
) -> Result<ConvertResult> {
    let mut result = ConvertResult::default();
    let mut writer =
        ConllWriter::with_descriptor(sink, Arc::clone(descriptor), options.include_header);
    for input in inputs {
        let doc = match read_document(input) {
            Ok(doc) => doc,
            Err(error) => {
                tracing::error!(input = %input.display(), "{error:#}");
                result.errors.push(format!("{error:#}"));
                continue;
            }
        };
        let summary = writer.write_document(&doc).context("write output")?;
        debug!(input = %input.display(), tokens = summary.tokens, "converted document");
        result.documents.push(DocumentSummary {
            document: doc.id.unwrap_or_else(|| document_stem(input)),
            sentences: summary.sentences,
            tokens: summary.tokens,
            output: None,
        });
    }
    writer.flush().context("write output")?;
    Ok(result)
}

/// Convert each input into its own file, recording failures per document.
///
/// An input whose output path was already written earlier in the run is
/// recorded as an error and left unwritten.
pub fn convert_files(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    options: &WriterOptions,
    descriptor: &Arc<FormatDescriptor>,
) -> ConvertResult {
    let mut result = ConvertResult::default();
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    for input in inputs {
        let path = target_path(input, output_dir, options);
        if let Some(first) = claimed.get(&path) {
            let error = format!(
                "{} would overwrite {} already written for {}",
                input.display(),
                path.display(),
                first.display()
            );
            tracing::error!(input = %input.display(), "{error}");
            result.errors.push(error);
            continue;
        }
        match convert_file(input, output_dir, options, descriptor) {
            Ok(summary) => {
                claimed.insert(path, input);
                result.documents.push(summary);
            }
            Err(error) => {
                tracing::error!(input = %input.display(), "{error:#}");
                result.errors.push(format!("{error:#}"));
            }
        }
    }
    result
}
