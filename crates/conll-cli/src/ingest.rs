//! Reading annotation documents produced by the upstream pipeline.
//!
//! Documents are JSON serializations of [`conll_model::Document`]. Inputs may
//! be files or directories; directories contribute their `*.json` files in
//! name order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use conll_model::Document;
use tracing::debug;

/// Expand inputs into the list of document files, in order.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(list_json_files(input)?);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("input not found: {}", input.display());
        }
    }
    Ok(files)
}

/// Lists all JSON files in a directory, sorted by filename.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("read directory {}", dir.display()))?
            .path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        }
    }
    files.sort();
    debug!(dir = %dir.display(), files = files.len(), "discovered documents");
    Ok(files)
}

/// Read and validate one document.
///
/// A document without an id takes its file stem.
pub fn read_document(path: &Path) -> Result<Document> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut doc: Document =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    doc.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    if doc.id.is_none() {
        doc.id = Some(document_stem(path));
    }
    Ok(doc)
}

/// File stem used to name a document's output.
pub fn document_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
