//! Configuration options for CoNLL output.

use serde::{Deserialize, Serialize};

/// Row template producing the full 14-column CoNLL-2009 layout.
pub const DEFAULT_CONLL2009_ROW_FORMAT: &str = "${form}, ${lemma}, ${plemma}, ${pos}, ${ppos}, \
${feat}, ${pfeat}, ${head}, ${phead}, ${deprel}, ${pdeprel}, ${fillpred}, ${pred}, ${apreds}";

/// Default separator placed between field values.
pub const DEFAULT_FIELD_SEPARATOR: &str = "\t";

/// Default suffix appended to output file stems.
pub const DEFAULT_FILENAME_SUFFIX: &str = ".conll";

/// Default output encoding.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Options controlling how documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Output character encoding. Only UTF-8 is supported.
    pub encoding: String,

    /// Suffix for output files (e.g. `.conll`).
    pub filename_suffix: String,

    /// Emit a header line before every sentence block.
    pub include_header: bool,

    /// Comma-separated list of `${field}` placeholders selecting the columns.
    /// An empty template selects the default CoNLL-2009 layout.
    pub row_format: String,

    /// Separator between field values within a row.
    pub field_separator: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            filename_suffix: DEFAULT_FILENAME_SUFFIX.to_string(),
            include_header: true,
            row_format: DEFAULT_CONLL2009_ROW_FORMAT.to_string(),
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
        }
    }
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn with_filename_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.filename_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    #[must_use]
    pub fn with_row_format(mut self, row_format: impl Into<String>) -> Self {
        self.row_format = row_format.into();
        self
    }

    #[must_use]
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WriterOptions::default();
        assert_eq!(options.encoding, "UTF-8");
        assert_eq!(options.filename_suffix, ".conll");
        assert!(options.include_header);
        assert_eq!(options.row_format, DEFAULT_CONLL2009_ROW_FORMAT);
        assert_eq!(options.field_separator, "\t");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: WriterOptions =
            serde_json::from_str(r#"{"field_separator": "|", "include_header": false}"#)
                .expect("deserialize options");
        assert_eq!(options.field_separator, "|");
        assert!(!options.include_header);
        assert_eq!(options.filename_suffix, ".conll");
    }
}
