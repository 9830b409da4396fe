//! Writer option resolution: defaults, an optional JSON file, then flags.

use std::path::Path;

use anyhow::{Context, Result};
use conll_model::WriterOptions;

/// Command-line overrides applied on top of the loaded options.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub row_format: Option<String>,
    pub field_separator: Option<String>,
    pub no_header: bool,
    pub filename_suffix: Option<String>,
    pub encoding: Option<String>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: WriterOptions) -> WriterOptions {
        if let Some(row_format) = self.row_format {
            options.row_format = row_format;
        }
        if let Some(separator) = self.field_separator {
            options.field_separator = unescape_separator(&separator);
        }
        if self.no_header {
            options.include_header = false;
        }
        if let Some(suffix) = self.filename_suffix {
            options.filename_suffix = suffix;
        }
        if let Some(encoding) = self.encoding {
            options.encoding = encoding;
        }
        options
    }
}

/// Load options from a JSON file, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<WriterOptions> {
    let Some(path) = path else {
        return Ok(WriterOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Resolve the final options for a run.
pub fn resolve_options(config: Option<&Path>, overrides: OptionOverrides) -> Result<WriterOptions> {
    Ok(overrides.apply(load_options(config)?))
}

/// Turn shell-friendly escapes (`\t`, `\n`, `\\`) into the characters they name.
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_separator() {
        assert_eq!(unescape_separator("\\t"), "\t");
        assert_eq!(unescape_separator("|"), "|");
        assert_eq!(unescape_separator("a\\\\b"), "a\\b");
        assert_eq!(unescape_separator("\\x"), "\\x");
        assert_eq!(unescape_separator("\\"), "\\");
    }

    #[test]
    fn test_overrides_win_over_loaded_options() {
        let loaded = WriterOptions::default().with_field_separator("|");
        let options = OptionOverrides {
            row_format: Some("${form}".to_string()),
            no_header: true,
            ..OptionOverrides::default()
        }
        .apply(loaded);
        assert_eq!(options.row_format, "${form}");
        assert_eq!(options.field_separator, "|");
        assert!(!options.include_header);
        assert_eq!(options.filename_suffix, ".conll");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = load_options(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
