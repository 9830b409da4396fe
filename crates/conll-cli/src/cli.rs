//! CLI argument definitions for the CoNLL writer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use conll_cli::config::OptionOverrides;
use conll_cli::logging::LogFormat;
use conll_model::FieldName;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "conll-writer",
    version,
    about = "Write annotated sentences as CoNLL-style tables",
    long_about = "Convert sentence annotation graphs (tokens, lemmas, POS tags, morphology,\n\
                  dependency arcs, predicate-argument structures) into CoNLL-2009 style\n\
                  tab-separated rows with a configurable column layout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert annotation documents (JSON) to CoNLL.
    Convert(ConvertArgs),

    /// List the supported fields.
    Fields,

    /// Print a row format selecting the given fields.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Document files or directories of `*.json` documents.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write all documents to stdout instead of files.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// JSON file with writer options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Row format, e.g. "${form}, ${pos}, ${head}, ${deprel}".
    #[arg(long = "row-format", value_name = "TEMPLATE")]
    pub row_format: Option<String>,

    /// Separator between fields; `\t` is accepted for a tab.
    #[arg(long = "separator", value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Do not write a header line before each sentence.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Suffix for output files.
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Output encoding (only UTF-8 is supported).
    #[arg(long = "encoding", value_name = "ENCODING")]
    pub encoding: Option<String>,
}

impl ConvertArgs {
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            row_format: self.row_format.clone(),
            field_separator: self.separator.clone(),
            no_header: self.no_header,
            filename_suffix: self.suffix.clone(),
            encoding: self.encoding.clone(),
        }
    }
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Fields in output order (form, lemma, pos, head, deprel, ...).
    #[arg(value_name = "FIELD", required = true)]
    pub fields: Vec<FieldName>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
