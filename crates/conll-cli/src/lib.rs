//! CLI library components for the CoNLL writer.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod pipeline;
