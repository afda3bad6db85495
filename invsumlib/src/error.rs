//! Error types for invsumlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inventory data or writing reports
#[derive(Error, Debug)]
pub enum InvsumError {
    /// Input file does not exist
    #[error("input file '{0}' not found")]
    InputNotFound(PathBuf),

    /// Failed to read or parse the input as delimited text
    #[error("failed to load '{path}': {source}")]
    Load {
        path: PathBuf,
        source: csv::Error,
    },

    /// The input has no header row
    #[error("no columns to parse from '{0}'")]
    EmptyInput(PathBuf),

    /// A data record carries more fields than the header declares
    #[error("'{path}': expected {expected} fields on line {line}, saw {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to create the output directory
    #[error("failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a summary report
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: csv::Error,
    },
}

impl InvsumError {
    /// Whether this error aborts a run (as opposed to failing a single report).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, InvsumError::Write { .. })
    }
}
