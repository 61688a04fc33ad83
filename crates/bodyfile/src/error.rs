use std::{io, path::PathBuf};

use thiserror::Error;

/// A single input line that could not be turned into a record.
///
/// Always recoverable: the driver logs it and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid bodyfile format: expected {expected} fields, got {got}")]
    MalformedLine { expected: &'static str, got: usize },
}

/// Failures that stop a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to open input file {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("error reading input file at line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("{}: {source}", write_context(*line))]
    Write {
        line: Option<usize>,
        source: csv::Error,
    },

    #[error("failed to flush CSV output: {source}")]
    Flush { source: io::Error },
}

fn write_context(line: Option<usize>) -> String {
    match line {
        Some(n) => format!("failed to write CSV record at line {n}"),
        None => "failed to write CSV header".to_string(),
    }
}

impl ConvertError {
    /// Input line number the failure is attributed to, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::Read { line, .. } => Some(*line),
            ConvertError::Write { line, .. } => *line,
            _ => None,
        }
    }
}
