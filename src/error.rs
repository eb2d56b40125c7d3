//! Error types for the simulator.
//!
//! Every failure (unreadable file, malformed line, rejected workload, report
//! serialization) surfaces as one [`Error`] variant; the binary prints its
//! `Display` form after `Error: ` and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulator error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid data format on line {line_number} ({reason}): {line:?}")]
    Format {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
