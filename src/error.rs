//! Defines custom error types for the application.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    // --- Environment ---
    #[error("Failed to run clipboard utility '{program}': {source}. Is it installed?")]
    ClipboardUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard utility '{program}' exited with {status}: {stderr}")]
    ClipboardFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Clipboard content is not valid UTF-8")]
    ClipboardEncoding,

    #[error("Failed to read table input from {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Malformed input ---
    #[error("No table rows found in the input. Copy the table body before running.")]
    EmptyTable,

    #[error("Malformed row on line {line}: expected at least 4 fields separated by two or more spaces, found {found}: {row:?}")]
    MalformedRow {
        line: usize,
        found: usize,
        row: String,
    },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    // --- Target file ---
    #[error("Target file has no '// Begin' marker")]
    MissingBeginMarker,

    #[error("Target file has no '// End' marker line after the last '// Begin' marker")]
    MissingEndMarker,
}
