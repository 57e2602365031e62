//! Driver error types and process exit codes.
//!
//! Internal negative status codes from the runtime are normalized to
//! these exit codes, never returned verbatim.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for successful execution.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for compile/runtime failures and export-shape errors.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for configuration errors and unopenable files.
pub const EXIT_USAGE_ERROR: u8 = 2;

/// I/O failures while acquiring or writing driver streams.
#[derive(Debug, Error)]
pub enum CliError {
    /// The program file named on the command line could not be opened.
    #[error("cannot open program file '{path}': {source}", path = .path.display())]
    InputOpen {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The output destination could not be opened for writing.
    #[error("cannot open output file '{path}': {source}", path = .path.display())]
    OutputOpen {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Writing the exported artifact failed.
    #[error("cannot write output '{target}': {source}")]
    OutputWrite {
        /// The destination, as shown to the user (`-` for stdout).
        target: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl CliError {
    /// The exit code this error terminates the process with.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputOpen { .. } | Self::OutputOpen { .. } => EXIT_USAGE_ERROR,
            Self::OutputWrite { .. } => EXIT_FAILURE,
        }
    }
}

/// Normalize a runtime status code to a process exit code.
#[must_use]
pub fn status_to_exit(status: i32) -> u8 {
    if status == 0 {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
