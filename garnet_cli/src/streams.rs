//! Input and output stream acquisition.
//!
//! Streams are released by `Drop` on every exit path. The inherited
//! standard input and output handles are wrapped, never closed.

use crate::config::OutputTarget;
use crate::error::CliError;
use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

/// An open program-input stream.
#[derive(Debug)]
pub enum InputStream {
    /// A program file opened for reading.
    File(File),
    /// The process's inherited standard input.
    Stdin(io::Stdin),
}

impl InputStream {
    /// Open a program file for reading.
    ///
    /// # Errors
    ///
    /// [`CliError::InputOpen`] naming the offending path.
    pub fn open(path: &Path) -> Result<Self, CliError> {
        match File::open(path) {
            Ok(file) => Ok(Self::File(file)),
            Err(source) => Err(CliError::InputOpen {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Wrap the inherited standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::Stdin(io::stdin())
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Stdin(stdin) => stdin.read(buf),
        }
    }
}

/// An open artifact-output stream.
#[derive(Debug)]
pub enum OutputStream {
    /// The process's inherited standard output.
    Stdout(io::Stdout),
    /// A file created or truncated for writing.
    File(File),
}

impl OutputStream {
    /// Open the resolved output target for writing.
    ///
    /// # Errors
    ///
    /// [`CliError::OutputOpen`] naming the offending path.
    pub fn open(target: &OutputTarget) -> Result<Self, CliError> {
        match target {
            OutputTarget::Stdout => Ok(Self::Stdout(io::stdout())),
            OutputTarget::File(path) => match File::create(path) {
                Ok(file) => Ok(Self::File(file)),
                Err(source) => Err(CliError::OutputOpen {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stdout) => stdout.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.flush(),
            Self::File(file) => file.flush(),
        }
    }
}

/// Whether the process's standard input is an interactive terminal.
#[must_use]
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}
