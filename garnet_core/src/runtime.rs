//! The narrow interface between the CLI driver and a Garnet runtime.
//!
//! The driver never reaches into runtime internals: it compiles, loads,
//! and executes through [`Runtime`], and learns about failures only via
//! the [`ExceptionReport`](crate::trace::ExceptionReport) snapshot.

use crate::trace::ExceptionReport;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Options attached to a single compile request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileContext {
    /// Name the compiler records for the input (a path, `-e`, or `-`).
    pub filename: String,
    /// Request the compiler's dump output (verbose mode).
    pub dump_result: bool,
    /// Compile only; suppress execution of the result.
    pub no_exec: bool,
}

impl CompileContext {
    /// Create a context for the given input name with defaults off.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            dump_result: false,
            no_exec: false,
        }
    }
}

/// Handle to a program registered inside the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub usize);

/// Result marker of a compile request.
///
/// Only [`CompileOutcome::Success`] carries a program that may be
/// executed or exported; the other variants are the failure and
/// undefined markers of the compile interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The program compiled and was registered under this handle.
    Success(ProgramId),
    /// The compiler signalled failure with a negative code.
    Failed(i64),
    /// Compilation never produced a value.
    Undefined,
}

impl CompileOutcome {
    /// The compiled program handle, if compilation succeeded.
    #[must_use]
    pub fn program(&self) -> Option<ProgramId> {
        match self {
            Self::Success(id) => Some(*id),
            Self::Failed(_) | Self::Undefined => None,
        }
    }
}

/// Failure to load a precompiled bytecode image.
///
/// `code` is the runtime's negative status; the driver normalizes it to
/// a nonzero process exit and never returns it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadError {
    /// Negative status code reported by the runtime.
    pub code: i64,
    /// Human-readable description of the failure.
    pub message: String,
}

impl LoadError {
    /// Create a load error from a runtime status code and message.
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The language runtime as seen by the command-line driver.
///
/// Implementations own the lexer, parser, compiler, virtual machine,
/// and interactive shell. The driver calls exactly these operations and
/// nothing else.
pub trait Runtime {
    /// Populate the program-argument vector visible to executed code.
    fn set_program_args(&mut self, args: Vec<String>);

    /// Compile source text read from a stream.
    fn compile_stream(&mut self, input: &mut dyn Read, ctx: &CompileContext) -> CompileOutcome;

    /// Compile source text held in memory.
    fn compile_string(&mut self, source: &str, ctx: &CompileContext) -> CompileOutcome;

    /// Load a precompiled bytecode image from a stream.
    fn load_image(&mut self, input: &mut dyn Read) -> Result<ProgramId, LoadError>;

    /// Instantiate the program's entry point and execute it against the
    /// top-level receiver. Failures surface through
    /// [`Runtime::pending_exception`].
    fn execute(&mut self, program: ProgramId);

    /// Take the pending exception left by the last compile or execute,
    /// if any, as a read-only failure snapshot. Clears the pending
    /// state.
    fn pending_exception(&mut self) -> Option<ExceptionReport>;

    /// Write the compiled program as a raw binary bytecode image.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the output stream.
    fn dump_image(&mut self, program: ProgramId, out: &mut dyn Write) -> io::Result<()>;

    /// Write the compiled program as an embeddable C source array named
    /// `symbol`.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the output stream.
    fn dump_source_array(
        &mut self,
        program: ProgramId,
        symbol: &str,
        out: &mut dyn Write,
    ) -> io::Result<()>;

    /// Run the interactive read-eval-print loop to completion and
    /// return its status code.
    fn run_shell(&mut self) -> i32;
}
