//! Run configuration derived from parsed arguments.
//!
//! Resolution happens before dispatch: by the time a [`RunConfig`]
//! exists, an export request has a concrete destination.

use crate::args::{GarnetArgs, Source};
use garnet_core::{BYTECODE_EXT, SOURCE_ARRAY_EXT};
use std::fmt;
use std::path::PathBuf;

/// Where an exported artifact is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// The process's standard output.
    Stdout,
    /// A named file, created or truncated.
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How an exported artifact is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat<'a> {
    /// Raw binary bytecode image.
    Binary,
    /// Embeddable C source array named by the symbol.
    SourceArray(&'a str),
}

/// A resolved export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export<'a> {
    /// Artifact encoding.
    pub format: ExportFormat<'a>,
    /// Destination stream.
    pub target: OutputTarget,
}

/// The resolved intent of one driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig<'a> {
    /// The active input source.
    pub source: &'a Source<'a>,
    /// Input is a precompiled bytecode image.
    pub bytecode: bool,
    /// Parse and compile but never execute.
    pub check_syntax: bool,
    /// Request compiler dump output.
    pub verbose: bool,
    /// Positional arguments forwarded to the executed program.
    pub program_args: &'a [&'a str],
    /// Export request with a concrete destination, when an artifact was
    /// asked for. `None` means the program runs (or is only checked).
    pub export: Option<Export<'a>>,
}

impl<'a> RunConfig<'a> {
    /// Resolve parsed arguments into a dispatchable configuration.
    ///
    /// An export is requested by `-O` or an explicit `-o`; syntax-check
    /// mode suppresses it. The destination falls back to standard
    /// output for inline-command and stdin input, and otherwise derives
    /// from the input path by extension substitution: `.c` when a
    /// symbol was supplied, `.gbc` otherwise.
    #[must_use]
    pub fn resolve(args: &'a GarnetArgs<'a>) -> Self {
        let target = if args.check_syntax {
            None
        } else if let Some(path) = args.output {
            if path.as_os_str() == "-" {
                Some(OutputTarget::Stdout)
            } else {
                Some(OutputTarget::File(path.to_path_buf()))
            }
        } else if args.compile {
            Some(match &args.source {
                Source::File(path) => {
                    let ext = if args.init_symbol.is_some() {
                        SOURCE_ARRAY_EXT
                    } else {
                        BYTECODE_EXT
                    };
                    OutputTarget::File(path.with_extension(ext))
                }
                Source::Command(_) | Source::Stdin { .. } => OutputTarget::Stdout,
            })
        } else {
            None
        };

        let export = target.map(|target| Export {
            format: match args.init_symbol {
                Some(symbol) => ExportFormat::SourceArray(symbol),
                None => ExportFormat::Binary,
            },
            target,
        });

        Self {
            source: &args.source,
            bytecode: args.bytecode,
            check_syntax: args.check_syntax,
            verbose: args.verbose,
            program_args: &args.program_args,
            export,
        }
    }

    /// The name recorded for the input in compile contexts and
    /// diagnostics.
    #[must_use]
    pub fn source_name(&self) -> String {
        self.source.name()
    }

    /// Whether the compile context suppresses execution: syntax-check
    /// mode, or an export whose artifact is emitted rather than run.
    #[must_use]
    pub fn no_exec(&self) -> bool {
        self.check_syntax || self.export.is_some()
    }
}
