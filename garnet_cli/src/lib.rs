//! # Garnet CLI
//!
//! The command-line driver for the Garnet bytecode toolchain.
//!
//! The driver turns process arguments into a run configuration, loads a
//! script or a precompiled bytecode image, drives compilation,
//! execution, and artifact export through a [`Runtime`] implementation,
//! and reconstructs a printable backtrace when execution leaves a
//! pending exception.
//!
//! The virtual machine, compiler, and interactive shell live behind the
//! [`Runtime`] trait from `garnet_core`; an embedder links this driver
//! against its runtime:
//!
//! ```ignore
//! fn main() -> std::process::ExitCode {
//!     let raw_args: Vec<String> = std::env::args().skip(1).collect();
//!     let mut runtime = garnet_vm::VirtualMachine::new();
//!     garnet_cli::run(&mut runtime, &raw_args)
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod pipeline;
pub mod streams;

use args::Invocation;
use config::RunConfig;
use garnet_core::Runtime;
use std::process::ExitCode;

/// Program name used in usage and error output.
const PROGRAM: &str = "garnet";

/// Parse arguments (program name already stripped), dispatch one mode,
/// and return the exit status as a raw `u8`.
///
/// Useful for embedders that manage process exit themselves; [`run`]
/// wraps this into [`ExitCode`].
#[must_use]
pub fn run_status(runtime: &mut dyn Runtime, raw_args: &[String]) -> u8 {
    let invocation = match args::parse_args_vec(raw_args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("{PROGRAM}: {err}");
            eprint!("{}", args::usage_text(PROGRAM));
            return error::EXIT_USAGE_ERROR;
        }
    };

    let parsed = match invocation {
        Invocation::ShowVersion => {
            println!("{}", garnet_core::version_banner());
            return error::EXIT_SUCCESS;
        }
        Invocation::ShowCopyright => {
            println!("{}", garnet_core::copyright_banner());
            return error::EXIT_SUCCESS;
        }
        Invocation::Run(parsed) => parsed,
    };

    if parsed.show_version {
        println!("{}", garnet_core::version_banner());
    }

    let config = RunConfig::resolve(&parsed);
    pipeline::dispatch(runtime, &config)
}

/// Parse arguments, dispatch one mode, and return the process exit
/// code.
#[must_use]
pub fn run(runtime: &mut dyn Runtime, raw_args: &[String]) -> ExitCode {
    ExitCode::from(run_status(runtime, raw_args))
}
