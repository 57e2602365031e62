//! # Garnet Core
//!
//! Shared types and the runtime interface for the Garnet toolchain driver.
//!
//! This crate defines the narrow seam between the command-line driver
//! (`garnet_cli`) and a Garnet language runtime:
//!
//! - **Runtime Interface**: the [`Runtime`] trait covering compilation,
//!   bytecode image loading, execution, artifact export, and the
//!   interactive shell
//! - **Compile Model**: [`CompileContext`], [`CompileOutcome`], and
//!   [`ProgramId`] handles for loaded programs
//! - **Failure Snapshots**: [`ExceptionReport`] and the call-frame data
//!   consumed when reconstructing a backtrace

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod runtime;
pub mod trace;

pub use runtime::{CompileContext, CompileOutcome, LoadError, ProgramId, Runtime};
pub use trace::{CallFrame, Callee, CodeBlock, ExceptionReport, ScopeId};

/// Garnet toolchain version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extension (without dot) of a precompiled bytecode image.
pub const BYTECODE_EXT: &str = "gbc";

/// File extension (without dot) of an embeddable C source-array export.
pub const SOURCE_ARRAY_EXT: &str = "c";

/// The fixed version banner.
#[must_use]
pub fn version_banner() -> String {
    format!("garnet {VERSION}")
}

/// The fixed copyright banner.
#[must_use]
pub fn copyright_banner() -> String {
    format!("garnet {VERSION} - Copyright (c) the garnet developers")
}
