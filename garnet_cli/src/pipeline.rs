//! Execution dispatch: configuration + streams → runtime actions.
//!
//! One mode runs per invocation: the interactive shell, a precompiled
//! bytecode image, or source compilation (with optional artifact
//! export). All failure paths converge on returned exit statuses;
//! stream handles release by drop.

use crate::args::Source;
use crate::config::{ExportFormat, RunConfig};
use crate::diagnostics;
use crate::error::{self, CliError, EXIT_FAILURE, EXIT_SUCCESS};
use crate::streams::{self, InputStream, OutputStream};
use garnet_core::{CompileContext, CompileOutcome, Runtime};
use std::io::Write as _;

/// Dispatch one resolved invocation and return its exit status.
#[must_use]
pub fn dispatch(runtime: &mut dyn Runtime, config: &RunConfig) -> u8 {
    if wants_shell(config, streams::stdin_is_interactive()) {
        return error::status_to_exit(runtime.run_shell());
    }

    runtime.set_program_args(config.program_args.iter().map(|s| (*s).to_string()).collect());

    let result = if config.bytecode && !matches!(config.source, Source::Command(_)) {
        run_bytecode(runtime, config)
    } else {
        run_source(runtime, config)
    };

    match result {
        Ok(status) => status,
        Err(err) => {
            eprintln!("garnet: {err}");
            err.exit_code()
        }
    }
}

/// Whether this invocation falls through to the interactive shell:
/// nothing was named as input, no artifact was requested, and standard
/// input is a terminal.
fn wants_shell(config: &RunConfig, stdin_interactive: bool) -> bool {
    matches!(config.source, Source::Stdin { explicit: false })
        && config.export.is_none()
        && stdin_interactive
}

fn open_input(config: &RunConfig) -> Result<Option<InputStream>, CliError> {
    match config.source {
        Source::File(path) => Ok(Some(InputStream::open(path)?)),
        Source::Stdin { .. } => Ok(Some(InputStream::stdin())),
        Source::Command(_) => Ok(None),
    }
}

fn run_bytecode(runtime: &mut dyn Runtime, config: &RunConfig) -> Result<u8, CliError> {
    // Command sources are routed to run_source by the caller.
    let Some(mut input) = open_input(config)? else {
        return Ok(EXIT_FAILURE);
    };

    let program = match runtime.load_image(&mut input) {
        Ok(program) => program,
        Err(err) => {
            eprintln!(
                "garnet: failed to load bytecode file '{}': {err}",
                config.source_name()
            );
            return Ok(EXIT_FAILURE);
        }
    };
    drop(input);

    if config.check_syntax {
        return Ok(EXIT_SUCCESS);
    }

    runtime.execute(program);
    if let Some(report) = runtime.pending_exception() {
        diagnostics::report_failure(&report);
        return Ok(EXIT_FAILURE);
    }
    Ok(EXIT_SUCCESS)
}

fn run_source(runtime: &mut dyn Runtime, config: &RunConfig) -> Result<u8, CliError> {
    // Both streams are acquired before the runtime is involved, so an
    // unopenable destination is reported without compiling anything.
    let input = open_input(config)?;
    let mut output = match &config.export {
        Some(export) => Some(OutputStream::open(&export.target)?),
        None => None,
    };

    let mut ctx = CompileContext::new(config.source_name());
    ctx.dump_result = config.verbose;
    ctx.no_exec = config.no_exec();

    let outcome = match (config.source, input) {
        (Source::Command(text), _) => runtime.compile_string(text.as_ref(), &ctx),
        (_, Some(mut input)) => runtime.compile_stream(&mut input, &ctx),
        // open_input returns a stream for every non-command source.
        (_, None) => return Ok(EXIT_FAILURE),
    };

    if let Some(export) = &config.export {
        let CompileOutcome::Success(program) = outcome else {
            // Export-result shape error: abort without reporting.
            return Ok(EXIT_FAILURE);
        };
        let Some(out) = output.as_mut() else {
            return Ok(EXIT_FAILURE);
        };
        let written = match export.format {
            ExportFormat::SourceArray(symbol) => runtime.dump_source_array(program, symbol, out),
            ExportFormat::Binary => runtime.dump_image(program, out),
        }
        .and_then(|()| out.flush());
        if let Err(source) = written {
            return Err(CliError::OutputWrite {
                target: export.target.to_string(),
                source,
            });
        }
    }

    if let Some(report) = runtime.pending_exception() {
        // An undefined compile result never reached a reportable point.
        if outcome != CompileOutcome::Undefined {
            diagnostics::report_failure(&report);
        }
        return Ok(EXIT_FAILURE);
    }

    if config.check_syntax {
        println!("Syntax OK");
    }
    Ok(EXIT_SUCCESS)
}
