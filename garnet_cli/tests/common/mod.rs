//! Scripted runtime double for driver tests.
//!
//! `FakeRuntime` records every call the driver makes and answers with
//! preconfigured outcomes, so tests can assert on the exact sequence of
//! runtime interactions without a real compiler or VM.

use garnet_core::{
    CompileContext, CompileOutcome, ExceptionReport, LoadError, ProgramId, Runtime,
};
use std::io::{self, Read, Write};

/// Record of one compile request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCall {
    /// Source text (stream contents for stream compiles).
    pub source: String,
    /// The compile context the driver built.
    pub ctx: CompileContext,
    /// Whether the request came through `compile_stream`.
    pub from_stream: bool,
}

/// Record of one artifact dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpCall {
    pub program: ProgramId,
    /// The export symbol for source-array dumps; `None` for binary.
    pub symbol: Option<String>,
}

/// A runtime whose answers are scripted by the test.
pub struct FakeRuntime {
    /// Outcome returned by both compile entry points.
    pub compile_outcome: CompileOutcome,
    /// Result returned by `load_image`.
    pub load_result: Result<ProgramId, LoadError>,
    /// Snapshot handed out (once) by `pending_exception`.
    pub exception: Option<ExceptionReport>,
    /// Status returned by `run_shell`.
    pub shell_status: i32,
    /// Bytes written by `dump_image`.
    pub image_bytes: Vec<u8>,

    /// Program arguments the driver forwarded.
    pub program_args: Vec<String>,
    /// Every compile request, in order.
    pub compiles: Vec<CompileCall>,
    /// Every executed program, in order.
    pub executed: Vec<ProgramId>,
    /// Every artifact dump, in order.
    pub dumps: Vec<DumpCall>,
    /// Number of interactive-shell runs.
    pub shell_runs: usize,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self {
            compile_outcome: CompileOutcome::Success(ProgramId(0)),
            load_result: Ok(ProgramId(0)),
            exception: None,
            shell_status: 0,
            image_bytes: b"GBC\x00fake-image".to_vec(),
            program_args: Vec::new(),
            compiles: Vec::new(),
            executed: Vec::new(),
            dumps: Vec::new(),
            shell_runs: 0,
        }
    }

    pub fn with_compile_outcome(outcome: CompileOutcome) -> Self {
        Self {
            compile_outcome: outcome,
            ..Self::new()
        }
    }

    pub fn with_exception(report: ExceptionReport) -> Self {
        Self {
            exception: Some(report),
            ..Self::new()
        }
    }
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime for FakeRuntime {
    fn set_program_args(&mut self, args: Vec<String>) {
        self.program_args = args;
    }

    fn compile_stream(&mut self, input: &mut dyn Read, ctx: &CompileContext) -> CompileOutcome {
        let mut source = String::new();
        input.read_to_string(&mut source).expect("readable stream");
        self.compiles.push(CompileCall {
            source,
            ctx: ctx.clone(),
            from_stream: true,
        });
        self.compile_outcome
    }

    fn compile_string(&mut self, source: &str, ctx: &CompileContext) -> CompileOutcome {
        self.compiles.push(CompileCall {
            source: source.to_string(),
            ctx: ctx.clone(),
            from_stream: false,
        });
        self.compile_outcome
    }

    fn load_image(&mut self, input: &mut dyn Read) -> Result<ProgramId, LoadError> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes).expect("readable stream");
        self.load_result.clone()
    }

    fn execute(&mut self, program: ProgramId) {
        self.executed.push(program);
    }

    fn pending_exception(&mut self) -> Option<ExceptionReport> {
        self.exception.take()
    }

    fn dump_image(&mut self, program: ProgramId, out: &mut dyn Write) -> io::Result<()> {
        self.dumps.push(DumpCall {
            program,
            symbol: None,
        });
        out.write_all(&self.image_bytes)
    }

    fn dump_source_array(
        &mut self,
        program: ProgramId,
        symbol: &str,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        self.dumps.push(DumpCall {
            program,
            symbol: Some(symbol.to_string()),
        });
        write!(out, "const unsigned char {symbol}[] = {{0x47,0x42,0x43}};")
    }

    fn run_shell(&mut self) -> i32 {
        self.shell_runs += 1;
        self.shell_status
    }
}
