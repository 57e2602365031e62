//! Failure snapshots: the call-stack data captured when an execution
//! attempt leaves a pending exception.
//!
//! The runtime owns the call-info stack; the driver receives it here as
//! a read-only snapshot taken at the moment of failure and walks it to
//! reconstruct a printable trace. Frame counts are small in the common
//! case, so frames are stored inline.

use smallvec::SmallVec;
use std::sync::Arc;

/// Number of call frames stored inline in an [`ExceptionReport`].
pub const INLINE_FRAMES: usize = 8;

/// Identity of a lexical or receiver scope inside the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

/// A compiled instruction block and its line table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Source file the block was compiled from, when known.
    pub filename: Option<Arc<str>>,
    /// Offset of the block's first instruction.
    pub start: u32,
    /// Number of instructions in the block.
    pub len: u32,
    /// Per-instruction source line numbers, when compiled with debug
    /// information. Indexed by instruction offset within the block.
    pub lines: Option<Vec<u32>>,
    /// The scope the block was lexically defined in.
    pub defining_scope: ScopeId,
    /// Printable name of the defining scope, when it has one.
    pub scope_name: Option<Arc<str>>,
}

impl CodeBlock {
    /// Resolve the source line for a program counter inside this block.
    ///
    /// The line of the instruction *preceding* `pc` is reported, since a
    /// saved pc points one past the call site. Returns `None` when the
    /// block carries no line table, when `pc` falls outside
    /// `[start, start + len)`, or when `pc` sits at the block start.
    #[must_use]
    pub fn line_for_pc(&self, pc: u32) -> Option<u32> {
        let lines = self.lines.as_ref()?;
        if pc < self.start || pc >= self.start + self.len {
            return None;
        }
        let offset = (pc - self.start) as usize;
        let index = offset.checked_sub(1)?;
        lines.get(index).copied()
    }
}

/// What a call frame was executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// A native (non-bytecode) routine; carries no line information.
    Native,
    /// A bytecode block.
    Block(Arc<CodeBlock>),
}

/// One record of the runtime's call-info stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// The routine this frame was executing.
    pub callee: Callee,
    /// Program counter captured when this frame was entered. The frame
    /// *below* resolves its current line from this value.
    pub pc: u32,
    /// Method or symbol name at the call site, when resolvable.
    pub method: Option<Arc<str>>,
    /// The receiver scope at the call site.
    pub receiver_scope: ScopeId,
}

impl CallFrame {
    /// The frame's bytecode block, unless the callee is native.
    #[must_use]
    pub fn block(&self) -> Option<&CodeBlock> {
        match &self.callee {
            Callee::Native => None,
            Callee::Block(block) => Some(block),
        }
    }

    /// Whether the callee is a native routine.
    #[must_use]
    pub fn is_native(&self) -> bool {
        matches!(self.callee, Callee::Native)
    }
}

/// Read-only snapshot of a pending exception and the call stack at the
/// moment of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionReport {
    /// Printable form of the exception object.
    pub inspect: String,
    /// Runtime-reported index of the innermost call record. May be out
    /// of range for `frames` if the counter was corrupted; consumers
    /// clamp rather than fault.
    pub call_depth: usize,
    /// The call-info stack, index 0 outermost.
    pub frames: SmallVec<[CallFrame; INLINE_FRAMES]>,
    /// Program counter recorded at the failure point; resolves the
    /// innermost frame's line.
    pub last_pc: u32,
}

impl ExceptionReport {
    /// Assemble a snapshot from an ordered frame sequence (outermost
    /// first).
    pub fn new(
        inspect: impl Into<String>,
        call_depth: usize,
        frames: impl IntoIterator<Item = CallFrame>,
        last_pc: u32,
    ) -> Self {
        Self {
            inspect: inspect.into(),
            call_depth,
            frames: frames.into_iter().collect(),
            last_pc,
        }
    }
}
