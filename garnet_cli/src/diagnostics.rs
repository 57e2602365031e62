//! Failure reporting: backtrace reconstruction and exception output.
//!
//! The builder consumes the read-only [`ExceptionReport`] snapshot taken
//! by the runtime at the moment of failure. It never mutates runtime
//! state and tolerates a corrupted depth counter by clamping.

use garnet_core::{CallFrame, CodeBlock, ExceptionReport};

/// Start index used when the runtime-reported call depth is out of
/// range for the snapshot (a corrupted depth counter).
const CORRUPT_DEPTH_FALLBACK: usize = 10;

/// Reconstruct printable trace lines from a failure snapshot.
///
/// Frames are walked innermost-first. Native frames and frames whose
/// line cannot be resolved are omitted; the walk itself never aborts.
#[must_use]
pub fn backtrace_lines(report: &ExceptionReport) -> Vec<String> {
    if report.frames.is_empty() {
        return Vec::new();
    }
    let mut start = report.call_depth;
    if start >= report.frames.len() {
        start = CORRUPT_DEPTH_FALLBACK.min(report.frames.len() - 1);
    }

    let mut lines = Vec::new();
    for i in (0..=start).rev() {
        let frame = &report.frames[i];
        let Some(block) = frame.block() else {
            continue;
        };
        // The frame's current line comes from the pc saved by the frame
        // above it; the innermost frame uses the failure-point pc.
        let pc = if i + 1 <= start {
            report.frames[i + 1].pc
        } else {
            report.last_pc
        };
        let Some(line) = block.line_for_pc(pc) else {
            continue;
        };
        lines.push(format_frame(i, frame, block, line));
    }
    lines
}

fn format_frame(index: usize, frame: &CallFrame, block: &CodeBlock, line: u32) -> String {
    let filename = block.filename.as_deref().unwrap_or("(unknown)");
    match (frame.method.as_deref(), block.scope_name.as_deref()) {
        (Some(method), Some(scope)) => {
            let sep = if frame.receiver_scope == block.defining_scope {
                "."
            } else {
                "#"
            };
            format!("\t[{index}] {filename}:{line}:in {scope}{sep}{method}")
        }
        (Some(method), None) => format!("\t[{index}] {filename}:{line}:in {method}"),
        (None, _) => format!("\t[{index}] {filename}:{line}"),
    }
}

/// Print the trace and the exception's printable form to stderr.
pub fn report_failure(report: &ExceptionReport) {
    eprintln!("trace:");
    for line in backtrace_lines(report) {
        eprintln!("{line}");
    }
    eprintln!("{}", report.inspect);
}
