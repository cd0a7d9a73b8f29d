//! Script replay.
//!
//! Feeds CSV script lines through a single [`MatchingEngine`] and writes
//! every produced event as a diagnostic line. Malformed lines and engine
//! rejections (strict mode only) are logged and skipped; only I/O errors
//! stop a replay.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use engine_core::{InputMessage, MatchingEngine, OutputMessage, Rejected};
use engine_protocol::csv_codec::{format_output, parse_input_line};
use tracing::{debug, info, warn};

/// Built-in demo book.
pub const DEMO_SCRIPT: &str = include_str!("../scripts/demo.csv");

/// Counters for a finished replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    /// Lines that parsed into a message.
    pub messages: usize,

    /// Non-blank, non-comment lines that failed to parse.
    pub skipped: usize,

    /// Messages the engine refused.
    pub rejected: usize,

    /// Diagnostic lines written.
    pub outputs: usize,
}

/// Replay every line of `input` through `engine`, writing events to `out`.
pub fn replay<R, W>(engine: &mut MatchingEngine, input: R, out: &mut W) -> Result<ReplayStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ReplayStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading script line {line_no}"))?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(msg) = parse_input_line(trimmed) else {
            warn!(line_no, line = trimmed, "skipping malformed line");
            stats.skipped += 1;
            continue;
        };
        stats.messages += 1;

        stats.outputs += dispatch(engine, msg, line_no, &mut stats.rejected, out)?;
    }

    info!(
        messages = stats.messages,
        skipped = stats.skipped,
        rejected = stats.rejected,
        outputs = stats.outputs,
        "replay finished"
    );
    Ok(stats)
}

/// Load the demo book, list it, match, and list it again.
pub fn run_demo<W: Write>(engine: &mut MatchingEngine, out: &mut W) -> Result<ReplayStats> {
    let mut stats = replay(engine, DEMO_SCRIPT.as_bytes(), out)?;

    writeln!(out, "Orders before matching: ")?;
    stats.outputs += dispatch(engine, InputMessage::Print, 0, &mut stats.rejected, out)?;

    stats.outputs += dispatch(engine, InputMessage::Match, 0, &mut stats.rejected, out)?;

    writeln!(out, "Orders after matching: ")?;
    stats.outputs += dispatch(engine, InputMessage::Print, 0, &mut stats.rejected, out)?;

    Ok(stats)
}

fn dispatch<W: Write>(
    engine: &mut MatchingEngine,
    msg: InputMessage,
    line_no: usize,
    rejected: &mut usize,
    out: &mut W,
) -> Result<usize> {
    debug!(line_no, ?msg, "processing");

    match engine.process_message(msg) {
        Ok(outputs) => write_outputs(&outputs, out),
        Err(Rejected { error, outputs }) => {
            // Fills executed before the refusal still happened.
            let written = write_outputs(&outputs, out)?;
            warn!(line_no, error = %error, "engine rejected message");
            *rejected += 1;
            Ok(written)
        }
    }
}

fn write_outputs<W: Write>(outputs: &[OutputMessage], out: &mut W) -> Result<usize> {
    for o in outputs {
        writeln!(out, "{}", format_output(o)).context("writing output")?;
    }
    Ok(outputs.len())
}
