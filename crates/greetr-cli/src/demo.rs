//! The fixed demo sequence: greet, sum, reverse, with start/end log lines.

use std::io::Write;

use greetr_core::{bounded_sum, greeting, reverse, RunSummary};

use crate::error::CliError;
use crate::sink::LogSink;

/// Banner printed before the operation results.
const BANNER: &str = "Hello World Plus!";

/// Fixed operands for the bounded-sum step.
const SUM_LHS: i32 = 5;
const SUM_RHS: i32 = 10;

/// Fixed input for the reversal step.
const REVERSAL_INPUT: &str = "Java21";

/// Runs the demo sequence against an output writer and a log sink.
///
/// Writes exactly six lines: a start log line, the banner, one line per
/// operation result, and an end log line. Returns the collected results.
///
/// # Errors
///
/// Returns an error when an operation rejects its input or the writer
/// fails.
pub fn run<W: Write, S: LogSink>(out: &mut W, sink: &mut S) -> Result<RunSummary, CliError> {
    sink.log("Application started")?;
    writeln!(out, "{BANNER}")?;

    let summary = RunSummary {
        greeting: greeting().to_string(),
        sum: bounded_sum(SUM_LHS, SUM_RHS)?,
        reversed: reverse(Some(REVERSAL_INPUT)),
    };

    writeln!(out, "Dummy Method 1: {}", summary.greeting)?;
    writeln!(out, "Dummy Method 2: {}", summary.sum)?;
    writeln!(
        out,
        "Dummy Method 3: {}",
        summary.reversed.as_deref().unwrap_or("")
    )?;

    sink.log("Application ended")?;

    Ok(summary)
}
