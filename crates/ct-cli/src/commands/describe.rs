//! Describe command: summarize a stored timer input record.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use ct_core::{HumanDuration, TimerInput, TimerInputRecord};

/// Reads a record as JSON from `reader` and writes a short description.
///
/// Records of a type this version does not know are reported, not rejected.
pub fn run<R: Read, W: Write>(reader: R, writer: &mut W, now: NaiveDateTime) -> Result<()> {
    let record: TimerInputRecord =
        serde_json::from_reader(reader).context("failed to read timer input record")?;
    let Some(input) = TimerInput::from_record(&record).context("invalid timer input record")?
    else {
        writeln!(writer, "unrecognized timer input")?;
        return Ok(());
    };

    writeln!(writer, "Timer: {input}")?;
    if let Some(title) = &input.options().title {
        writeln!(writer, "Title: {title}")?;
    }
    match input.end_time(now) {
        Some(end) => writeln!(writer, "Ends: {}", end.format("%Y-%m-%d %H:%M:%S"))?,
        None => writeln!(writer, "Ends: out of range")?,
    }
    if let Some(remaining) = input.remaining(now) {
        writeln!(writer, "Remaining: {}", HumanDuration(remaining))?;
    }

    Ok(())
}
