//! Parse command: resolve timer text into a record.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use ct_core::{InputResolver, NaturalParser, ResolveOrder, TimerOptions};

use crate::Config;

/// Resolves `text` and writes the resulting record as pretty JSON.
///
/// `prefer` overrides the configured order; `now` anchors times of day.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    text: &str,
    prefer: Option<ResolveOrder>,
    title: Option<&str>,
    now: NaiveDateTime,
) -> Result<()> {
    let mut options = TimerOptions::from(&config.options);
    if let Some(title) = title {
        options.title = Some(title.to_string());
    }

    let order = prefer.unwrap_or(config.prefer);
    let resolver = InputResolver::new(NaturalParser::new(now), options);
    let Some(input) = resolver.resolve(text, order) else {
        anyhow::bail!("could not understand {text:?} as a time or a duration");
    };
    tracing::debug!(%input, %order, "resolved timer input");

    let json = serde_json::to_string_pretty(&input.to_record())
        .context("failed to serialize timer input")?;
    writeln!(writer, "{json}")?;
    Ok(())
}
