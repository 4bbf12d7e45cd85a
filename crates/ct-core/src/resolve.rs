//! Resolution of ambiguous timer text.
//!
//! Some text reads as both a point in time and a duration: `5` is either five
//! o'clock or five minutes. Resolution tries one reading and only falls back to the
//! other when the first fails. Which reading goes first is the caller's choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input::TimerInput;
use crate::natural::{DateTimeParser, DurationParser, NaturalParser};
use crate::options::TimerOptions;

/// Which reading of ambiguous text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResolveOrder {
    /// Try a point in time, then a duration.
    #[serde(rename = "time")]
    DateTimeFirst,
    /// Try a duration, then a point in time.
    #[default]
    #[serde(rename = "duration")]
    DurationFirst,
}

impl ResolveOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DateTimeFirst => "time",
            Self::DurationFirst => "duration",
        }
    }
}

impl fmt::Display for ResolveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResolveOrder {
    type Err = UnknownResolveOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::DateTimeFirst),
            "duration" => Ok(Self::DurationFirst),
            _ => Err(UnknownResolveOrder(s.to_string())),
        }
    }
}

/// Error type for unknown resolve order strings.
#[derive(Debug, Clone)]
pub struct UnknownResolveOrder(String);

impl fmt::Display for UnknownResolveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resolve order: {} (expected time or duration)", self.0)
    }
}

impl std::error::Error for UnknownResolveOrder {}

/// Turns text into timer inputs carrying a fixed set of options.
#[derive(Debug, Clone)]
pub struct InputResolver<P = NaturalParser> {
    parser: P,
    options: TimerOptions,
}

impl<P> InputResolver<P>
where
    P: DateTimeParser + DurationParser,
{
    pub const fn new(parser: P, options: TimerOptions) -> Self {
        Self { parser, options }
    }

    /// Resolves `text` with the given priority.
    ///
    /// Returns `None` when neither reading applies.
    pub fn resolve(&self, text: &str, order: ResolveOrder) -> Option<TimerInput> {
        match order {
            ResolveOrder::DateTimeFirst => self.date_time_or_duration(text),
            ResolveOrder::DurationFirst => self.duration_or_date_time(text),
        }
    }

    /// Reads `text` as a point in time, falling back to a duration.
    pub fn date_time_or_duration(&self, text: &str) -> Option<TimerInput> {
        let input = self.as_date_time(text).or_else(|| self.as_duration(text));
        tracing::debug!(text, kind = ?input.as_ref().map(TimerInput::kind), "resolved time first");
        input
    }

    /// Reads `text` as a duration, falling back to a point in time.
    pub fn duration_or_date_time(&self, text: &str) -> Option<TimerInput> {
        let input = self.as_duration(text).or_else(|| self.as_date_time(text));
        tracing::debug!(text, kind = ?input.as_ref().map(TimerInput::kind), "resolved duration first");
        input
    }

    fn as_date_time(&self, text: &str) -> Option<TimerInput> {
        let date_time = self.parser.parse_date_time(text)?;
        Some(TimerInput::from_date_time(date_time, self.options.clone()))
    }

    fn as_duration(&self, text: &str) -> Option<TimerInput> {
        let duration = self.parser.parse_duration(text)?;
        Some(TimerInput::from_duration(duration, self.options.clone()))
    }
}

/// Reads `text` as a point in time, then a duration, against the local clock.
pub fn from_date_time_or_duration(text: &str) -> Option<TimerInput> {
    InputResolver::new(NaturalParser::local(), TimerOptions::default())
        .date_time_or_duration(text)
}

/// Reads `text` as a duration, then a point in time, against the local clock.
pub fn from_duration_or_date_time(text: &str) -> Option<TimerInput> {
    InputResolver::new(NaturalParser::local(), TimerOptions::default())
        .duration_or_date_time(text)
}
