//! Natural-language parsing of timer text.
//!
//! The resolver only needs the two parser traits. [`NaturalParser`] is the English
//! grammar used by default:
//!
//! - Durations: anything `humantime` reads (`90s`, `1h 30m`, `1hr30min`, `2 weeks`),
//!   plus `5` (minutes), `1.5 hours`, `1 hour and 30 minutes`, `2 days, 3 hours`,
//!   `2:30` (m:ss) and `1:02:03` (h:mm:ss), with an optional leading `for` or `in`.
//! - Points in time: `17:00`, `5pm`, `5:30 pm`, `5` (hour), `noon`, `midnight`,
//!   `tomorrow 9am`, `9am tomorrow`, `tomorrow`, `2026-10-19 17:00`, with an optional
//!   leading `until` or `at`.
//!
//! A bare hour and `h:mm` are accepted by both grammars on purpose.

use std::sync::LazyLock;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

/// Parses text into a local wall-clock time.
pub trait DateTimeParser {
    /// Returns `None` when the text is not a point in time.
    fn parse_date_time(&self, text: &str) -> Option<NaiveDateTime>;
}

/// Parses text into a length of time.
pub trait DurationParser {
    /// Returns `None` when the text is not a duration.
    fn parse_duration(&self, text: &str) -> Option<Duration>;
}

/// Separators between duration components that `humantime` does not accept.
static DURATION_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*|\s+and\s+").unwrap());

/// A fractional `<number><unit>` component such as `1.5 hours`.
static FRACTIONAL_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)\s*([a-z]+)").unwrap());

static BARE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").unwrap());

static TIME_OF_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?(?::(\d{2}))?\s*(am|pm|a\.m\.|p\.m\.)?$").unwrap()
});

const ISO_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Longest countdown accepted from text, about 100 years.
const MAX_DURATION_MS: i64 = 100 * 365 * 86_400_000;

const MINUTE_MS: f64 = 60_000.0;

/// English grammar anchored at a reference time.
///
/// Times of day without a day word resolve to their next occurrence at or after
/// the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalParser {
    now: NaiveDateTime,
}

impl NaturalParser {
    pub const fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// A parser anchored at the current local time.
    pub fn local() -> Self {
        Self::new(Local::now().naive_local())
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

impl DurationParser for NaturalParser {
    fn parse_duration(&self, text: &str) -> Option<Duration> {
        let lower = text.trim().to_lowercase();
        let body = strip_word(&lower, &["for", "in"]);
        if body.is_empty() {
            return None;
        }

        let duration = if BARE_NUMBER_RE.is_match(body) {
            millis_to_duration(body.parse::<f64>().ok()? * MINUTE_MS)?
        } else if let Some(caps) = CLOCK_RE.captures(body) {
            let first: f64 = caps[1].parse().ok()?;
            let second: f64 = caps[2].parse().ok()?;
            let millis = match caps.get(3) {
                Some(third) => {
                    let third: f64 = third.as_str().parse().ok()?;
                    if second >= 60.0 || third >= 60.0 {
                        return None;
                    }
                    ((first * 60.0 + second) * 60.0 + third) * 1000.0
                }
                None => {
                    if second >= 60.0 {
                        return None;
                    }
                    (first * 60.0 + second) * 1000.0
                }
            };
            millis_to_duration(millis)?
        } else {
            parse_unit_sequence(body)?
        };

        let max = Duration::try_milliseconds(MAX_DURATION_MS)?;
        (duration >= Duration::milliseconds(1) && duration <= max).then_some(duration)
    }
}

impl DateTimeParser for NaturalParser {
    fn parse_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        let lower = text.trim().to_lowercase();
        let body = strip_word(&lower, &["until", "at"]);
        if body.is_empty() {
            return None;
        }

        let upper = body.to_uppercase();
        if let Some(date_time) = ISO_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&upper, format).ok())
        {
            return Some(date_time);
        }

        let tomorrow = self.today().succ_opt()?;
        if body == "tomorrow" {
            return tomorrow.and_hms_opt(0, 0, 0);
        }

        let day_words = [("today", self.today()), ("tomorrow", tomorrow)];
        for (word, day) in day_words {
            let rest = body
                .strip_prefix(word)
                .or_else(|| body.strip_suffix(word))
                .map(str::trim);
            if let Some(rest) = rest.filter(|rest| !rest.is_empty()) {
                let time = parse_time_of_day(strip_word(rest, &["at"]))?;
                return Some(day.and_time(time));
            }
        }

        let time = parse_time_of_day(body)?;
        let candidate = self.today().and_time(time);
        if candidate >= self.now {
            Some(candidate)
        } else {
            Some(tomorrow.and_time(time))
        }
    }
}

/// Removes one leading keyword followed by whitespace.
fn strip_word<'a>(text: &'a str, words: &[&str]) -> &'a str {
    words
        .iter()
        .find_map(|word| {
            text.strip_prefix(word)
                .filter(|rest| rest.starts_with(char::is_whitespace))
        })
        .map_or(text, str::trim_start)
}

/// Parses `<number><unit>` sequences with `humantime`.
///
/// Commas and `and` between components are dropped first, and fractional components
/// are rewritten to whole milliseconds since `humantime` only takes integers.
fn parse_unit_sequence(text: &str) -> Option<Duration> {
    let joined = DURATION_SEPARATOR_RE.replace_all(text, " ");

    let mut unknown_unit = false;
    let expanded = FRACTIONAL_PART_RE.replace_all(&joined, |caps: &Captures<'_>| {
        let value: f64 = caps[1].parse().unwrap_or(f64::NAN);
        match humantime::parse_duration(&format!("1{}", &caps[2])) {
            Ok(unit) => format!("{}ms", (value * unit.as_secs_f64() * 1000.0).round()),
            Err(_) => {
                unknown_unit = true;
                String::new()
            }
        }
    });
    if unknown_unit {
        return None;
    }

    let parsed = humantime::parse_duration(&expanded).ok()?;
    Duration::from_std(parsed).ok()
}

/// Rounds to whole milliseconds; anything that rounds to zero is a miss.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate and the caller checks the upper bound"
)]
fn millis_to_duration(millis: f64) -> Option<Duration> {
    let rounded = millis.round();
    if !rounded.is_finite() || rounded < 1.0 {
        return None;
    }
    Duration::try_milliseconds(rounded as i64)
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    match text {
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {}
    }

    let caps = TIME_OF_DAY_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let min: u32 = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let sec: u32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;

    let hour = match caps.get(4).map(|m| m.as_str().replace('.', "")) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (meridiem.as_str(), hour) {
                ("am", 12) => 0,
                ("pm", 12) | ("am", _) => hour,
                _ => hour + 12,
            }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, min, sec)
}
