//! Timer inputs: what the user asked for when starting a countdown.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::options::TimerOptions;
use crate::record::{DateTimeRecord, DurationRecord, TimerInputRecord, TimerOptionsRecord};

/// Errors raised while building a timer input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required argument was absent.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// A stored duration does not fit in the supported range.
    #[error("duration of {millis} ms is out of range")]
    DurationOutOfRange { millis: i64 },
}

/// The payload of a timer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerInputKind {
    /// Count down for a fixed length of time.
    Duration(Duration),
    /// Count down until a local wall-clock time.
    DateTime(NaiveDateTime),
}

/// An immutable timer input.
///
/// Two inputs are equal when they are the same kind, carry the same payload and
/// have equal options. Hashing follows the same fields, so inputs can be used as
/// map keys or deduplicated in a recent-inputs list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerInput {
    options: TimerOptions,
    kind: TimerInputKind,
}

impl TimerInput {
    /// Creates an input from a payload and the options to run it with.
    ///
    /// Durations are truncated to whole milliseconds, the precision records store.
    pub fn new(kind: TimerInputKind, options: TimerOptions) -> Self {
        let kind = match kind {
            TimerInputKind::Duration(duration) => {
                TimerInputKind::Duration(truncate_to_millis(duration))
            }
            TimerInputKind::DateTime(_) => kind,
        };
        Self { options, kind }
    }

    /// Creates a countdown of fixed length.
    pub fn from_duration(duration: Duration, options: TimerOptions) -> Self {
        Self::new(TimerInputKind::Duration(duration), options)
    }

    /// Creates a countdown to a point in time.
    pub fn from_date_time(date_time: NaiveDateTime, options: TimerOptions) -> Self {
        Self::new(TimerInputKind::DateTime(date_time), options)
    }

    /// Rebuilds an input from a record.
    ///
    /// Record shapes are matched in declaration order: duration, then date-time.
    /// A shape this version does not know returns `Ok(None)`.
    pub fn from_record(record: &TimerInputRecord) -> Result<Option<Self>, InputError> {
        match record {
            TimerInputRecord::Duration(inner) => Self::try_from(inner).map(Some),
            TimerInputRecord::DateTime(inner) => Self::try_from(inner).map(Some),
            TimerInputRecord::Unknown => {
                tracing::debug!("ignoring unrecognized timer input record");
                Ok(None)
            }
        }
    }

    /// Converts this input into its record shape.
    pub fn to_record(&self) -> TimerInputRecord {
        let options = Some(TimerOptionsRecord::from(&self.options));
        match self.kind {
            TimerInputKind::Duration(duration) => TimerInputRecord::Duration(DurationRecord {
                options,
                duration_ms: duration.num_milliseconds(),
            }),
            TimerInputKind::DateTime(date_time) => {
                TimerInputRecord::DateTime(DateTimeRecord { options, date_time })
            }
        }
    }

    /// The options this input was built with.
    pub const fn options(&self) -> &TimerOptions {
        &self.options
    }

    pub const fn kind(&self) -> TimerInputKind {
        self.kind
    }

    /// Returns the duration if this is a fixed-length countdown.
    pub const fn duration(&self) -> Option<Duration> {
        match self.kind {
            TimerInputKind::Duration(duration) => Some(duration),
            TimerInputKind::DateTime(_) => None,
        }
    }

    /// Returns the end time if this is a countdown to a point in time.
    pub const fn date_time(&self) -> Option<NaiveDateTime> {
        match self.kind {
            TimerInputKind::DateTime(date_time) => Some(date_time),
            TimerInputKind::Duration(_) => None,
        }
    }

    /// When a countdown started at `start` would expire.
    ///
    /// Returns `None` if adding the duration overflows.
    pub fn end_time(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.kind {
            TimerInputKind::Duration(duration) => start.checked_add_signed(duration),
            TimerInputKind::DateTime(date_time) => Some(date_time),
        }
    }

    /// Time from `now` until [`end_time`](Self::end_time) for a countdown started at
    /// `now`, clamped to zero once the end has passed.
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        let end = self.end_time(now)?;
        Some((end - now).max(Duration::zero()))
    }
}

fn truncate_to_millis(duration: Duration) -> Duration {
    Duration::try_milliseconds(duration.num_milliseconds()).unwrap_or(duration)
}

fn options_from_record(options: Option<&TimerOptionsRecord>) -> Result<TimerOptions, InputError> {
    options
        .map(TimerOptions::from)
        .ok_or(InputError::Missing { field: "options" })
}

impl TryFrom<&DurationRecord> for TimerInput {
    type Error = InputError;

    fn try_from(record: &DurationRecord) -> Result<Self, Self::Error> {
        let options = options_from_record(record.options.as_ref())?;
        let duration = Duration::try_milliseconds(record.duration_ms).ok_or(
            InputError::DurationOutOfRange {
                millis: record.duration_ms,
            },
        )?;
        Ok(Self::from_duration(duration, options))
    }
}

impl TryFrom<&DateTimeRecord> for TimerInput {
    type Error = InputError;

    fn try_from(record: &DateTimeRecord) -> Result<Self, Self::Error> {
        let options = options_from_record(record.options.as_ref())?;
        Ok(Self::from_date_time(record.date_time, options))
    }
}

impl From<&TimerInput> for TimerInputRecord {
    fn from(input: &TimerInput) -> Self {
        input.to_record()
    }
}

impl fmt::Display for TimerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TimerInputKind::Duration(duration) => write!(f, "{}", HumanDuration(duration)),
            TimerInputKind::DateTime(date_time) => {
                let format = if date_time.second() == 0 {
                    "%Y-%m-%d %H:%M"
                } else {
                    "%Y-%m-%d %H:%M:%S"
                };
                write!(f, "until {}", date_time.format(format))
            }
        }
    }
}

/// Displays a duration as "1 hour 30 minutes", dropping zero parts and sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < Duration::zero() {
            write!(f, "-")?;
        }
        let total = self.0.num_seconds().unsigned_abs();
        let parts = [
            (total / 86_400, "day"),
            (total % 86_400 / 3_600, "hour"),
            (total % 3_600 / 60, "minute"),
            (total % 60, "second"),
        ];

        let mut written = false;
        for (value, unit) in parts.into_iter().filter(|(value, _)| *value > 0) {
            if written {
                write!(f, " ")?;
            }
            let plural = if value == 1 { "" } else { "s" };
            write!(f, "{value} {unit}{plural}")?;
            written = true;
        }

        if !written {
            write!(f, "0 seconds")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::options::WindowTitleMode;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn five_minutes() -> TimerInput {
        TimerInput::from_duration(Duration::minutes(5), TimerOptions::default())
    }

    #[test]
    fn options_are_copied_in() {
        let mut options = TimerOptions::default().with_title("Tea");
        let input = TimerInput::from_duration(Duration::minutes(3), options.clone());

        options.title = Some("Coffee".to_string());
        options.loop_timer = true;

        assert_eq!(input.options().title.as_deref(), Some("Tea"));
        assert!(!input.options().loop_timer);
        assert_ne!(input.options(), &options);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = five_minutes();
        let b = five_minutes();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn equality_is_transitive_and_matches_hash() {
        let a = five_minutes();
        let b = a.clone();
        let c = TimerInput::from_record(&b.to_record()).unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, c);

        let set: HashSet<TimerInput> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn differing_options_or_payload_are_unequal() {
        let base = five_minutes();
        let titled = TimerInput::from_duration(
            Duration::minutes(5),
            TimerOptions::default().with_title("Eggs"),
        );
        let longer = TimerInput::from_duration(Duration::minutes(6), TimerOptions::default());

        assert_ne!(base, titled);
        assert_ne!(base, longer);
    }

    #[test]
    fn different_kinds_are_never_equal() {
        let duration = five_minutes();
        let date_time = TimerInput::from_date_time(at(17, 0), TimerOptions::default());
        assert_ne!(duration, date_time);
        assert_ne!(date_time, duration);

        let set: HashSet<TimerInput> = [duration, date_time].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duration_record_roundtrip() {
        let options = TimerOptions {
            loop_timer: true,
            window_title_mode: WindowTitleMode::TimeLeft,
            ..TimerOptions::default().with_title("Laundry")
        };
        let input = TimerInput::from_duration(Duration::milliseconds(5_400_250), options);

        let restored = TimerInput::from_record(&input.to_record()).unwrap();
        assert_eq!(restored, Some(input));
    }

    #[test]
    fn sub_millisecond_duration_survives_record_roundtrip() {
        let input =
            TimerInput::from_duration(Duration::microseconds(1_500), TimerOptions::default());
        assert_eq!(input.duration(), Some(Duration::milliseconds(1)));

        let restored = TimerInput::from_record(&input.to_record()).unwrap();
        assert_eq!(restored, Some(input));

        let built = TimerInput::new(
            TimerInputKind::Duration(Duration::nanoseconds(2_999_999)),
            TimerOptions::default(),
        );
        assert_eq!(built.duration(), Some(Duration::milliseconds(2)));
        assert_eq!(TimerInput::from_record(&built.to_record()), Ok(Some(built)));
    }

    #[test]
    fn date_time_record_roundtrip() {
        let input = TimerInput::from_date_time(at(9, 30), TimerOptions::default());
        let record = TimerInputRecord::from(&input);
        assert!(matches!(record, TimerInputRecord::DateTime(_)));

        let restored = TimerInput::from_record(&record).unwrap();
        assert_eq!(restored, Some(input));
    }

    #[test]
    fn record_without_options_is_rejected() {
        let record = TimerInputRecord::Duration(DurationRecord {
            options: None,
            duration_ms: 60_000,
        });
        assert_eq!(
            TimerInput::from_record(&record),
            Err(InputError::Missing { field: "options" })
        );

        let record = DateTimeRecord {
            options: None,
            date_time: at(12, 0),
        };
        let err = TimerInput::try_from(&record).unwrap_err();
        assert_eq!(err.to_string(), "options is required");
    }

    #[test]
    fn out_of_range_duration_is_rejected() {
        let record = TimerInputRecord::Duration(DurationRecord {
            options: Some(TimerOptionsRecord::default()),
            duration_ms: i64::MIN,
        });
        assert_eq!(
            TimerInput::from_record(&record),
            Err(InputError::DurationOutOfRange { millis: i64::MIN })
        );
    }

    #[test]
    fn unknown_record_yields_no_input() {
        assert_eq!(TimerInput::from_record(&TimerInputRecord::Unknown), Ok(None));
    }

    #[test]
    fn accessors_match_kind() {
        let duration = five_minutes();
        assert_eq!(duration.duration(), Some(Duration::minutes(5)));
        assert_eq!(duration.date_time(), None);

        let date_time = TimerInput::from_date_time(at(17, 0), TimerOptions::default());
        assert_eq!(date_time.date_time(), Some(at(17, 0)));
        assert_eq!(date_time.duration(), None);
        assert_eq!(date_time.kind(), TimerInputKind::DateTime(at(17, 0)));
    }

    #[test]
    fn end_time_and_remaining() {
        let now = at(16, 0);
        assert_eq!(five_minutes().end_time(now), Some(at(16, 5)));
        assert_eq!(five_minutes().remaining(now), Some(Duration::minutes(5)));

        let until = TimerInput::from_date_time(at(17, 0), TimerOptions::default());
        assert_eq!(until.end_time(now), Some(at(17, 0)));
        assert_eq!(until.remaining(now), Some(Duration::hours(1)));
        assert_eq!(until.remaining(at(18, 0)), Some(Duration::zero()));
    }

    #[test]
    fn display_duration() {
        let cases = [
            (Duration::minutes(5), "5 minutes"),
            (Duration::minutes(90), "1 hour 30 minutes"),
            (Duration::seconds(86_401), "1 day 1 second"),
            (Duration::milliseconds(400), "0 seconds"),
            (Duration::minutes(-2), "-2 minutes"),
        ];
        for (duration, expected) in cases {
            let input = TimerInput::from_duration(duration, TimerOptions::default());
            assert_eq!(input.to_string(), expected);
        }
    }

    #[test]
    fn display_date_time() {
        let input = TimerInput::from_date_time(at(17, 0), TimerOptions::default());
        assert_eq!(input.to_string(), "until 2026-10-19 17:00");

        let with_seconds = at(17, 0) + Duration::seconds(15);
        let input = TimerInput::from_date_time(with_seconds, TimerOptions::default());
        assert_eq!(input.to_string(), "until 2026-10-19 17:00:15");
    }
}
