//! Serialization records for timer inputs.
//!
//! Records are plain data with public fields. They are what gets written to disk or
//! sent over the wire; [`TimerInput`](crate::TimerInput) converts to and from them.
//! Unknown fields are ignored and unknown input types deserialize to
//! [`TimerInputRecord::Unknown`], so older readers tolerate records from newer writers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::options::{TimerOptions, WindowTitleMode};

/// Serialized form of [`TimerOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "mirrors the flags on TimerOptions"
)]
pub struct TimerOptionsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub always_on_top: bool,
    pub prompt_on_exit: bool,
    pub show_progress_in_taskbar: bool,
    pub do_not_keep_computer_awake: bool,
    pub reverse_progress_bar: bool,
    pub show_time_elapsed: bool,
    pub loop_timer: bool,
    pub pop_up_when_expired: bool,
    pub close_when_expired: bool,
    /// Stored as a string so unknown modes from newer writers still load.
    pub window_title_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    pub loop_sound: bool,
}

impl Default for TimerOptionsRecord {
    fn default() -> Self {
        Self::from(&TimerOptions::default())
    }
}

impl From<&TimerOptions> for TimerOptionsRecord {
    fn from(options: &TimerOptions) -> Self {
        Self {
            title: options.title.clone(),
            always_on_top: options.always_on_top,
            prompt_on_exit: options.prompt_on_exit,
            show_progress_in_taskbar: options.show_progress_in_taskbar,
            do_not_keep_computer_awake: options.do_not_keep_computer_awake,
            reverse_progress_bar: options.reverse_progress_bar,
            show_time_elapsed: options.show_time_elapsed,
            loop_timer: options.loop_timer,
            pop_up_when_expired: options.pop_up_when_expired,
            close_when_expired: options.close_when_expired,
            window_title_mode: options.window_title_mode.to_string(),
            theme: options.theme.clone(),
            sound: options.sound.clone(),
            loop_sound: options.loop_sound,
        }
    }
}

impl From<&TimerOptionsRecord> for TimerOptions {
    fn from(record: &TimerOptionsRecord) -> Self {
        let window_title_mode = record.window_title_mode.parse().unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to default window title mode");
            WindowTitleMode::default()
        });

        Self {
            title: record.title.clone(),
            always_on_top: record.always_on_top,
            prompt_on_exit: record.prompt_on_exit,
            show_progress_in_taskbar: record.show_progress_in_taskbar,
            do_not_keep_computer_awake: record.do_not_keep_computer_awake,
            reverse_progress_bar: record.reverse_progress_bar,
            show_time_elapsed: record.show_time_elapsed,
            loop_timer: record.loop_timer,
            pop_up_when_expired: record.pop_up_when_expired,
            close_when_expired: record.close_when_expired,
            window_title_mode,
            theme: record.theme.clone(),
            sound: record.sound.clone(),
            loop_sound: record.loop_sound,
        }
    }
}

/// Record for a countdown of fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TimerOptionsRecord>,
    /// Length of the countdown in milliseconds.
    pub duration_ms: i64,
}

/// Record for a countdown to a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TimerOptionsRecord>,
    /// Local wall-clock time the countdown ends at.
    pub date_time: NaiveDateTime,
}

/// A serialized timer input, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerInputRecord {
    Duration(DurationRecord),
    DateTime(DateTimeRecord),
    /// An input type this version does not know about.
    #[serde(other)]
    Unknown,
}
