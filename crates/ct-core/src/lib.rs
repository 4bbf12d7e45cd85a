//! Core domain logic for the countdown timer.
//!
//! This crate contains the fundamental types and logic for:
//! - Timer inputs: what the user asked for, either a duration or a point in time
//! - Records: the serialization shape of timer inputs and their options
//! - Resolution: turning ambiguous text into a timer input with a fixed priority order

pub mod input;
pub mod natural;
pub mod options;
pub mod record;
pub mod resolve;

pub use input::{HumanDuration, InputError, TimerInput, TimerInputKind};
pub use natural::{DateTimeParser, DurationParser, NaturalParser};
pub use options::{TimerOptions, UnknownWindowTitleMode, WindowTitleMode};
pub use record::{DateTimeRecord, DurationRecord, TimerInputRecord, TimerOptionsRecord};
pub use resolve::{
    InputResolver, ResolveOrder, UnknownResolveOrder, from_date_time_or_duration,
    from_duration_or_date_time,
};
