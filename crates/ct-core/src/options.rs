//! Timer options carried by every timer input.

use std::fmt;
use std::str::FromStr;

/// What the timer window shows in its title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowTitleMode {
    /// No title text.
    None,
    /// The application name.
    #[default]
    ApplicationName,
    /// The time left on the countdown.
    TimeLeft,
    /// The time elapsed since the countdown started.
    TimeElapsed,
    /// The user-supplied timer title.
    TimerTitle,
}

impl WindowTitleMode {
    /// String representation used in records and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApplicationName => "application_name",
            Self::TimeLeft => "time_left",
            Self::TimeElapsed => "time_elapsed",
            Self::TimerTitle => "timer_title",
        }
    }
}

impl fmt::Display for WindowTitleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WindowTitleMode {
    type Err = UnknownWindowTitleMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "application_name" => Ok(Self::ApplicationName),
            "time_left" => Ok(Self::TimeLeft),
            "time_elapsed" => Ok(Self::TimeElapsed),
            "timer_title" => Ok(Self::TimerTitle),
            _ => Err(UnknownWindowTitleMode(s.to_string())),
        }
    }
}

/// Error type for unknown window title mode strings.
#[derive(Debug, Clone)]
pub struct UnknownWindowTitleMode(String);

impl fmt::Display for UnknownWindowTitleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown window title mode: {}", self.0)
    }
}

impl std::error::Error for UnknownWindowTitleMode {}

/// Configuration for a single countdown.
///
/// A [`TimerInput`](crate::TimerInput) takes its own copy of these options when it is
/// built and only hands out shared references afterwards, so a snapshot held by an
/// input can never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent user-facing toggle"
)]
pub struct TimerOptions {
    /// Title shown for the timer.
    pub title: Option<String>,
    pub always_on_top: bool,
    /// Ask for confirmation before closing a running timer.
    pub prompt_on_exit: bool,
    pub show_progress_in_taskbar: bool,
    pub do_not_keep_computer_awake: bool,
    pub reverse_progress_bar: bool,
    /// Count up from zero instead of down to zero.
    pub show_time_elapsed: bool,
    /// Restart the countdown when it expires.
    pub loop_timer: bool,
    pub pop_up_when_expired: bool,
    pub close_when_expired: bool,
    pub window_title_mode: WindowTitleMode,
    /// Name of the colour theme.
    pub theme: Option<String>,
    /// Name of the sound played on expiry.
    pub sound: Option<String>,
    pub loop_sound: bool,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            title: None,
            always_on_top: false,
            prompt_on_exit: true,
            show_progress_in_taskbar: true,
            do_not_keep_computer_awake: false,
            reverse_progress_bar: false,
            show_time_elapsed: false,
            loop_timer: false,
            pop_up_when_expired: true,
            close_when_expired: false,
            window_title_mode: WindowTitleMode::default(),
            theme: None,
            sound: None,
            loop_sound: false,
        }
    }
}

impl TimerOptions {
    /// Returns these options with the given title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_mode_roundtrip_all_variants() {
        let variants = [
            WindowTitleMode::None,
            WindowTitleMode::ApplicationName,
            WindowTitleMode::TimeLeft,
            WindowTitleMode::TimeElapsed,
            WindowTitleMode::TimerTitle,
        ];

        for variant in &variants {
            let parsed: WindowTitleMode = variant.to_string().parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn unknown_window_title_mode_errors() {
        let err = "sideways".parse::<WindowTitleMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown window title mode: sideways");
    }

    #[test]
    fn default_options_prompt_and_pop_up() {
        let options = TimerOptions::default();
        assert!(options.prompt_on_exit);
        assert!(options.pop_up_when_expired);
        assert!(options.show_progress_in_taskbar);
        assert!(!options.loop_timer);
        assert_eq!(options.window_title_mode, WindowTitleMode::ApplicationName);
    }

    #[test]
    fn with_title_sets_title() {
        let options = TimerOptions::default().with_title("Tea");
        assert_eq!(options.title.as_deref(), Some("Tea"));
    }
}
