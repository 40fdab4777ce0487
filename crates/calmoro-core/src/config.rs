//! User-tunable settings and small preference types.
//!
//! `Settings` is blob-compatible with the previously persisted JSON
//! (camelCase keys, minutes as plain integers). Unknown fields are ignored
//! and missing fields fall back to per-field defaults, so partial or stale
//! blobs still load.

use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

fn default_pomodoro_duration() -> u32 {
    25
}

fn default_short_break_duration() -> u32 {
    5
}

fn default_long_break_duration() -> u32 {
    15
}

fn default_auto_start() -> bool {
    false
}

fn default_long_break_interval() -> u32 {
    4
}

fn default_daily_goal() -> u32 {
    8
}

/// Timer configuration. Durations are whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_pomodoro_duration")]
    pub pomodoro_duration: u32,
    #[serde(default = "default_short_break_duration")]
    pub short_break_duration: u32,
    #[serde(default = "default_long_break_duration")]
    pub long_break_duration: u32,
    /// Start the break countdown automatically after a focus session.
    #[serde(default = "default_auto_start")]
    pub auto_start_breaks: bool,
    /// Start the next focus countdown automatically after a break.
    #[serde(default = "default_auto_start")]
    pub auto_start_pomodoros: bool,
    /// Completed focus sessions per day before a long break is due.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
    /// Advisory target of focus sessions per day. Not enforced.
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_duration: default_pomodoro_duration(),
            short_break_duration: default_short_break_duration(),
            long_break_duration: default_long_break_duration(),
            auto_start_breaks: false,
            auto_start_pomodoros: false,
            long_break_interval: default_long_break_interval(),
            daily_goal: default_daily_goal(),
        }
    }
}

impl Settings {
    /// Clamp every numeric field to its minimum of 1.
    ///
    /// Applied once at acceptance (load and update) so downstream code never
    /// has to defend against zero durations or a zero modulo interval.
    pub fn normalized(mut self) -> Self {
        self.pomodoro_duration = self.pomodoro_duration.max(1);
        self.short_break_duration = self.short_break_duration.max(1);
        self.long_break_duration = self.long_break_duration.max(1);
        self.long_break_interval = self.long_break_interval.max(1);
        self.daily_goal = self.daily_goal.max(1);
        self
    }

    /// Configured duration of a session in the given mode, in seconds.
    pub fn duration_secs(&self, mode: TimerMode) -> u32 {
        let minutes = match mode {
            TimerMode::Focus => self.pomodoro_duration,
            TimerMode::ShortBreak => self.short_break_duration,
            TimerMode::LongBreak => self.long_break_duration,
        };
        minutes.saturating_mul(60)
    }
}

/// Color-scheme preference, persisted as the bare strings
/// `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized means the default.
    pub fn from_persisted(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// Background-noise selection. Cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKind {
    #[default]
    None,
    WhiteNoise,
    Brown,
}

impl SoundKind {
    pub fn next(self) -> Self {
        match self {
            SoundKind::None => SoundKind::WhiteNoise,
            SoundKind::WhiteNoise => SoundKind::Brown,
            SoundKind::Brown => SoundKind::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected_values() {
        let s = Settings::default();
        assert_eq!(s.pomodoro_duration, 25);
        assert_eq!(s.short_break_duration, 5);
        assert_eq!(s.long_break_duration, 15);
        assert!(!s.auto_start_breaks);
        assert!(!s.auto_start_pomodoros);
        assert_eq!(s.long_break_interval, 4);
        assert_eq!(s.daily_goal, 8);
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"pomodoroDuration\":25"));
        assert!(json.contains("\"autoStartBreaks\":false"));
        assert!(json.contains("\"longBreakInterval\":4"));
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let s: Settings = serde_json::from_str("{\"pomodoroDuration\":50}").unwrap();
        assert_eq!(s.pomodoro_duration, 50);
        assert_eq!(s.long_break_interval, 4);
        assert_eq!(s.daily_goal, 8);
    }

    #[test]
    fn normalized_clamps_zeros() {
        let s = Settings {
            pomodoro_duration: 0,
            short_break_duration: 0,
            long_break_duration: 0,
            long_break_interval: 0,
            daily_goal: 0,
            ..Settings::default()
        }
        .normalized();
        assert_eq!(s.pomodoro_duration, 1);
        assert_eq!(s.short_break_duration, 1);
        assert_eq!(s.long_break_duration, 1);
        assert_eq!(s.long_break_interval, 1);
        assert_eq!(s.daily_goal, 1);
    }

    #[test]
    fn duration_lookup_by_mode() {
        let s = Settings::default();
        assert_eq!(s.duration_secs(TimerMode::Focus), 25 * 60);
        assert_eq!(s.duration_secs(TimerMode::ShortBreak), 5 * 60);
        assert_eq!(s.duration_secs(TimerMode::LongBreak), 15 * 60);
    }

    #[test]
    fn theme_round_trip_and_fallback() {
        assert_eq!(Theme::from_persisted("light"), Theme::Light);
        assert_eq!(Theme::from_persisted("dark"), Theme::Dark);
        assert_eq!(Theme::from_persisted("solarized"), Theme::Dark);
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn sound_cycle_order() {
        let mut kind = SoundKind::None;
        kind = kind.next();
        assert_eq!(kind, SoundKind::WhiteNoise);
        kind = kind.next();
        assert_eq!(kind, SoundKind::Brown);
        kind = kind.next();
        assert_eq!(kind, SoundKind::None);
    }
}
