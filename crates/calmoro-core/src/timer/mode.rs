//! Timer mode enumeration.

use serde::{Deserialize, Serialize};

/// The three session kinds the timer cycles through.
///
/// Serialized in SCREAMING_SNAKE_CASE to stay blob-compatible with
/// previously persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [
        TimerMode::Focus,
        TimerMode::ShortBreak,
        TimerMode::LongBreak,
    ];

    pub fn is_focus(self) -> bool {
        self == TimerMode::Focus
    }

    pub fn is_break(self) -> bool {
        !self.is_focus()
    }

    /// Human-readable label for notifications and display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }
}
