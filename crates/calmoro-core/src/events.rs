//! State-change events and side-effect descriptors.
//!
//! Commands on the engine/aggregate return plain data describing what
//! happened ([`Event`]) and what the embedding shell should now do
//! ([`Effect`]). The core never performs side effects itself; that keeps
//! every transition synchronously testable.

use serde::{Deserialize, Serialize};

use crate::config::SoundKind;
use crate::timer::TimerMode;

/// A state change the timer reports to its embedder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// The countdown started (or resumed) in `mode`.
    #[serde(rename_all = "camelCase")]
    Started { mode: TimerMode, remaining_secs: u32 },
    /// The countdown paused with this much left.
    #[serde(rename_all = "camelCase")]
    Paused { mode: TimerMode, remaining_secs: u32 },
    /// A session ran to its deadline. `total_secs` is the session's actual
    /// duration (honoring manual overrides), for statistics crediting.
    #[serde(rename_all = "camelCase")]
    Completed { mode: TimerMode, total_secs: u32 },
    /// The machine moved to a new mode and rearmed the countdown.
    #[serde(rename_all = "camelCase")]
    ModeChanged { mode: TimerMode, duration_secs: u32 },
}

/// Proof that an auto-start was armed by the most recent transition.
///
/// Any later state-affecting command advances the engine's generation and
/// strands outstanding tokens, so a settling auto-start can never fire into
/// a state the user has since changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStartToken(pub(crate) u64);

/// A side effect the shell must carry out on the core's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Surface a session-completed notification for `completed`.
    Notify { completed: TimerMode },
    /// After `delay_ms`, call `auto_start(token)` on the aggregate.
    ScheduleAutoStart { token: AutoStartToken, delay_ms: u64 },
    /// Switch the background-noise generator to `sound`.
    BackgroundNoise { sound: SoundKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_tagged() {
        let event = Event::Completed {
            mode: TimerMode::Focus,
            total_secs: 1_500,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"completed\""));
        assert!(json.contains("\"mode\":\"FOCUS\""));
        assert!(json.contains("\"totalSecs\":1500"));
    }
}
