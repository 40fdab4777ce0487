//! Timer engine: one countdown plus the mode it is counting for.
//!
//! The engine is purely synchronous. It owns no thread and performs no side
//! effects; the caller ticks it and reacts to the returned [`Event`]s.
//! Session-completion policy (statistics, task credit, mode cadence) lives
//! one level up in [`App`](crate::App).
//!
//! Every state-affecting command advances a generation counter. Deferred
//! auto-starts carry an [`AutoStartToken`] minted from that counter and are
//! ignored unless the generation is still current, so a pending auto-start
//! dies the moment the user touches anything.

use serde::Serialize;

use super::countdown::{Countdown, TickResult};
use super::mode::TimerMode;
use crate::clock::Clock;
use crate::config::Settings;
use crate::events::{AutoStartToken, Event};

/// Read-only view of the timer for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub is_active: bool,
    /// Fraction of the session still ahead, 1.0 down to 0.0.
    pub progress: f64,
}

/// Mode-aware countdown with generation tracking.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    mode: TimerMode,
    countdown: Countdown,
    /// Generation counter for auto-start token validation.
    epoch: u64,
}

impl TimerEngine {
    /// Start in focus mode, paused, with the configured focus duration.
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: TimerMode::Focus,
            countdown: Countdown::new(settings.duration_secs(TimerMode::Focus)),
            epoch: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn total_secs(&self) -> u32 {
        self.countdown.total_secs()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_secs: self.countdown.remaining_secs(),
            total_secs: self.countdown.total_secs(),
            is_active: self.countdown.is_active(),
            progress: self.countdown.progress(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start when paused, pause when running.
    pub fn toggle(&mut self, clock: &impl Clock) -> Event {
        self.epoch += 1;
        if self.countdown.pause() {
            Event::Paused {
                mode: self.mode,
                remaining_secs: self.countdown.remaining_secs(),
            }
        } else {
            self.countdown.start(clock);
            Event::Started {
                mode: self.mode,
                remaining_secs: self.countdown.remaining_secs(),
            }
        }
    }

    /// Advance the countdown. Returns the completion event when the current
    /// session's deadline is crossed; the engine is left deactivated with
    /// the mode unchanged, awaiting the caller's transition.
    pub fn tick(&mut self, clock: &impl Clock) -> Option<Event> {
        match self.countdown.tick(clock) {
            TickResult::Completed => Some(Event::Completed {
                mode: self.mode,
                total_secs: self.countdown.total_secs(),
            }),
            TickResult::Running { .. } | TickResult::Idle => None,
        }
    }

    /// Move to `mode`, abandoning any in-flight session without credit, and
    /// rearm with that mode's configured duration.
    pub fn switch_mode(&mut self, mode: TimerMode, settings: &Settings) -> Event {
        self.epoch += 1;
        self.mode = mode;
        let duration_secs = settings.duration_secs(mode);
        self.countdown.reset(duration_secs);
        Event::ModeChanged {
            mode,
            duration_secs,
        }
    }

    /// Adopt new settings. While paused the countdown is rearmed with the
    /// current mode's new duration; while running the in-flight session is
    /// left untouched until it completes or is switched away.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.epoch += 1;
        if !self.countdown.is_active() {
            self.countdown.reset(settings.duration_secs(self.mode));
        }
    }

    /// Replace the paused session's duration (both remaining and total).
    /// Rejected while running.
    pub fn override_remaining(&mut self, secs: u32) -> bool {
        if self.countdown.override_remaining(secs) {
            self.epoch += 1;
            true
        } else {
            false
        }
    }

    /// Mint a token tied to the current generation, for a deferred start.
    pub fn arm_auto_start(&self) -> AutoStartToken {
        AutoStartToken(self.epoch)
    }

    /// Deferred start. Fires only if no state-affecting command ran since
    /// the token was minted and the countdown is still paused.
    pub fn auto_start(&mut self, token: AutoStartToken, clock: &impl Clock) -> Option<Event> {
        if token.0 != self.epoch || self.countdown.is_active() {
            return None;
        }
        self.epoch += 1;
        self.countdown.start(clock);
        Some(Event::Started {
            mode: self.mode,
            remaining_secs: self.countdown.remaining_secs(),
        })
    }
}
