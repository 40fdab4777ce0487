//! Deadline-based countdown.
//!
//! The countdown never counts ticks. On activation it fixes a wall-clock
//! deadline and every tick re-derives the remaining whole seconds from that
//! deadline, so delayed or coalesced ticks self-correct instead of drifting.
//!
//! ## Lifecycle
//!
//! ```text
//! inactive --start--> active --tick..--> completed (inactive, remaining 0)
//!      ^                |
//!      '----- pause ----'
//! ```
//!
//! Completion is reported exactly once: the tick that crosses the deadline
//! clears it atomically, so no later tick can observe the crossing again.

use crate::clock::Clock;

/// Outcome of a single [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Countdown is not running; nothing happened.
    Idle,
    /// Countdown is running with this many whole seconds left.
    Running { remaining_secs: u32 },
    /// The deadline was crossed by this tick. Reported exactly once.
    Completed,
}

/// Wall-clock countdown over whole seconds.
///
/// `total_secs` is fixed at session start and is the denominator of the
/// progress fraction; `remaining_secs` never exceeds it and never increases
/// while running, even if the wall clock steps backwards.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_secs: u32,
    total_secs: u32,
    /// Epoch-ms instant the countdown reaches zero. `Some` iff active.
    deadline_ms: Option<u64>,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: total_secs,
            total_secs,
            deadline_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Fraction of the session still ahead: 1.0 at start, 0.0 at completion.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / self.total_secs as f64
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start counting down from the current remaining value.
    ///
    /// Returns `false` (and changes nothing) when already active.
    pub fn start(&mut self, clock: &impl Clock) -> bool {
        if self.is_active() {
            return false;
        }
        self.deadline_ms = Some(clock.now_ms() + u64::from(self.remaining_secs) * 1_000);
        true
    }

    /// Stop counting; the last published remaining value becomes the
    /// resume point. Returns `false` when already inactive.
    pub fn pause(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    /// Recompute remaining time from the deadline.
    ///
    /// Call periodically while active (a 200 ms cadence keeps whole-second
    /// displays honest). The tick that reaches the deadline deactivates and
    /// returns [`TickResult::Completed`]; every later tick is `Idle`.
    pub fn tick(&mut self, clock: &impl Clock) -> TickResult {
        let Some(deadline) = self.deadline_ms else {
            return TickResult::Idle;
        };
        let now = clock.now_ms();
        if now >= deadline {
            self.deadline_ms = None;
            self.remaining_secs = 0;
            return TickResult::Completed;
        }
        // Ceil so the display holds each second for its full duration, and
        // clamp so a backwards wall-clock step cannot raise the reading.
        let remaining = (deadline - now).div_ceil(1_000) as u32;
        self.remaining_secs = remaining.min(self.remaining_secs);
        TickResult::Running {
            remaining_secs: self.remaining_secs,
        }
    }

    /// Replace the session duration. Only allowed while inactive; the next
    /// session starts fresh with `secs` as both remaining and total.
    pub fn override_remaining(&mut self, secs: u32) -> bool {
        if self.is_active() {
            return false;
        }
        self.remaining_secs = secs;
        self.total_secs = secs;
        true
    }

    /// Abandon whatever is in flight and rearm for a new duration.
    pub fn reset(&mut self, total_secs: u32) {
        self.deadline_ms = None;
        self.remaining_secs = total_secs;
        self.total_secs = total_secs;
    }
}
