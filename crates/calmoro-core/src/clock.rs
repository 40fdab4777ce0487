//! Time source abstraction.
//!
//! All timer arithmetic goes through the [`Clock`] trait so that tests can
//! step time deterministically instead of sleeping. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};

/// Wall-clock source: epoch milliseconds plus the local calendar date.
///
/// The two are deliberately separate queries. Daily statistics are keyed by
/// the user's local day, while countdown deadlines are plain epoch deltas.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;

    /// The current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually advanced clock for tests.
///
/// Cloned handles share the same underlying instant, so a test can hold one
/// handle while the code under test owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
    today: Arc<Mutex<NaiveDate>>,
}

impl ManualClock {
    pub fn new(start_ms: u64, today: NaiveDate) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(start_ms)),
            today: Arc::new(Mutex::new(today)),
        }
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Move the clock to an absolute instant. May go backwards.
    pub fn set_ms(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::SeqCst);
    }

    pub fn set_today(&self, date: NaiveDate) {
        *self
            .today
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = date;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(
            1_700_000_000_000,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        )
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        *self
            .today
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::default();
        let start = clock.now_ms();
        clock.advance(1_500);
        assert_eq!(clock.now_ms(), start + 1_500);
    }

    #[test]
    fn manual_clock_handles_share_state() {
        let clock = ManualClock::default();
        let other = clock.clone();
        clock.advance(200);
        assert_eq!(other.now_ms(), clock.now_ms());

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        other.set_today(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn system_clock_is_nonzero() {
        assert!(SystemClock.now_ms() > 0);
    }
}
