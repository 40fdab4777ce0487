//! Daily focus statistics.
//!
//! One [`DailyStat`] per local calendar day with any activity; entries are
//! appended on first occurrence and mutated in place afterwards, never
//! deleted. The ledger serializes as a bare JSON array to stay
//! blob-compatible with previously persisted data.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Focus activity recorded for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    /// Local calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub sessions_completed: u32,
    pub minutes_focused: u32,
}

impl DailyStat {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sessions_completed: 0,
            minutes_focused: 0,
        }
    }
}

/// Append-only ledger of daily focus activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsLedger {
    entries: Vec<DailyStat>,
}

impl StatsLedger {
    pub fn new(entries: Vec<DailyStat>) -> Self {
        Self { entries }
    }

    /// Credit one completed focus session of `minutes` to `date`.
    ///
    /// Returns the day's session count after the increment; the long-break
    /// cadence decision is taken from this value.
    pub fn record_focus(&mut self, date: NaiveDate, minutes: u32) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.date == date) {
            entry.sessions_completed += 1;
            entry.minutes_focused += minutes;
            return entry.sessions_completed;
        }
        self.entries.push(DailyStat {
            date,
            sessions_completed: 1,
            minutes_focused: minutes,
        });
        1
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn entries(&self) -> &[DailyStat] {
        &self.entries
    }

    pub fn sessions_on(&self, date: NaiveDate) -> u32 {
        self.entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.sessions_completed)
            .unwrap_or(0)
    }

    pub fn minutes_on(&self, date: NaiveDate) -> u32 {
        self.entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.minutes_focused)
            .unwrap_or(0)
    }

    pub fn total_sessions(&self) -> u32 {
        self.entries.iter().map(|e| e.sessions_completed).sum()
    }

    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.minutes_focused).sum()
    }

    /// The trailing seven days ending at `today`, oldest first, zero-filled
    /// for days without activity. Feeds the weekly activity chart.
    pub fn last_seven_days(&self, today: NaiveDate) -> Vec<DailyStat> {
        (0..7)
            .rev()
            .map(|offset| {
                let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
                self.entries
                    .iter()
                    .find(|e| e.date == date)
                    .cloned()
                    .unwrap_or_else(|| DailyStat::empty(date))
            })
            .collect()
    }

    /// Whether any day of the given month saw a completed session. Feeds
    /// the calendar heat map's month summary.
    pub fn has_activity_in_month(&self, year: i32, month: u32) -> bool {
        self.entries
            .iter()
            .any(|e| e.date.year() == year && e.date.month() == month && e.sessions_completed > 0)
    }
}
