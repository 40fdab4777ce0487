//! Application aggregate.
//!
//! `App` is the single owner of every piece of mutable state: timer engine,
//! settings, task board, statistics ledger, streak, theme, sound and quote.
//! Embedders interact through command methods; each command mutates, then
//! explicitly persists the blobs it touched, then returns the [`Effect`]s
//! the shell must carry out. Persistence is fire-and-forget: a failed write
//! is logged and the session carries on.

use log::warn;

use crate::clock::Clock;
use crate::config::{Settings, SoundKind, Theme};
use crate::events::{AutoStartToken, Effect, Event};
use crate::quotes::{self, MOTIVATIONAL_QUOTES};
use crate::stats::StatsLedger;
use crate::storage::{KvStore, SETTINGS_KEY, STATS_KEY, TASKS_KEY, THEME_KEY};
use crate::task::{Task, TaskBoard};
use crate::timer::{TimerEngine, TimerMode, TimerSnapshot};

/// Settle delay between a session completing and its successor auto-starting.
pub const AUTO_START_DELAY_MS: u64 = 1_000;

/// Manual duration override bounds, whole minutes inclusive.
pub const MIN_OVERRIDE_MIN: i64 = 1;
pub const MAX_OVERRIDE_MIN: i64 = 120;

pub struct App<C: Clock, S: KvStore> {
    clock: C,
    store: S,
    engine: TimerEngine,
    settings: Settings,
    tasks: TaskBoard,
    stats: StatsLedger,
    /// Completed focus sessions this process. Never reset, never persisted.
    streak: u32,
    theme: Theme,
    sound: SoundKind,
    quote: &'static str,
}

impl<C: Clock, S: KvStore> App<C, S> {
    /// Build the aggregate from whatever the store holds. Missing or
    /// malformed blobs fall back to defaults; loading never fails.
    pub fn load(clock: C, store: S) -> Self {
        let settings: Settings = load_blob(&store, SETTINGS_KEY).unwrap_or_default();
        let settings = settings.normalized();
        let tasks: Vec<Task> = load_blob(&store, TASKS_KEY).unwrap_or_default();
        let stats: StatsLedger = load_blob(&store, STATS_KEY).unwrap_or_default();
        let theme = store
            .get(THEME_KEY)
            .map(|raw| Theme::from_persisted(&raw))
            .unwrap_or_default();

        let engine = TimerEngine::new(&settings);
        Self {
            clock,
            store,
            engine,
            settings,
            tasks: TaskBoard::from_tasks(tasks),
            stats,
            streak: 0,
            theme,
            sound: SoundKind::default(),
            quote: MOTIVATIONAL_QUOTES[0],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }

    pub fn mode(&self) -> TimerMode {
        self.engine.mode()
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn active_task_id(&self) -> Option<&str> {
        self.tasks.active_id()
    }

    pub fn stats(&self) -> &StatsLedger {
        &self.stats
    }

    /// Completed focus sessions on the current local day.
    pub fn sessions_today(&self) -> u32 {
        self.stats.sessions_on(self.clock.today())
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sound(&self) -> SoundKind {
        self.sound
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }

    /// Consume the aggregate and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ── Timer commands ───────────────────────────────────────────────

    /// Start when paused, pause when running. Timer state is never
    /// persisted; a reload always comes back paused and full.
    pub fn toggle(&mut self) -> Event {
        self.engine.toggle(&self.clock)
    }

    /// Advance the countdown; on completion runs the full session-end
    /// policy and returns the effects the shell must execute.
    pub fn tick(&mut self) -> Vec<Effect> {
        match self.engine.tick(&self.clock) {
            Some(Event::Completed { mode, total_secs }) => {
                self.handle_completion(mode, total_secs)
            }
            _ => Vec::new(),
        }
    }

    /// Jump to a mode, abandoning any in-flight session without credit.
    /// Selecting the current mode is allowed and acts as a reset.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        self.engine.switch_mode(mode, &self.settings)
    }

    /// Replace the paused session's duration. Whole minutes, 1 to 120;
    /// anything else (or a running timer) is rejected untouched.
    pub fn override_remaining(&mut self, minutes: i64) -> bool {
        if !(MIN_OVERRIDE_MIN..=MAX_OVERRIDE_MIN).contains(&minutes) {
            return false;
        }
        self.engine.override_remaining(minutes as u32 * 60)
    }

    /// Adopt (clamped) new settings and persist them. A paused timer is
    /// rearmed with the current mode's new duration; a running one keeps
    /// its in-flight session.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings.normalized();
        self.engine.apply_settings(&self.settings);
        self.persist_settings();
    }

    /// Deferred start scheduled by a completion effect. Returns whether the
    /// timer actually started; stale tokens and running timers are no-ops.
    pub fn auto_start(&mut self, token: AutoStartToken) -> bool {
        self.engine.auto_start(token, &self.clock).is_some()
    }

    // ── Task commands ────────────────────────────────────────────────

    pub fn add_task(&mut self, title: impl Into<String>, estimated_pomodoros: u32) -> String {
        let id = self.tasks.add(title, estimated_pomodoros);
        self.persist_tasks();
        id
    }

    pub fn toggle_task(&mut self, id: &str) -> bool {
        let changed = self.tasks.toggle(id);
        if changed {
            self.persist_tasks();
        }
        changed
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = self.tasks.delete(id);
        if removed {
            self.persist_tasks();
        }
        removed
    }

    /// Select the task completed focus sessions credit. Session-local:
    /// the selection is not persisted.
    pub fn set_active_task(&mut self, id: Option<&str>) -> bool {
        self.tasks.set_active(id)
    }

    // ── Preference commands ──────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.put(THEME_KEY, theme.as_str());
    }

    /// Advance the background-noise cycle and tell the shell about it.
    pub fn cycle_sound(&mut self) -> Effect {
        self.sound = self.sound.next();
        Effect::BackgroundNoise { sound: self.sound }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Session-end policy. Runs synchronously inside the completing tick.
    fn handle_completion(&mut self, completed: TimerMode, total_secs: u32) -> Vec<Effect> {
        let mut effects = vec![Effect::Notify { completed }];

        if completed.is_focus() {
            let today = self.clock.today();
            let sessions_today = self.stats.record_focus(today, total_secs / 60);
            self.streak += 1;
            let credited = self.tasks.credit_active();

            // Long break after every Nth focus session of the day.
            let next = if sessions_today % self.settings.long_break_interval == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            };
            self.engine.switch_mode(next, &self.settings);
            self.quote = quotes::pick(&mut rand::thread_rng());

            self.persist_stats();
            if credited {
                self.persist_tasks();
            }
            if self.settings.auto_start_breaks {
                effects.push(self.schedule_auto_start());
            }
        } else {
            self.engine.switch_mode(TimerMode::Focus, &self.settings);
            if self.settings.auto_start_pomodoros {
                effects.push(self.schedule_auto_start());
            }
        }
        effects
    }

    fn schedule_auto_start(&self) -> Effect {
        Effect::ScheduleAutoStart {
            token: self.engine.arm_auto_start(),
            delay_ms: AUTO_START_DELAY_MS,
        }
    }

    fn persist_settings(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(json) => self.put(SETTINGS_KEY, &json),
            Err(err) => warn!("failed to encode settings: {err}"),
        }
    }

    fn persist_tasks(&mut self) {
        match serde_json::to_string(self.tasks.tasks()) {
            Ok(json) => self.put(TASKS_KEY, &json),
            Err(err) => warn!("failed to encode tasks: {err}"),
        }
    }

    fn persist_stats(&mut self) {
        match serde_json::to_string(&self.stats) {
            Ok(json) => self.put(STATS_KEY, &json),
            Err(err) => warn!("failed to encode stats: {err}"),
        }
    }

    fn put(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.put(key, value) {
            warn!("failed to persist '{key}': {err}");
        }
    }
}

fn load_blob<T: serde::de::DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("discarding malformed blob under '{key}': {err}");
            None
        }
    }
}
