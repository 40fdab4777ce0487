//! Tokio shell around the aggregate.
//!
//! The aggregate is synchronous; this driver supplies the two asynchronous
//! collaborators it expects: a periodic tick while the countdown is active,
//! and the settle-delayed auto-start. Effects returned by commands are
//! executed here, outside the state lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::app::App;
use crate::clock::Clock;
use crate::config::{Settings, SoundKind, Theme};
use crate::events::Effect;
use crate::storage::KvStore;
use crate::task::Task;
use crate::timer::{TimerMode, TimerSnapshot};

/// Tick cadence while a countdown is active.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Outbound side-effect surface: completion notifications and the
/// background-noise generator. Calls are fire-and-forget.
pub trait NotificationSink: Send + Sync + 'static {
    fn session_completed(&self, completed: TimerMode);
    fn background_noise(&self, sound: SoundKind);
}

/// Sink that drops everything. For embedders without notification surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn session_completed(&self, _completed: TimerMode) {}
    fn background_noise(&self, _sound: SoundKind) {}
}

/// Shared-handle driver. Cloning is cheap; all clones operate on the same
/// aggregate and ticker.
pub struct Driver<C: Clock, S: KvStore, N> {
    app: Arc<Mutex<App<C, S>>>,
    sink: Arc<N>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    shut_down: Arc<AtomicBool>,
    tick_interval: Duration,
}

impl<C: Clock, S: KvStore, N> Clone for Driver<C, S, N> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            sink: self.sink.clone(),
            ticker: self.ticker.clone(),
            shut_down: self.shut_down.clone(),
            tick_interval: self.tick_interval,
        }
    }
}

impl<C, S, N> Driver<C, S, N>
where
    C: Clock + Send + 'static,
    S: KvStore + Send + 'static,
    N: NotificationSink,
{
    pub fn new(app: App<C, S>, sink: N) -> Self {
        Self {
            app: Arc::new(Mutex::new(app)),
            sink: Arc::new(sink),
            ticker: Arc::new(Mutex::new(None)),
            shut_down: Arc::new(AtomicBool::new(false)),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }

    /// Shrink or stretch the tick cadence. Mainly for tests.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub async fn toggle(&self) -> TimerSnapshot {
        let (snapshot, active) = {
            let mut app = self.app.lock().await;
            app.toggle();
            (app.snapshot(), app.is_active())
        };
        if active {
            self.ensure_ticker().await;
        }
        snapshot
    }

    pub async fn switch_mode(&self, mode: TimerMode) -> TimerSnapshot {
        let mut app = self.app.lock().await;
        app.switch_mode(mode);
        app.snapshot()
    }

    pub async fn override_remaining(&self, minutes: i64) -> bool {
        self.app.lock().await.override_remaining(minutes)
    }

    pub async fn update_settings(&self, settings: Settings) {
        self.app.lock().await.update_settings(settings);
    }

    // ── Task commands ────────────────────────────────────────────────

    pub async fn add_task(&self, title: &str, estimated_pomodoros: u32) -> String {
        self.app.lock().await.add_task(title, estimated_pomodoros)
    }

    pub async fn toggle_task(&self, id: &str) -> bool {
        self.app.lock().await.toggle_task(id)
    }

    pub async fn delete_task(&self, id: &str) -> bool {
        self.app.lock().await.delete_task(id)
    }

    pub async fn set_active_task(&self, id: Option<&str>) -> bool {
        self.app.lock().await.set_active_task(id)
    }

    // ── Preference commands ──────────────────────────────────────────

    pub async fn set_theme(&self, theme: Theme) {
        self.app.lock().await.set_theme(theme);
    }

    pub async fn cycle_sound(&self) -> SoundKind {
        let (effect, sound) = {
            let mut app = self.app.lock().await;
            (app.cycle_sound(), app.sound())
        };
        self.run_effects(vec![effect]);
        sound
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub async fn snapshot(&self) -> TimerSnapshot {
        self.app.lock().await.snapshot()
    }

    pub async fn settings(&self) -> Settings {
        self.app.lock().await.settings().clone()
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.app.lock().await.tasks().to_vec()
    }

    pub async fn streak(&self) -> u32 {
        self.app.lock().await.streak()
    }

    pub async fn sessions_today(&self) -> u32 {
        self.app.lock().await.sessions_today()
    }

    pub async fn quote(&self) -> &'static str {
        self.app.lock().await.quote()
    }

    /// Stop background work: the ticker is aborted and a settle-delay
    /// auto-start still sleeping is refused when it wakes. The aggregate
    /// itself needs no teardown.
    pub async fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// (Re)spawn the tick loop. It runs until the countdown deactivates,
    /// either by completing (effects are executed here) or by a pause.
    async fn ensure_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if self.shut_down.load(Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let driver = self.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            loop {
                interval.tick().await;

                let effects = {
                    let mut app = driver.app.lock().await;
                    if !app.is_active() {
                        break;
                    }
                    app.tick()
                };
                driver.run_effects(effects);
            }
        });

        *ticker_guard = Some(handle);
    }

    /// Execute effect descriptors. Never called with the state lock held.
    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify { completed } => self.sink.session_completed(completed),
                Effect::BackgroundNoise { sound } => self.sink.background_noise(sound),
                Effect::ScheduleAutoStart { token, delay_ms } => {
                    let driver = self.clone();
                    tokio::spawn(async move {
                        time::sleep(Duration::from_millis(delay_ms)).await;
                        if driver.shut_down.load(Ordering::SeqCst) {
                            return;
                        }
                        let started = driver.app.lock().await.auto_start(token);
                        if started {
                            info!("auto-started next session after settle delay");
                            driver.ensure_ticker().await;
                        }
                    });
                }
            }
        }
    }
}
