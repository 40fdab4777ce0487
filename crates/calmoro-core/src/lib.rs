//! # Calmoro Core Library
//!
//! Core logic for the Calmoro productivity timer: a wall-clock countdown,
//! the session state machine built on top of it, and the bookkeeping that
//! session completions drive (daily statistics, streak, task crediting,
//! mode auto-chaining).
//!
//! ## Architecture
//!
//! - **Countdown**: deadline-based remaining-time arithmetic; the caller
//!   (or the bundled driver) invokes `tick()` periodically
//! - **App aggregate**: single owner of all mutable state; commands mutate,
//!   persist through a key-value store, and return effect descriptors
//! - **Driver**: tokio shell that runs the tick loop and executes effects
//! - **Storage**: `KvStore` trait with in-memory and file-backed stores,
//!   blob-compatible with the original web client's persisted JSON
//!
//! ## Key Components
//!
//! - [`App`]: state aggregate with the command surface
//! - [`Driver`]: async embedding of the aggregate
//! - [`TimerEngine`]: mode-aware countdown state machine
//! - [`StatsLedger`]: per-day focus statistics

pub mod app;
pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod quotes;
pub mod stats;
pub mod storage;
pub mod task;
pub mod timer;

pub use app::{App, AUTO_START_DELAY_MS, MAX_OVERRIDE_MIN, MIN_OVERRIDE_MIN};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Settings, SoundKind, Theme};
pub use driver::{Driver, NotificationSink, NullSink, TICK_INTERVAL_MS};
pub use error::StorageError;
pub use events::{AutoStartToken, Effect, Event};
pub use stats::{DailyStat, StatsLedger};
pub use storage::{JsonFileStore, KvStore, MemoryStore};
pub use task::{Task, TaskBoard};
pub use timer::{Countdown, TickResult, TimerEngine, TimerMode, TimerSnapshot};
