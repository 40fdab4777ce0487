//! Countdown and session state machine.

pub mod countdown;
pub mod engine;
pub mod mode;

pub use countdown::{Countdown, TickResult};
pub use engine::{TimerEngine, TimerSnapshot};
pub use mode::TimerMode;
