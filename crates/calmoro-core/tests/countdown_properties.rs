//! Property tests for the countdown's timing guarantees.
//!
//! Two invariants hold for any tick schedule: readings never increase while
//! running, and crossing the deadline reports completion exactly once.

use calmoro_core::{Countdown, ManualClock, TickResult};
use proptest::prelude::*;

proptest! {
    #[test]
    fn remaining_never_increases(
        total in 1u32..7_200,
        gaps in prop::collection::vec(0u64..5_000, 1..200),
    ) {
        let clock = ManualClock::default();
        let mut cd = Countdown::new(total);
        prop_assert!(cd.start(&clock));

        let mut last = cd.remaining_secs();
        for gap in gaps {
            clock.advance(gap);
            match cd.tick(&clock) {
                TickResult::Running { remaining_secs } => {
                    prop_assert!(remaining_secs <= last);
                    prop_assert!(remaining_secs <= cd.total_secs());
                    last = remaining_secs;
                }
                TickResult::Completed => {
                    prop_assert_eq!(cd.remaining_secs(), 0);
                    break;
                }
                TickResult::Idle => prop_assert!(false, "active countdown reported idle"),
            }
        }
    }

    #[test]
    fn wall_clock_steps_cannot_raise_remaining(
        total in 10u32..3_600,
        steps in prop::collection::vec(-3_000i64..3_000, 1..100),
    ) {
        let clock = ManualClock::default();
        let mut cd = Countdown::new(total);
        prop_assert!(cd.start(&clock));

        let mut now = clock.now_ms() as i64;
        let mut last = cd.remaining_secs();
        for step in steps {
            now += step;
            clock.set_ms(now as u64);
            match cd.tick(&clock) {
                TickResult::Running { remaining_secs } => {
                    prop_assert!(remaining_secs <= last);
                    last = remaining_secs;
                }
                TickResult::Completed => break,
                TickResult::Idle => prop_assert!(false, "active countdown reported idle"),
            }
        }
    }

    #[test]
    fn deadline_crossing_completes_exactly_once(
        total in 0u32..600,
        gaps in prop::collection::vec(0u64..10_000, 1..300),
    ) {
        let clock = ManualClock::default();
        let mut cd = Countdown::new(total);
        prop_assert!(cd.start(&clock));

        let mut completions = 0u32;
        for gap in gaps {
            clock.advance(gap);
            if cd.tick(&clock) == TickResult::Completed {
                completions += 1;
            }
        }

        // Force the crossing in case the random schedule fell short, then
        // keep ticking; nothing may fire a second time.
        clock.advance(u64::from(total) * 1_000 + 1);
        for _ in 0..4 {
            if cd.tick(&clock) == TickResult::Completed {
                completions += 1;
            }
            clock.advance(1_000);
        }

        prop_assert_eq!(completions, 1);
        prop_assert_eq!(cd.remaining_secs(), 0);
        prop_assert!(!cd.is_active());
    }
}
