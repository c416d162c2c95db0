//! Property tests for the safety monitors

use proptest::prelude::*;
use relaydrive_core::safety::{OverloadCheck, OverloadMonitor, OverloadSettings, RunTimer};
use relaydrive_hal::Instant;

proptest! {
    /// Elapsed time is independent of where the counter wraps
    #[test]
    fn elapsed_is_wrap_invariant(start in any::<u32>(), delta in 0u32..=u32::MAX / 2) {
        let begin = Instant::from_millis(start);
        let end = begin.wrapping_add_ms(delta);
        prop_assert_eq!(end.elapsed_since(begin), delta);
    }

    /// The run timer expires exactly when elapsed time exceeds the ceiling
    #[test]
    fn timer_boundary(start in any::<u32>(), limit_s in 1u32..3_600, delta in 0u32..4_000_000) {
        let mut timer = RunTimer::new(limit_s);
        let begin = Instant::from_millis(start);
        timer.start(begin);
        prop_assert_eq!(
            timer.is_expired(begin.wrapping_add_ms(delta)),
            delta > limit_s * 1000
        );
    }

    /// A spike shorter than the grace period never trips, wherever it starts
    #[test]
    fn short_spike_never_trips(
        start in any::<u32>(),
        grace_ms in 2u32..5_000,
        poll_ms in 1u32..50,
        spike_frac in 0.0f64..1.0,
    ) {
        let mut mon = OverloadMonitor::new(OverloadSettings::new(5.0, grace_ms).unwrap());
        let spike_ms = ((grace_ms - 1) as f64 * spike_frac) as u32;
        let begin = Instant::from_millis(start);

        let mut t = 0;
        while t <= spike_ms {
            prop_assert!(!mon.check(6.0, begin.wrapping_add_ms(t)).is_overload());
            t += poll_ms;
        }
        for _ in 0..100 {
            prop_assert!(!mon.check(4.0, begin.wrapping_add_ms(t)).is_overload());
            t += poll_ms;
        }
    }

    /// Sustained overcurrent trips on the first poll at or after the grace period
    #[test]
    fn sustained_overcurrent_trips_on_time(
        start in any::<u32>(),
        grace_ms in 1u32..5_000,
        poll_ms in 1u32..50,
    ) {
        let mut mon = OverloadMonitor::new(OverloadSettings::new(5.0, grace_ms).unwrap());
        let begin = Instant::from_millis(start);
        prop_assert_eq!(mon.check(6.0, begin), OverloadCheck::Armed);

        let mut t = poll_ms;
        loop {
            let result = mon.check(6.0, begin.wrapping_add_ms(t));
            if t >= grace_ms {
                prop_assert_eq!(result, OverloadCheck::Tripped);
                break;
            }
            prop_assert_eq!(result, OverloadCheck::Pending);
            t += poll_ms;
        }
    }
}
