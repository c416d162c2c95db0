//! Clock backed by the embassy time driver

use crate::time::{Clock, Instant};

/// Millisecond clock reading `embassy_time::Instant::now()`
///
/// The 64-bit embassy tick count is truncated to 32 bits. Elapsed-time math
/// on [`Instant`] wraps, so the truncation is invisible to callers measuring
/// intervals shorter than ~49 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
    }
}
