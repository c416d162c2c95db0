//! Run-time ceiling

use relaydrive_hal::Instant;

/// Tracks how long the current move has been running
///
/// A limit of zero seconds disables the ceiling.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunTimer {
    /// Ceiling in seconds (0 = unlimited)
    limit_s: u32,
    /// Time the move was started
    started_at: Instant,
}

impl RunTimer {
    /// Create a timer with the given ceiling
    pub const fn new(limit_s: u32) -> Self {
        Self {
            limit_s,
            started_at: Instant::from_millis(0),
        }
    }

    /// Get the ceiling in seconds
    pub fn limit_s(&self) -> u32 {
        self.limit_s
    }

    /// Set the ceiling in seconds (0 = unlimited)
    pub fn set_limit_s(&mut self, limit_s: u32) {
        self.limit_s = limit_s;
    }

    /// Check if the ceiling is disabled
    pub fn is_unlimited(&self) -> bool {
        self.limit_s == 0
    }

    /// Record the start of a move
    pub fn start(&mut self, now: Instant) {
        self.started_at = now;
    }

    /// Time the move was started
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Milliseconds since the move was started
    pub fn elapsed_ms(&self, now: Instant) -> u32 {
        now.elapsed_since(self.started_at)
    }

    /// Check if the move has run strictly longer than the ceiling
    pub fn is_expired(&self, now: Instant) -> bool {
        if self.is_unlimited() {
            return false;
        }
        // u64 so ceilings beyond the u32 millisecond range cannot overflow
        u64::from(self.elapsed_ms(now)) > u64::from(self.limit_s) * 1000
    }
}
