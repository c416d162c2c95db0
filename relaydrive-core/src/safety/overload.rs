//! Overcurrent protection
//!
//! A stalled or jammed drive draws more current than a free-running one, but
//! so does every motor for a moment at switch-on. The monitor only reports an
//! overload when the reading stays above the threshold for the whole grace
//! period:
//!
//! ```text
//!            current > max                 elapsed >= grace
//!   Normal ────────────────▶ Suspect ─────────────────────▶ Normal (tripped)
//!      ▲                        │
//!      └────────────────────────┘
//!            current <= max
//! ```
//!
//! The latch re-arms itself after tripping, so no timer task is needed: it is
//! evaluated once per poll with the current time.

use relaydrive_hal::Instant;

use crate::traits::DriveError;

/// Grace period used when none is given
pub const DEFAULT_GRACE_MS: u32 = 1;

/// Validated overload thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverloadSettings {
    max_current: f32,
    grace_ms: u32,
}

impl OverloadSettings {
    /// Create settings
    ///
    /// # Errors
    /// - [`DriveError::InvalidThreshold`] if `max_current` is NaN or negative
    /// - [`DriveError::ZeroGracePeriod`] if `grace_ms` is zero
    pub fn new(max_current: f32, grace_ms: u32) -> Result<Self, DriveError> {
        if max_current.is_nan() || max_current < 0.0 {
            return Err(DriveError::InvalidThreshold);
        }
        if grace_ms == 0 {
            return Err(DriveError::ZeroGracePeriod);
        }
        Ok(Self {
            max_current,
            grace_ms,
        })
    }

    /// Current above which the drive is suspected of overload
    pub fn max_current(&self) -> f32 {
        self.max_current
    }

    /// Time the current must stay above the threshold before tripping (ms)
    pub fn grace_ms(&self) -> u32 {
        self.grace_ms
    }
}

/// Latch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Latch {
    /// Current at or below the threshold
    Normal,
    /// Current above the threshold since the given instant
    Suspect { since: Instant },
}

/// Result of one overload evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverloadCheck {
    /// Current within limits
    Normal,
    /// Current just exceeded the threshold; grace period started
    Armed,
    /// Current still above the threshold, grace period not yet over
    Pending,
    /// Current fell back within limits before the grace period ended
    Released,
    /// Current stayed above the threshold for the whole grace period
    Tripped,
}

impl OverloadCheck {
    /// Check if this evaluation reports an overload
    pub fn is_overload(self) -> bool {
        matches!(self, OverloadCheck::Tripped)
    }
}

/// Debounced overcurrent latch
#[derive(Debug, Clone)]
pub struct OverloadMonitor {
    settings: OverloadSettings,
    latch: Latch,
}

impl OverloadMonitor {
    /// Create a monitor in the normal state
    pub fn new(settings: OverloadSettings) -> Self {
        Self {
            settings,
            latch: Latch::Normal,
        }
    }

    /// Get the thresholds
    pub fn settings(&self) -> &OverloadSettings {
        &self.settings
    }

    /// Replace the thresholds and re-arm the latch
    pub fn set_settings(&mut self, settings: OverloadSettings) {
        self.settings = settings;
        self.reset();
    }

    /// Return to the normal state, discarding any grace period in progress
    pub fn reset(&mut self) {
        self.latch = Latch::Normal;
    }

    /// Check if the grace period is running
    pub fn is_suspect(&self) -> bool {
        matches!(self.latch, Latch::Suspect { .. })
    }

    /// Evaluate one reading taken at `now`
    ///
    /// A NaN reading compares as not above the threshold.
    pub fn check(&mut self, current: f32, now: Instant) -> OverloadCheck {
        let over = current > self.settings.max_current;

        match self.latch {
            Latch::Normal => {
                if over {
                    self.latch = Latch::Suspect { since: now };
                    OverloadCheck::Armed
                } else {
                    OverloadCheck::Normal
                }
            }
            Latch::Suspect { since } => {
                if !over {
                    self.latch = Latch::Normal;
                    OverloadCheck::Released
                } else if now.elapsed_since(since) >= self.settings.grace_ms {
                    self.latch = Latch::Normal;
                    OverloadCheck::Tripped
                } else {
                    OverloadCheck::Pending
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    fn monitor(max_current: f32, grace_ms: u32) -> OverloadMonitor {
        OverloadMonitor::new(OverloadSettings::new(max_current, grace_ms).unwrap())
    }

    #[test]
    fn test_settings_validation() {
        assert_eq!(
            OverloadSettings::new(5.0, 0),
            Err(DriveError::ZeroGracePeriod)
        );
        assert_eq!(
            OverloadSettings::new(f32::NAN, 10),
            Err(DriveError::InvalidThreshold)
        );
        assert_eq!(
            OverloadSettings::new(-1.0, 10),
            Err(DriveError::InvalidThreshold)
        );

        let settings = OverloadSettings::new(5.0, DEFAULT_GRACE_MS).unwrap();
        assert_eq!(settings.max_current(), 5.0);
        assert_eq!(settings.grace_ms(), 1);
    }

    #[test]
    fn test_sustained_overcurrent_trips_after_grace() {
        let mut mon = monitor(5.0, 300);

        assert_eq!(mon.check(6.0, at(1_000)), OverloadCheck::Armed);
        assert_eq!(mon.check(6.0, at(1_150)), OverloadCheck::Pending);
        assert_eq!(mon.check(6.0, at(1_299)), OverloadCheck::Pending);
        assert_eq!(mon.check(6.0, at(1_300)), OverloadCheck::Tripped);
        assert!(!mon.is_suspect());
    }

    #[test]
    fn test_spike_releases() {
        let mut mon = monitor(5.0, 300);

        assert_eq!(mon.check(6.0, at(0)), OverloadCheck::Armed);
        assert_eq!(mon.check(6.0, at(100)), OverloadCheck::Pending);
        assert_eq!(mon.check(4.0, at(101)), OverloadCheck::Released);
        assert_eq!(mon.check(4.0, at(2_000)), OverloadCheck::Normal);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut mon = monitor(5.0, 1);
        assert_eq!(mon.check(5.0, at(0)), OverloadCheck::Normal);
        assert_eq!(mon.check(5.0, at(10)), OverloadCheck::Normal);
    }

    #[test]
    fn test_rearms_after_trip() {
        let mut mon = monitor(5.0, 50);

        mon.check(6.0, at(0));
        assert!(mon.check(6.0, at(50)).is_overload());

        // Still over: a fresh grace period starts
        assert_eq!(mon.check(6.0, at(51)), OverloadCheck::Armed);
        assert_eq!(mon.check(6.0, at(100)), OverloadCheck::Pending);
        assert!(mon.check(6.0, at(101)).is_overload());
    }

    #[test]
    fn test_grace_across_clock_wrap() {
        let mut mon = monitor(5.0, 300);
        let start = at(u32::MAX - 100);

        mon.check(6.0, start);
        assert_eq!(mon.check(6.0, start.wrapping_add_ms(299)), OverloadCheck::Pending);
        assert_eq!(mon.check(6.0, start.wrapping_add_ms(300)), OverloadCheck::Tripped);
    }

    #[test]
    fn test_nan_reading_is_not_overcurrent() {
        let mut mon = monitor(5.0, 1);
        assert_eq!(mon.check(f32::NAN, at(0)), OverloadCheck::Normal);
    }

    #[test]
    fn test_reset_discards_grace_period() {
        let mut mon = monitor(5.0, 300);
        mon.check(6.0, at(0));
        assert!(mon.is_suspect());

        mon.reset();
        assert!(!mon.is_suspect());
        assert_eq!(mon.check(6.0, at(400)), OverloadCheck::Armed);
    }
}
