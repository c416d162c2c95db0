//! Monotonic millisecond time
//!
//! Timestamps are 32-bit millisecond counters that wrap after ~49.7 days.
//! All duration math uses wrapping subtraction, so a single counter overflow
//! during a measured interval still yields the correct elapsed time.

/// A point in time on a monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create an instant from a raw millisecond tick count
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond tick count
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`
    ///
    /// Valid for intervals shorter than one full counter period.
    pub const fn elapsed_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Instant `ms` milliseconds after `self`, wrapping at the counter period
    pub const fn wrapping_add_ms(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Monotonic millisecond clock
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Milliseconds elapsed since `earlier`
    fn elapsed_since(&self, earlier: Instant) -> u32 {
        self.now().elapsed_since(earlier)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
