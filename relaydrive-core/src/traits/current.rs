//! Current measurement source
//!
//! The controller does not sample current itself. Some other part of the
//! firmware (an ADC task, an interrupt handler) keeps a reading up to date,
//! and the controller reads the latest value once per poll.

use core::cell::Cell;

/// Latest drive current reading
///
/// The unit is whatever the overload threshold is expressed in (usually
/// amperes). Implementations must be cheap: this is called on every poll.
pub trait CurrentSource {
    /// Read the most recent current value
    fn current(&self) -> f32;
}

impl<T: CurrentSource + ?Sized> CurrentSource for &T {
    fn current(&self) -> f32 {
        (**self).current()
    }
}

impl CurrentSource for Cell<f32> {
    fn current(&self) -> f32 {
        self.get()
    }
}

#[cfg(feature = "portable-atomic")]
impl CurrentSource for portable_atomic::AtomicF32 {
    fn current(&self) -> f32 {
        self.load(core::sync::atomic::Ordering::Relaxed)
    }
}

/// Placeholder source for drives without current measurement
///
/// Always reads zero, so it can never trip an overload.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl CurrentSource for NoSensor {
    fn current(&self) -> f32 {
        0.0
    }
}

/// Source backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Create a current source that calls `f` on every read
pub fn from_fn<F: Fn() -> f32>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: Fn() -> f32> CurrentSource for FromFn<F> {
    fn current(&self) -> f32 {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_source_tracks_updates() {
        let reading = Cell::new(1.5);
        let source = &reading;
        assert_eq!(source.current(), 1.5);

        reading.set(4.25);
        assert_eq!(source.current(), 4.25);
    }

    #[test]
    fn test_no_sensor_reads_zero() {
        assert_eq!(NoSensor.current(), 0.0);
    }

    #[test]
    fn test_closure_source() {
        let raw = Cell::new(2048u16);
        let source = from_fn(|| raw.get() as f32 * 0.01);
        assert_eq!(source.current(), 20.48);
    }

    #[cfg(feature = "portable-atomic")]
    #[test]
    fn test_atomic_source() {
        let reading = portable_atomic::AtomicF32::new(0.5);
        reading.store(3.0, core::sync::atomic::Ordering::Relaxed);
        assert_eq!(reading.current(), 3.0);
    }
}
