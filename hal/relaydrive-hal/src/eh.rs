//! Adapters for `embedded-hal` 1.0 digital pins
//!
//! Chip HALs (embassy-rp, embassy-stm32, rp2040-hal, ...) expose their GPIO
//! through the `embedded-hal` digital traits. Those traits are fallible and
//! take `&mut self` for reads; on-chip GPIO is infallible in practice, so the
//! adapters only accept pins whose error type is [`Infallible`].

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Relay output backed by an `embedded-hal` output pin
pub struct EhOutput<P> {
    pin: P,
    /// Last level written
    high: bool,
}

impl<P> EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it low first so the relay starts released
    pub fn new(mut pin: P) -> Self {
        match pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
        Self { pin, high: false }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Limit switch input backed by an `embedded-hal` input pin
pub struct EhInput<P> {
    pin: RefCell<P>,
}

impl<P> EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&self) -> bool {
        match self.pin.borrow_mut().is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a> {
        level: &'a Cell<bool>,
    }

    impl digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl digital::OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level.set(true);
            Ok(())
        }
    }

    impl digital::InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level.get())
        }
    }

    #[test]
    fn test_output_starts_low() {
        let level = Cell::new(true);
        let out = EhOutput::new(MockPin { level: &level });

        assert!(!level.get());
        assert!(out.is_set_low());
    }

    #[test]
    fn test_output_tracks_level() {
        let level = Cell::new(false);
        let mut out = EhOutput::new(MockPin { level: &level });

        out.set_high();
        assert!(level.get());
        assert!(out.is_set_high());

        out.set_low();
        assert!(!level.get());
        assert!(out.is_set_low());
    }

    #[test]
    fn test_input_reads_through() {
        let level = Cell::new(false);
        let input = EhInput::new(MockPin { level: &level });
        assert!(input.is_low());

        level.set(true);
        assert!(input.is_high());
    }
}
