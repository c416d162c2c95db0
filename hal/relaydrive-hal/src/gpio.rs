//! GPIO pin abstractions
//!
//! Provides traits for the digital pins a drive is wired to: relay outputs
//! and limit switch inputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logic level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    #[default]
    High,
}

impl Level {
    /// Level from a raw boolean (true = high)
    pub const fn from_bool(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Get the opposite level
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        Level::from_bool(high)
    }
}

/// Digital output pin
///
/// Relay outputs are active-high: a high pin energizes the relay.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Read the current level
    fn level(&self) -> Level {
        Level::from_bool(self.is_high())
    }
}

impl<P: InputPin + ?Sized> InputPin for &P {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockInput {
        high: Cell<bool>,
    }

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from_bool(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert_eq!(Level::High.inverted(), Level::Low);
        assert!(!Level::Low.is_high());
        assert_eq!(Level::default(), Level::High);
    }

    #[test]
    fn test_set_level() {
        let mut pin = MockOutput { high: false };

        pin.set_level(Level::High);
        assert!(pin.is_set_high());

        pin.set_level(Level::Low);
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_shared_input_reads_through() {
        let pin = MockInput {
            high: Cell::new(false),
        };
        let shared = &pin;
        assert!(shared.is_low());

        pin.high.set(true);
        assert_eq!(shared.level(), Level::High);
    }
}
