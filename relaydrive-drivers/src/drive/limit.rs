//! Limit switches
//!
//! Switches are wired either normally-closed or normally-open, to a pull-up
//! or a pull-down. The idle level records which raw level means "not
//! pressed"; any other level reads as pressed.

use relaydrive_core::traits::Direction;
use relaydrive_hal::{InputPin, Level};

/// A single end-of-travel switch, possibly not wired
pub struct LimitSwitch<I> {
    pin: Option<I>,
    /// Raw level when not pressed
    idle: Level,
}

impl<I: InputPin> LimitSwitch<I> {
    /// Create a wired switch
    pub fn new(pin: I, idle: Level) -> Self {
        Self {
            pin: Some(pin),
            idle,
        }
    }

    /// Create a switch that is not wired (always reads not pressed)
    pub fn absent() -> Self {
        Self {
            pin: None,
            idle: Level::High,
        }
    }

    /// Create a switch from an optional pin
    pub fn from_option(pin: Option<I>, idle: Level) -> Self {
        Self { pin, idle }
    }

    /// Check if a pin is wired
    pub fn is_wired(&self) -> bool {
        self.pin.is_some()
    }

    /// Raw level when not pressed
    pub fn idle_level(&self) -> Level {
        self.idle
    }

    /// Check if the switch is pressed
    pub fn is_pressed(&self) -> bool {
        match &self.pin {
            Some(pin) => pin.level() != self.idle,
            None => false,
        }
    }
}

/// Forward and backward limit switches
pub struct LimitSwitches<I> {
    forward: LimitSwitch<I>,
    backward: LimitSwitch<I>,
}

impl<I: InputPin> LimitSwitches<I> {
    /// Create a switch pair
    pub fn new(forward: LimitSwitch<I>, backward: LimitSwitch<I>) -> Self {
        Self { forward, backward }
    }

    /// No switches wired; moves can only end by time or overload
    pub fn none() -> Self {
        Self::new(LimitSwitch::absent(), LimitSwitch::absent())
    }

    /// Switch at the end of travel in `dir`
    pub fn get(&self, dir: Direction) -> &LimitSwitch<I> {
        match dir {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    /// Check if the switch for `dir` is wired
    pub fn has_switch(&self, dir: Direction) -> bool {
        self.get(dir).is_wired()
    }

    /// Check if the switch for `dir` is pressed
    pub fn is_pressed(&self, dir: Direction) -> bool {
        self.get(dir).is_pressed()
    }
}
