//! Relay output pair
//!
//! One relay per direction of travel. Energizing both at once would short
//! the supply through the motor windings (or fight the mechanism), so every
//! direction change releases both relays before closing one.
//!
//! The backward relay is optional. Spring-return mechanisms only drive
//! forward; commanding backward on them simply releases the forward relay.

use relaydrive_core::traits::Direction;
use relaydrive_hal::OutputPin;

/// Forward relay plus optional backward relay
pub struct RelayOutputs<O> {
    forward: O,
    backward: Option<O>,
}

impl<O: OutputPin> RelayOutputs<O> {
    /// Create a relay pair, releasing both relays
    pub fn new(forward: O, backward: Option<O>) -> Self {
        let mut outputs = Self { forward, backward };
        outputs.release();
        outputs
    }

    /// Create a forward-only relay set (spring-return drive)
    pub fn forward_only(forward: O) -> Self {
        Self::new(forward, None)
    }

    /// Check if the backward relay is wired
    pub fn has_backward(&self) -> bool {
        self.backward.is_some()
    }

    /// Release both relays
    pub fn release(&mut self) {
        self.forward.set_low();
        if let Some(backward) = self.backward.as_mut() {
            backward.set_low();
        }
    }

    /// Energize the relay for `dir` after releasing both
    ///
    /// With no backward relay, `Backward` leaves the drive de-energized.
    pub fn drive(&mut self, dir: Direction) {
        self.release();
        match dir {
            Direction::Forward => self.forward.set_high(),
            Direction::Backward => {
                if let Some(backward) = self.backward.as_mut() {
                    backward.set_high();
                }
            }
        }
    }

    /// Direction currently energized, if any
    pub fn active(&self) -> Option<Direction> {
        if self.forward.is_set_high() {
            Some(Direction::Forward)
        } else if self.backward.as_ref().is_some_and(|b| b.is_set_high()) {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
