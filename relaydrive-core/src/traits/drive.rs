//! Drive control trait
//!
//! A drive is a relay pair (one relay per direction of travel) bounded by a
//! limit switch at each end. Moves are advanced by polling: the host calls
//! [`DriveControl::start`] once, then [`DriveControl::step`] repeatedly until
//! the status is terminal.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::DriveStatus;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward the backward limit switch
    Backward,
    /// Toward the forward limit switch
    #[default]
    Forward,
}

impl Direction {
    /// Get the opposite direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Direction from a flag (true = forward)
    pub const fn from_bool(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Check if this is the forward direction
    pub const fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

/// Errors that can occur when configuring a drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// Overload grace period of zero would trip on every transient
    ZeroGracePeriod,
    /// Overload threshold is NaN or negative
    InvalidThreshold,
    /// Overload protection configured without a current source
    MissingCurrentSource,
    /// Drive label exceeds the maximum length
    LabelTooLong,
}

/// Control surface of a polled drive
pub trait DriveControl {
    /// Set the direction used by the next move
    fn set_direction(&mut self, dir: Direction);

    /// Get the configured direction
    fn direction(&self) -> Direction;

    /// Set the run-time ceiling in seconds (0 = unlimited)
    fn set_max_run_time(&mut self, seconds: u32);

    /// Get the run-time ceiling in seconds
    fn max_run_time(&self) -> u32;

    /// Energize the relay for the configured direction and begin a move
    fn start(&mut self);

    /// Evaluate the move once
    ///
    /// Stops the outputs and records a terminal status when the limit switch
    /// is reached, the run-time ceiling expires, or the overload latch trips.
    /// Returns the status after evaluation.
    fn step(&mut self) -> DriveStatus;

    /// De-energize both relays
    ///
    /// Does not change the status. Safe to call at any time.
    fn stop(&mut self);

    /// De-energize both relays and end a running move as `Stopped`
    fn abort(&mut self);

    /// Get the status of the most recent move
    fn status(&self) -> DriveStatus;

    /// Check if a move is running
    fn is_moving(&self) -> bool {
        self.status().is_in_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
        assert_eq!(Direction::Backward.opposite(), Direction::Forward);
    }

    #[test]
    fn test_flag_encoding() {
        assert_eq!(Direction::from_bool(true), Direction::Forward);
        assert_eq!(Direction::from_bool(false), Direction::Backward);
        assert!(Direction::default().is_forward());
    }
}
