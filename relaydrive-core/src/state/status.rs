//! Drive status definition

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the most recent move
///
/// The numeric codes match the values reported by deployed controllers and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DriveStatus {
    /// Limit switch reached; the drive is at its target position
    #[default]
    Ok = 0,
    /// Run-time ceiling exceeded before the limit switch was reached
    Overtime = 1,
    /// Current stayed above the threshold for longer than the grace period
    Overload = 2,
    /// Move aborted by the caller; position is indeterminate
    Stopped = 3,
    /// Move running
    InProgress = 10,
}

impl DriveStatus {
    /// Numeric status code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric status code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DriveStatus::Ok),
            1 => Some(DriveStatus::Overtime),
            2 => Some(DriveStatus::Overload),
            3 => Some(DriveStatus::Stopped),
            10 => Some(DriveStatus::InProgress),
            _ => None,
        }
    }

    /// Check if a move is still running
    pub const fn is_in_progress(self) -> bool {
        matches!(self, DriveStatus::InProgress)
    }

    /// Check if this status ends a move
    pub const fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    /// Check if this is a protective stop
    pub const fn is_fault(self) -> bool {
        matches!(self, DriveStatus::Overtime | DriveStatus::Overload)
    }
}

impl From<DriveStatus> for u8 {
    fn from(status: DriveStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for DriveStatus {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        DriveStatus::from_code(code).ok_or(code)
    }
}
