//! Configuration type definitions

use heapless::String;
use relaydrive_hal::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::safety::{OverloadSettings, DEFAULT_GRACE_MS};
use crate::traits::{Direction, DriveError};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Overcurrent protection settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverloadConfig {
    /// Current above which the drive is suspected of overload
    pub max_current: f32,
    /// Time the current must stay above `max_current` before tripping (ms)
    pub grace_ms: u32,
}

impl OverloadConfig {
    /// Create a config with the default grace period
    pub const fn new(max_current: f32) -> Self {
        Self {
            max_current,
            grace_ms: DEFAULT_GRACE_MS,
        }
    }

    /// Validate into monitor settings
    pub fn settings(&self) -> Result<OverloadSettings, DriveError> {
        OverloadSettings::new(self.max_current, self.grace_ms)
    }
}

/// Drive configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveConfig {
    /// Name used in log output (e.g., "gate", "vent")
    pub label: String<MAX_LABEL_LEN>,
    /// Direction of the first move
    pub direction: Direction,
    /// Run-time ceiling in seconds (0 = unlimited)
    pub max_run_time_s: u32,
    /// Raw level of the forward limit switch when not pressed
    pub forward_idle: Level,
    /// Raw level of the backward limit switch when not pressed
    pub backward_idle: Level,
    /// Overcurrent protection (None = disabled)
    pub overload: Option<OverloadConfig>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            direction: Direction::Forward,
            max_run_time_s: 0,
            // Switches are wired to pull-ups and close to ground when pressed
            forward_idle: Level::High,
            backward_idle: Level::High,
            overload: None,
        }
    }
}

impl DriveConfig {
    /// Create a default config with a label
    pub fn with_label(label: &str) -> Result<Self, DriveError> {
        let mut config = Self::default();
        config.label = label_from_str(label)?;
        Ok(config)
    }

    /// Check the config for values the controller would reject
    pub fn validate(&self) -> Result<(), DriveError> {
        if let Some(overload) = &self.overload {
            overload.settings()?;
        }
        Ok(())
    }

    /// Idle level of the switch at the end of travel in `dir`
    pub fn idle_level(&self, dir: Direction) -> Level {
        match dir {
            Direction::Forward => self.forward_idle,
            Direction::Backward => self.backward_idle,
        }
    }
}

/// Copy a label into a bounded string
pub fn label_from_str(label: &str) -> Result<String<MAX_LABEL_LEN>, DriveError> {
    let mut out = String::new();
    out.push_str(label).map_err(|_| DriveError::LabelTooLong)?;
    Ok(out)
}
