//! Limit-switch drive
//!
//! - `outputs`: relay pair with mutual exclusion
//! - `limit`: end-of-travel switches with polarity normalization
//! - `controller`: move state machine

pub mod controller;
pub mod limit;
pub mod outputs;

#[cfg(feature = "embassy")]
pub mod asynch;

pub use controller::DriveController;
pub use limit::{LimitSwitch, LimitSwitches};
pub use outputs::RelayOutputs;
