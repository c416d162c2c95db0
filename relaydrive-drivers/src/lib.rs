//! Relay drive controller
//!
//! This crate provides the concrete drive implementation on top of the
//! traits in relaydrive-core and relaydrive-hal:
//!
//! - Relay output pair (one relay per direction, backward optional)
//! - Limit switches with per-switch idle level
//! - [`DriveController`]: the polled move state machine with run-time and
//!   overcurrent protection

#![no_std]
#![deny(unsafe_code)]

pub mod drive;

pub use drive::{DriveController, LimitSwitch, LimitSwitches, RelayOutputs};
