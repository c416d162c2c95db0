//! Board-agnostic core logic for the relaydrive controller
//!
//! This crate contains the logic that does not depend on specific pins:
//!
//! - Drive abstraction traits (control surface, current source)
//! - Drive status model
//! - Safety monitoring (run-time ceiling, overcurrent latch)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod safety;
pub mod state;
pub mod traits;
