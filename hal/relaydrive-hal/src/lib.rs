//! Relaydrive Hardware Abstraction Layer
//!
//! This crate defines the capabilities the drive controller is given by the
//! board: digital pins and a monotonic millisecond clock. Keeping them behind
//! traits lets the same controller run on a microcontroller and in host tests
//! with fake pins and a fake clock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  relaydrive-drivers (DriveController)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  relaydrive-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ embassy-time  │
//! │   adapters    │       │     clock     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`time::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

#[cfg(feature = "embedded-hal")]
pub mod eh;

#[cfg(feature = "embassy")]
pub mod embassy;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
pub use time::{Clock, Instant};
