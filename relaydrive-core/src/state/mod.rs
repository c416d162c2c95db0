//! Drive status model
//!
//! A move starts in `InProgress` and ends in exactly one terminal status.

pub mod status;

pub use status::DriveStatus;
