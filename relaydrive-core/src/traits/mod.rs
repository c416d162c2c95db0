//! Drive abstraction traits
//!
//! These traits define the interface between the application and a drive
//! controller, and between the controller and the current measurement.

pub mod current;
pub mod drive;

pub use current::{from_fn, CurrentSource, FromFn, NoSensor};
pub use drive::{Direction, DriveControl, DriveError};
