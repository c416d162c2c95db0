//! Safety monitoring
//!
//! Two independent protections end a move that cannot reach its limit
//! switch: a run-time ceiling and a debounced overcurrent latch.

pub mod overload;
pub mod timer;

pub use overload::{OverloadCheck, OverloadMonitor, OverloadSettings, DEFAULT_GRACE_MS};
pub use timer::RunTimer;
