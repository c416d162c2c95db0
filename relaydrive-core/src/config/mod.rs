//! Configuration types
//!
//! Board-agnostic drive settings handed to the controller by the host at
//! startup. Nothing here is persisted.

pub mod types;

pub use types::*;
