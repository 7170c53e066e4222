//! Process-wide tracing setup for hosts embedding the pantry engine.
//!
//! The engine crates only emit `tracing` events; installing a subscriber is
//! the host's call.

pub mod tracing;

pub use self::tracing::{LogFormat, init, init_with};
