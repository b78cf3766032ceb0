//! Integration test utilities for the Tally API
//!
//! Spawns the full application over the in-memory backend and talks to it
//! through a real HTTP client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
