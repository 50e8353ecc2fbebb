//! Type-safe wrappers for Sleeper identifiers and seasons.

pub mod ids;
pub mod time;
