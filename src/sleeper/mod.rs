//! Sleeper public API access.

pub mod http;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{BatchInput, LeagueMember, LeagueSummary, UserRecord};
