//! Command implementations for the Sleeper lookup CLI

pub mod lookup;


pub use lookup::{handle_lookup, log_report, LookupParams, LookupService, UserReport};
