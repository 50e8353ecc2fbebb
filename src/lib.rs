//! Sleeper Fantasy Football league lookup library
//!
//! Queries the public Sleeper API to find which leagues a set of users play
//! in for a given season.
//!
//! ## Features
//!
//! - **User Resolution**: Turn a username or numeric id into a Sleeper user id
//! - **League Expansion**: List the members of a league and look each one up
//! - **Season Leagues**: Count and collect the leagues a user is in for a season
//! - **Structured Reports**: One [`UserReport`] per user, with soft failures recorded
//!   instead of aborting the batch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_sneaker::{
//!     cli::LookupTarget, LookupService, Season, SleeperClient, UserHandle, SLEEPER_BASE_URL,
//! };
//!
//! # async fn example() -> sleeper_sneaker::Result<()> {
//! let service = LookupService::new(SleeperClient::new(SLEEPER_BASE_URL, None)?);
//! let target = LookupTarget::Users(vec![UserHandle::new("alice")]);
//!
//! for report in service.run(&target, Season::new(2024), |_| {}).await? {
//!     println!("{}: {:?}", report.handle, report.league_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{
    ids::{LeagueId, UserHandle, UserId},
    time::Season,
};
pub use commands::{LookupService, UserReport};
pub use error::{FailureKind, Result, SleeperError};
pub use sleeper::{BatchInput, SleeperClient, UserRecord, SLEEPER_BASE_URL};
