//! CLI argument definitions and parsing.

pub mod types;

use std::time::Duration;

use clap::Parser;
use types::{
    ids::{LeagueId, UserHandle},
    time::Season,
};

use crate::sleeper::http::SLEEPER_BASE_URL;

/// Look up which Sleeper leagues a set of users play in.
#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-sneaker",
    about = "Sleeper fantasy football league lookup CLI",
    arg_required_else_help = true
)]
pub struct SleeperCli {
    /// League ID to query; every member of the league is looked up.
    #[clap(long, short)]
    pub league: Option<LeagueId>,

    /// User names/ids to query (repeatable): `-u alice -u bob`. Ignored with `--league`.
    #[clap(long = "user", short = 'u')]
    pub users: Vec<UserHandle>,

    /// Season year to query, defaults to the current year.
    #[clap(long, short, default_value_t = Season::default())]
    pub year: Season,

    /// Print debug messages.
    #[clap(long, short)]
    pub verbose: bool,

    /// Print the per-user reports as JSON on stdout.
    #[clap(long)]
    pub json: bool,

    /// Base URL of the Sleeper v1 API.
    #[clap(long, default_value = SLEEPER_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (no timeout when omitted).
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// What a lookup run starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// Expand a league into its members first.
    League(LeagueId),
    /// Query these handles directly.
    Users(Vec<UserHandle>),
}

impl SleeperCli {
    /// `--league` wins over `--user`.
    pub fn lookup_target(&self) -> LookupTarget {
        match &self.league {
            Some(league_id) => LookupTarget::League(league_id.clone()),
            None => LookupTarget::Users(self.users.clone()),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
