//! Error types for the Sleeper lookup CLI

use serde::Serialize;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("{kind} must not be empty")]
    EmptyIdentifier { kind: &'static str },

    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Error getting user id for {handle} (HTTP {status})")]
    UserNotFound { handle: String, status: u16 },

    #[error("No Sleeper user named {handle}")]
    UnknownUser { handle: String },

    #[error("Error getting league details for {league_id} (HTTP {status})")]
    LeagueQueryFailed { league_id: String, status: u16 },

    #[error("Error getting {season} leagues for user {user_id} (HTTP {status})")]
    LeaguesQueryFailed {
        user_id: String,
        season: u16,
        status: u16,
    },
}

/// Classification of the per-item failures a batch absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Resolution,
    LeagueQuery,
    LeaguesQuery,
    MalformedResponse,
}

impl SleeperError {
    /// Returns the soft-failure kind, or `None` when the error must abort the run.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SleeperError::UserNotFound { .. } | SleeperError::UnknownUser { .. } => {
                Some(FailureKind::Resolution)
            }
            SleeperError::LeagueQueryFailed { .. } => Some(FailureKind::LeagueQuery),
            SleeperError::LeaguesQueryFailed { .. } => Some(FailureKind::LeaguesQuery),
            SleeperError::Json(_) => Some(FailureKind::MalformedResponse),
            SleeperError::Http(_)
            | SleeperError::InvalidSeason(_)
            | SleeperError::InvalidBaseUrl { .. }
            | SleeperError::EmptyIdentifier { .. } => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.failure_kind().is_some()
    }
}
