//! ID types for the Sleeper API.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn non_empty(s: &str, kind: &'static str) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(SleeperError::EmptyIdentifier { kind });
    }
    Ok(trimmed.to_string())
}

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper league IDs are long numeric strings. They are kept as opaque text
/// so they are never truncated or reformatted on the way to the API.
///
/// # Examples
///
/// ```rust
/// use sleeper_sneaker::LeagueId;
///
/// let league_id: LeagueId = "784512345678901234".parse().unwrap();
/// assert_eq!(league_id.as_str(), "784512345678901234");
/// assert!("   ".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_empty(s, "League ID")?))
    }
}

/// A user-supplied account identifier: either a username or a numeric user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHandle(String);

impl UserHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserHandle {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_empty(s, "User handle")?))
    }
}

/// Internal Sleeper user id, as returned by the user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
