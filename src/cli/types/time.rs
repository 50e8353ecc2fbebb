//! Season type for Sleeper league lookups.

use crate::error::{Result, SleeperError};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// The season matching the current calendar year on the local clock.
    pub fn current() -> Self {
        Self(chrono::Local::now().year() as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_default_is_current_year() {
        let expected = chrono::Local::now().year() as u16;
        assert_eq!(Season::default().as_u16(), expected);
    }

    #[test]
    fn test_season_from_str() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024");
    }

    #[test]
    fn test_season_from_str_invalid() {
        let result: Result<Season> = "last year".parse();
        match result.unwrap_err() {
            SleeperError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error"),
        }
    }
}
