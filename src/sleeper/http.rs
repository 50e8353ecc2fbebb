//! HTTP access to the three Sleeper endpoints used by the lookup.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use crate::{
    cli::types::{ids::LeagueId, ids::UserId, time::Season},
    error::{Result, SleeperError},
    sleeper::types::{LeagueMember, LeagueSummary, UserRecord},
};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Sport segment of the leagues-for-season endpoint.
pub const SPORT: &str = "nfl";

/// Thin client over the Sleeper read endpoints.
///
/// Every call is a single GET with no retry. Status codes other than 200 are
/// turned into typed errors the caller can classify with
/// [`SleeperError::failure_kind`].
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: Url,
}

impl SleeperClient {
    /// Build a client against `base_url` (e.g. [`SLEEPER_BASE_URL`]).
    ///
    /// With `timeout == None` requests may wait forever on a hung server.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let raw = base_url.into();
        let invalid = |reason: String| SleeperError::InvalidBaseUrl {
            url: raw.clone(),
            reason,
        };

        let base_url = Url::parse(raw.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry path segments".to_string()));
        }

        let mut builder =
            Client::builder().user_agent(concat!("sleeper-sneaker/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn user_url(&self, handle: &str) -> Url {
        self.endpoint(&["user", handle])
    }

    pub fn league_users_url(&self, league_id: &LeagueId) -> Url {
        self.endpoint(&["league", league_id.as_str(), "users"])
    }

    pub fn user_leagues_url(&self, user_id: &UserId, season: Season) -> Url {
        let season = season.to_string();
        self.endpoint(&["user", user_id.as_str(), "leagues", SPORT, season.as_str()])
    }

    async fn get(&self, url: Url) -> Result<Response> {
        debug!("Querying url -> '{url}'");
        let response = self.http.get(url).send().await?;
        debug!("Received response with status code {}", response.status().as_u16());
        Ok(response)
    }

    /// Resolve a username or numeric id to its user record.
    ///
    /// Sleeper answers unknown handles with `200 null`, reported as
    /// [`SleeperError::UnknownUser`].
    pub async fn resolve_user(&self, handle: &str) -> Result<UserRecord> {
        let response = self.get(self.user_url(handle)).await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SleeperError::UserNotFound {
                handle: handle.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let user: Option<UserRecord> = serde_json::from_slice(&body)?;
        user.ok_or_else(|| SleeperError::UnknownUser {
            handle: handle.to_string(),
        })
    }

    /// List the members of a league, in the order the API returns them.
    pub async fn list_league_members(&self, league_id: &LeagueId) -> Result<Vec<LeagueMember>> {
        let response = self.get(self.league_users_url(league_id)).await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SleeperError::LeagueQueryFailed {
                league_id: league_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let members: Option<Vec<LeagueMember>> = serde_json::from_slice(&body)?;
        Ok(members.unwrap_or_default())
    }

    /// List the leagues `user_id` is registered in for `season`.
    pub async fn list_user_leagues(
        &self,
        user_id: &UserId,
        season: Season,
    ) -> Result<Vec<LeagueSummary>> {
        let response = self.get(self.user_leagues_url(user_id, season)).await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SleeperError::LeaguesQueryFailed {
                user_id: user_id.to_string(),
                season: season.as_u16(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let leagues: Option<Vec<LeagueSummary>> = serde_json::from_slice(&body)?;
        Ok(leagues.unwrap_or_default())
    }
}
