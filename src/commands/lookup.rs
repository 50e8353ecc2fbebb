//! League lookup workflow.
//!
//! [`LookupService`] turns a set of handles (or a league expanded into its
//! members) into one [`UserReport`] per user. Users are processed one at a
//! time in input order; a failure for one user is recorded in its report and
//! the batch moves on. Only transport errors abort the run.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{
    cli::{
        types::{ids::LeagueId, ids::UserId, time::Season},
        LookupTarget,
    },
    error::{FailureKind, Result, SleeperError},
    sleeper::{BatchInput, LeagueSummary, SleeperClient},
};

const SEPARATOR: &str = "------------------------------------------";

/// Outcome of looking up a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub handle: String,
    pub resolved: bool,
    pub user_id: Option<UserId>,
    pub league_count: Option<usize>,
    pub leagues: Vec<LeagueSummary>,
    pub error: Option<FailureKind>,
    pub message: Option<String>,
}

impl UserReport {
    fn found(handle: String, user_id: UserId, leagues: Vec<LeagueSummary>) -> Self {
        Self {
            handle,
            resolved: true,
            user_id: Some(user_id),
            league_count: Some(leagues.len()),
            leagues,
            error: None,
            message: None,
        }
    }

    fn failed(
        handle: String,
        user_id: Option<UserId>,
        kind: FailureKind,
        err: &SleeperError,
    ) -> Self {
        Self {
            handle,
            resolved: user_id.is_some(),
            user_id,
            league_count: None,
            leagues: Vec::new(),
            error: Some(kind),
            message: Some(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs the lookup workflow against a [`SleeperClient`].
#[derive(Debug, Clone)]
pub struct LookupService {
    client: SleeperClient,
}

impl LookupService {
    pub fn new(client: SleeperClient) -> Self {
        Self { client }
    }

    /// Expand a league into batch inputs.
    ///
    /// A failed member-list call is logged and yields an empty set.
    pub async fn expand_league(&self, league_id: &LeagueId) -> Result<Vec<BatchInput>> {
        info!("Checking league: {league_id}");
        info!("Getting league details for '{league_id}'");

        let members = match self.client.list_league_members(league_id).await {
            Ok(members) => members,
            Err(err) if err.is_recoverable() => {
                error!("{err}");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        debug!("League members: {members:#?}");
        info!("Users in league: {}", members.len());
        info!("{SEPARATOR}");

        Ok(members.into_iter().map(BatchInput::from).collect())
    }

    /// Look up every input for `season` and return one report per input.
    pub async fn process(
        &self,
        inputs: &[BatchInput],
        season: Season,
    ) -> Result<Vec<UserReport>> {
        self.process_with(inputs, season, |_| {}).await
    }

    /// Like [`process`](Self::process), calling `observe` as each report completes.
    pub async fn process_with<F>(
        &self,
        inputs: &[BatchInput],
        season: Season,
        mut observe: F,
    ) -> Result<Vec<UserReport>>
    where
        F: FnMut(&UserReport),
    {
        info!("Checking {} users", inputs.len());

        let mut reports = Vec::with_capacity(inputs.len());
        for input in inputs {
            let report = self.lookup_one(input, season).await?;
            observe(&report);
            reports.push(report);
        }
        Ok(reports)
    }

    /// Resolve the target into inputs, then run the batch.
    pub async fn run<F>(
        &self,
        target: &LookupTarget,
        season: Season,
        observe: F,
    ) -> Result<Vec<UserReport>>
    where
        F: FnMut(&UserReport),
    {
        let inputs = match target {
            LookupTarget::League(league_id) => self.expand_league(league_id).await?,
            LookupTarget::Users(handles) => {
                handles.iter().cloned().map(BatchInput::from).collect()
            }
        };
        self.process_with(&inputs, season, observe).await
    }

    async fn lookup_one(&self, input: &BatchInput, season: Season) -> Result<UserReport> {
        let handle = input.lookup_handle().to_string();
        info!("Getting user details for '{handle}'");

        let user = match self.client.resolve_user(&handle).await {
            Ok(user) => user,
            Err(err) => return soft_failure(handle, None, err),
        };

        info!("Getting league details for '{handle}'");
        match self.client.list_user_leagues(&user.user_id, season).await {
            Ok(leagues) => Ok(UserReport::found(handle, user.user_id, leagues)),
            Err(err) => soft_failure(handle, Some(user.user_id), err),
        }
    }
}

/// Turn a recoverable error into a failed report; anything else propagates.
fn soft_failure(
    handle: String,
    user_id: Option<UserId>,
    err: SleeperError,
) -> Result<UserReport> {
    match err.failure_kind() {
        Some(kind) => Ok(UserReport::failed(handle, user_id, kind, &err)),
        None => Err(err),
    }
}

/// Log a finished report the way the CLI presents results.
pub fn log_report(report: &UserReport) {
    match (report.error, report.league_count) {
        (None, Some(count)) => {
            if let Some(user_id) = &report.user_id {
                info!("User ID: {user_id}");
            }
            if let Ok(pretty) = serde_json::to_string_pretty(&report.leagues) {
                debug!("Leagues response: {pretty}");
            }
            info!("Leagues user is in: {count}");
        }
        (Some(kind), _) => {
            let message = report.message.as_deref().unwrap_or_default();
            error!(?kind, "{message}");
        }
        (None, None) => warn!("No league data for '{}'", report.handle),
    }
    info!("{SEPARATOR}");
}

/// Parameters for the lookup command
#[derive(Debug)]
pub struct LookupParams {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub target: LookupTarget,
    pub season: Season,
    pub as_json: bool,
}

/// Handle the lookup command
pub async fn handle_lookup(params: LookupParams) -> Result<Vec<UserReport>> {
    let client = SleeperClient::new(params.base_url, params.timeout)?;
    let service = LookupService::new(client);

    let reports = service.run(&params.target, params.season, log_report).await?;

    let found = reports.iter().filter(|r| r.is_success()).count();
    info!("{SEPARATOR}");
    info!("               SLEEPER SNEAKER            ");
    info!("{SEPARATOR}");
    info!(
        "Done! Found leagues for {found} of {} users ({} season)",
        reports.len(),
        params.season
    );

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(reports)
}
