//! Entry point: parse CLI, set up logging and run the lookup.

use anyhow::Context;
use clap::Parser;
use sleeper_sneaker::{
    cli::SleeperCli,
    commands::{handle_lookup, LookupParams},
    logging::setup_logging,
};
use tracing::warn;

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = SleeperCli::parse();
    setup_logging(app.verbose)?;

    if app.league.is_some() && !app.users.is_empty() {
        warn!("--league given, ignoring {} --user value(s)", app.users.len());
    }

    handle_lookup(LookupParams {
        target: app.lookup_target(),
        timeout: app.request_timeout(),
        season: app.year,
        as_json: app.json,
        base_url: app.base_url,
    })
    .await
    .context("lookup aborted")?;

    Ok(())
}
