//! Logging setup for the CLI.

use anyhow::{Context, Result};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Filter directive for this crate at the requested verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sleeper_sneaker=debug"
    } else {
        "sleeper_sneaker=info"
    }
}

/// Install the global subscriber: timestamped lines on stderr.
///
/// Called once at startup. `RUST_LOG` directives are applied on top of the
/// verbosity chosen on the command line.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(
        default_directive(verbose)
            .parse::<Directive>()
            .context("invalid log directive")?,
    );

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
