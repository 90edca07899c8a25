//! One module per subcommand, plus shared setup helpers.

pub(crate) mod changes;
pub(crate) mod export;
pub(crate) mod popular;
pub(crate) mod weekly;
pub(crate) mod worker;

use std::path::Path;
use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use marquee_tmdb::{Credentials, RateLimiter, TmdbClient};

use crate::cli_types::{ApiArgs, PosterArgs};
use crate::error::CliError;

/// Open the cache database, creating it on first use.
pub(crate) fn open_db(path: &Path) -> Result<Connection, CliError> {
    Ok(marquee_db::open_database(path)?)
}

/// Build the API client and rate limiter from shared arguments.
pub(crate) fn api_context(args: &ApiArgs) -> Result<(TmdbClient, RateLimiter), CliError> {
    let creds = Credentials::load()?.with_overrides(args.region.clone(), args.language.clone());
    let client = TmdbClient::new(creds)?;
    let limiter = RateLimiter::new(args.rate);
    Ok((client, limiter))
}

/// Convert the poster-sleep flag to a duration.
pub(crate) fn poster_sleep(args: &PosterArgs) -> Duration {
    Duration::from_secs_f64(args.poster_sleep.max(0.0))
}

/// Print the queue breakdown after a run.
pub(crate) fn print_queue_stats(conn: &Connection) -> Result<(), CliError> {
    let stats = marquee_db::queue_stats(conn)?;
    println!(
        "  Queue: {} pending, {} in progress, {} done, {} failed",
        stats.pending, stats.in_progress, stats.done, stats.failed,
    );
    Ok(())
}

/// A green check mark, when the terminal supports color.
pub(crate) fn check_mark() -> String {
    format!("{}", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
}
