use std::path::Path;

use marquee_ingest::WorkerOptions;

use crate::cli_types::{ApiArgs, PosterArgs};
use crate::error::CliError;

use super::{api_context, check_mark, open_db, poster_sleep, print_queue_stats};

/// Run the worker command: drain the ingestion queue one entry at a
/// time, hydrating credits and details and caching posters.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_worker(
    db: &Path,
    cache_dir: &Path,
    max_items: u64,
    include_failed: bool,
    max_attempts: i64,
    api: &ApiArgs,
    posters: &PosterArgs,
) -> Result<(), CliError> {
    let conn = open_db(db)?;
    let (client, mut limiter) = api_context(api)?;

    let options = WorkerOptions {
        poster_sizes: posters.poster_sizes.clone(),
        poster_sleep: poster_sleep(posters),
        max_items,
        include_failed,
        max_attempts,
        cache_dir: cache_dir.to_path_buf(),
    };

    if max_items > 0 {
        println!("Draining queue (at most {max_items} entries)...");
    } else {
        println!("Draining queue...");
    }
    let processed = marquee_ingest::run_worker(&conn, &client, &mut limiter, &options)?;

    println!("{} {} entries processed", check_mark(), processed);
    print_queue_stats(&conn)
}
