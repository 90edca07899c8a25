use std::path::Path;

use marquee_ingest::WorkerOptions;

use crate::cli_types::{ApiArgs, PosterArgs};
use crate::error::CliError;

use super::{api_context, check_mark, open_db, poster_sleep, print_queue_stats};

/// Run the weekly command: ingest the freshest export snapshot, scan
/// the trailing week of the change feed, then drain the whole queue
/// with failed entries eligible for retry.
pub(crate) fn run_weekly(
    db: &Path,
    cache_dir: &Path,
    api: &ApiArgs,
    posters: &PosterArgs,
) -> Result<(), CliError> {
    let conn = open_db(db)?;
    let (client, mut limiter) = api_context(api)?;

    let options = WorkerOptions {
        poster_sizes: posters.poster_sizes.clone(),
        poster_sleep: poster_sleep(posters),
        cache_dir: cache_dir.to_path_buf(),
        ..Default::default()
    };

    println!("Running weekly batch...");
    let stats = marquee_ingest::run_weekly(&conn, &client, &mut limiter, &options)?;

    println!(
        "{} export: {} scanned, {} queued",
        check_mark(),
        stats.export.scanned,
        stats.export.enqueued,
    );
    println!("{} changes: {} queued", check_mark(), stats.changes_enqueued);
    println!("{} worker: {} entries processed", check_mark(), stats.processed);
    print_queue_stats(&conn)
}
