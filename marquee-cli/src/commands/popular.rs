use std::path::Path;

use marquee_ingest::RefreshOptions;

use crate::cli_types::{ApiArgs, PosterArgs};
use crate::error::CliError;

use super::{api_context, check_mark, open_db, poster_sleep};

/// Run the popular command: scan the popular list and hydrate matches
/// directly, without going through the queue.
pub(crate) fn run_popular(
    db: &Path,
    cache_dir: &Path,
    pages: u32,
    api: &ApiArgs,
    posters: &PosterArgs,
) -> Result<(), CliError> {
    let conn = open_db(db)?;
    let (client, mut limiter) = api_context(api)?;

    let options = RefreshOptions {
        pages,
        poster_sizes: posters.poster_sizes.clone(),
        poster_sleep: poster_sleep(posters),
        cache_dir: cache_dir.to_path_buf(),
    };

    println!("Scanning up to {pages} popular pages...");
    let stats = marquee_ingest::refresh_popular(&conn, &client, &mut limiter, &options)?;

    println!(
        "{} {} listings scanned, {} woman-directed",
        check_mark(),
        stats.scanned,
        stats.selected,
    );
    Ok(())
}
