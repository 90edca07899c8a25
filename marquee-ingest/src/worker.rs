//! The queue-draining hydration worker.

use std::path::PathBuf;
use std::time::Duration;

use marquee_tmdb::{CatalogSource, RateLimiter};
use rusqlite::Connection;

use crate::clock::now_iso;
use crate::error::IngestError;
use crate::hydrate;

/// Options for a worker run.
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    /// Poster sizes to cache for selected movies (e.g. "w342").
    pub poster_sizes: Vec<String>,
    /// Pause after each fresh poster download, distinct from the rate
    /// limiter, to avoid bursty disk/network I/O.
    pub poster_sleep: Duration,
    /// Maximum entries to process this run (0 = unbounded).
    pub max_items: u64,
    /// Also pick up previously failed entries.
    pub include_failed: bool,
    /// Entries at or above this attempt count are never picked.
    pub max_attempts: i64,
    /// Directory for cached posters.
    pub cache_dir: PathBuf,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            poster_sizes: vec!["w342".to_string()],
            poster_sleep: Duration::from_millis(50),
            max_items: 0,
            include_failed: false,
            max_attempts: 5,
            cache_dir: PathBuf::from("cache/posters"),
        }
    }
}

/// Drain the ingestion queue, one entry at a time.
///
/// Each pick marks the entry in_progress, hydrates it, and marks it
/// done or failed; a failing entry never aborts the run. The pick is
/// not an atomic claim and assumes a single worker; running several
/// workers against one database would need a conditional update that
/// returns the claimed row. Returns the number of entries processed.
pub fn run_worker(
    conn: &Connection,
    source: &dyn CatalogSource,
    limiter: &mut RateLimiter,
    options: &WorkerOptions,
) -> Result<u64, IngestError> {
    let mut processed = 0u64;

    loop {
        if options.max_items > 0 && processed >= options.max_items {
            break;
        }

        let Some(entry) =
            marquee_db::next_queue_entry(conn, options.include_failed, options.max_attempts)?
        else {
            break;
        };

        let tmdb_id = entry.tmdb_id;
        marquee_db::claim_in_progress(conn, tmdb_id, &now_iso())?;

        match hydrate_entry(conn, source, limiter, options, tmdb_id) {
            Ok(selected) => {
                marquee_db::mark_done(conn, tmdb_id, &now_iso())?;
                log::debug!(
                    "Hydrated {tmdb_id} ({})",
                    if selected { "selected" } else { "not selected" }
                );
            }
            Err(e) => {
                log::warn!("Hydration failed for {tmdb_id}: {e}");
                marquee_db::mark_failed(conn, tmdb_id, &e.to_string(), &now_iso())?;
            }
        }

        processed += 1;
    }

    log::info!("Worker processed {processed} items");
    Ok(processed)
}

/// Hydrate one queue entry: credits first, then details and posters
/// only when the selection predicate matches. Returns whether the
/// movie was selected.
fn hydrate_entry(
    conn: &Connection,
    source: &dyn CatalogSource,
    limiter: &mut RateLimiter,
    options: &WorkerOptions,
    tmdb_id: i64,
) -> Result<bool, IngestError> {
    limiter.wait();
    hydrate::hydrate_directors(conn, source, tmdb_id)?;

    if !marquee_db::is_woman_directed(conn, tmdb_id)? {
        return Ok(false);
    }

    limiter.wait();
    hydrate::hydrate_movie_details(conn, source, tmdb_id)?;

    for size in &options.poster_sizes {
        let downloaded =
            hydrate::prefetch_poster(conn, source, limiter, &options.cache_dir, tmdb_id, size)?;
        if downloaded && !options.poster_sleep.is_zero() {
            std::thread::sleep(options.poster_sleep);
        }
    }

    Ok(true)
}
