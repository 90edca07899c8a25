//! Incremental discovery through the movie change feed.

use marquee_tmdb::{CatalogSource, RateLimiter};
use rusqlite::Connection;

use crate::enqueue::enqueue_ids;
use crate::error::IngestError;

/// Watermark key recording the change-feed end date last processed.
pub const LAST_CHANGES_DATE: &str = "last_changes_date";

/// Scan the change feed over a date range, page by page, enqueueing
/// changed IDs as they arrive. Stops when a page comes back empty or
/// the reported page count is reached, then advances the changes
/// watermark to the end date. Returns the number of entries enqueued.
pub fn ingest_changes(
    conn: &Connection,
    source: &dyn CatalogSource,
    limiter: &mut RateLimiter,
    start_date: &str,
    end_date: &str,
) -> Result<usize, IngestError> {
    let mut page = 1;
    let mut added = 0;

    loop {
        limiter.wait();
        let payload = source.movie_changes(start_date, end_date, page)?;
        if payload.results.is_empty() {
            break;
        }

        let ids: Vec<i64> = payload
            .results
            .iter()
            .filter_map(|r| r.id)
            .filter(|&id| id > 0)
            .collect();
        added += enqueue_ids(conn, &ids)?;

        // A feed that omits total_pages ends after the current page.
        let total_pages = if payload.total_pages == 0 {
            page
        } else {
            payload.total_pages
        };
        if page >= total_pages {
            break;
        }
        page += 1;
    }

    marquee_db::set_state(conn, LAST_CHANGES_DATE, end_date)?;
    log::info!("Changes {start_date}..{end_date}: queued {added}");
    Ok(added)
}
