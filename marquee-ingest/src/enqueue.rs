//! Deduplicated insertion of discovered IDs into the work queue.

use rusqlite::Connection;

use crate::clock::now_iso;
use crate::error::IngestError;

/// Dedup lookups batch candidate IDs in chunks of this size to stay
/// within SQLite's bound-parameter limits.
pub const ENQUEUE_BATCH: usize = 500;

/// Queue every candidate ID that is neither already hydrated (has a
/// director credit row) nor already queued. Returns the number of
/// entries actually inserted; repeated calls are safe no-ops.
pub fn enqueue_ids(conn: &Connection, ids: &[i64]) -> Result<usize, IngestError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let now = now_iso();
    let mut added = 0;

    for chunk in ids.chunks(ENQUEUE_BATCH) {
        let existing = marquee_db::queued_or_hydrated(conn, chunk)?;
        for &id in chunk {
            if existing.contains(&id) {
                continue;
            }
            // Insert-or-ignore also absorbs duplicates within the chunk.
            if marquee_db::enqueue_movie(conn, id, &now)? {
                added += 1;
            }
        }
    }

    Ok(added)
}
