//! The weekly batch: export discovery, change-feed scan, then a full
//! queue drain.

use chrono::{Days, Utc};
use marquee_tmdb::{RateLimiter, TmdbClient};
use rusqlite::Connection;

use crate::changes::ingest_changes;
use crate::error::IngestError;
use crate::export::{ingest_export, ExportStats};
use crate::worker::{run_worker, WorkerOptions};

const LOOKBACK_DAYS: u32 = 7;

/// Counts from one weekly batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyStats {
    pub export: ExportStats,
    pub changes_enqueued: usize,
    pub processed: u64,
}

/// Run the full weekly batch: ingest the freshest export snapshot
/// within a 7-day lookback, scan the change feed over the trailing 7
/// days ending today, then drain the queue with no item cap and failed
/// entries eligible for retry. One blocking call; scheduling is the
/// caller's concern.
pub fn run_weekly(
    conn: &Connection,
    client: &TmdbClient,
    limiter: &mut RateLimiter,
    options: &WorkerOptions,
) -> Result<WeeklyStats, IngestError> {
    let today = Utc::now().date_naive();
    let start_date = (today - Days::new(u64::from(LOOKBACK_DAYS)))
        .format("%Y-%m-%d")
        .to_string();
    let end_date = today.format("%Y-%m-%d").to_string();

    let export = ingest_export(conn, client, LOOKBACK_DAYS)?;
    let changes_enqueued = ingest_changes(conn, client, limiter, &start_date, &end_date)?;

    let drain = WorkerOptions {
        max_items: 0,
        include_failed: true,
        ..options.clone()
    };
    let processed = run_worker(conn, client, limiter, &drain)?;

    Ok(WeeklyStats {
        export,
        changes_enqueued,
        processed,
    })
}
