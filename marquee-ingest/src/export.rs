//! Discovery of daily bulk ID snapshots and streaming ingestion of
//! their gzip-compressed newline-delimited JSON bodies.

use std::io::{BufRead, BufReader, Read};

use chrono::{Days, NaiveDate, Utc};
use flate2::read::GzDecoder;
use marquee_tmdb::{ExportEntry, TmdbClient, TmdbError};
use rusqlite::Connection;

use crate::enqueue::{enqueue_ids, ENQUEUE_BATCH};
use crate::error::IngestError;

const EXPORT_BASE: &str = "https://files.tmdb.org/p/exports";

/// Watermark key recording the snapshot date last ingested.
pub const LAST_EXPORT_DATE: &str = "last_export_date";

/// Counts from one export ingestion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    /// Lines carrying a usable ID.
    pub scanned: u64,
    /// Entries newly added to the queue.
    pub enqueued: u64,
}

/// Snapshot URL for a given date. Snapshots are published daily under
/// a fixed MM_DD_YYYY naming scheme.
pub fn export_url(date: NaiveDate) -> String {
    format!("{EXPORT_BASE}/movie_ids_{}.json.gz", date.format("%m_%d_%Y"))
}

/// Find the most recent available snapshot within the lookback window,
/// newest first. A missing snapshot (non-success status) moves on to
/// the previous day; transport errors propagate.
fn latest_export(
    client: &TmdbClient,
    days_back: u32,
) -> Result<(NaiveDate, impl Read), IngestError> {
    let today = Utc::now().date_naive();

    for offset in 0..days_back {
        let date = today - Days::new(u64::from(offset));
        let url = export_url(date);
        match client.get_export(&url) {
            Ok(resp) => return Ok((date, resp)),
            Err(TmdbError::Status { status, .. }) => {
                log::debug!("No export at {url} (HTTP {status})");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(IngestError::NoExportFound { days_back })
}

/// Scan a gzip-compressed NDJSON export body and enqueue the IDs it
/// contains.
///
/// The body is decompressed and parsed line by line so snapshots with
/// hundreds of thousands of entries never materialize in memory.
/// Lines without a usable ID are skipped; IDs are handed to the
/// enqueuer in batches of [`ENQUEUE_BATCH`].
pub fn scan_export<R: Read>(conn: &Connection, gz_body: R) -> Result<ExportStats, IngestError> {
    let reader = BufReader::new(GzDecoder::new(gz_body));
    let mut stats = ExportStats::default();
    let mut batch: Vec<i64> = Vec::with_capacity(ENQUEUE_BATCH);

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: ExportEntry = serde_json::from_str(&line)?;
        let Some(id) = entry.id else {
            continue;
        };
        if id <= 0 {
            continue;
        }

        stats.scanned += 1;
        batch.push(id);
        if batch.len() >= ENQUEUE_BATCH {
            stats.enqueued += enqueue_ids(conn, &batch)? as u64;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        stats.enqueued += enqueue_ids(conn, &batch)? as u64;
    }

    Ok(stats)
}

/// Run snapshot discovery and ingestion: find the freshest snapshot in
/// the lookback window, stream it into the queue, and advance the
/// export watermark to the date actually used.
pub fn ingest_export(
    conn: &Connection,
    client: &TmdbClient,
    days_back: u32,
) -> Result<ExportStats, IngestError> {
    let (date, resp) = latest_export(client, days_back)?;
    log::info!("Ingesting export snapshot for {date}");

    let stats = scan_export(conn, resp)?;
    marquee_db::set_state(conn, LAST_EXPORT_DATE, &date.format("%Y-%m-%d").to_string())?;

    log::info!(
        "Export {date}: scanned {}, queued {}",
        stats.scanned,
        stats.enqueued
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_uses_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(
            export_url(date),
            "https://files.tmdb.org/p/exports/movie_ids_08_03_2026.json.gz"
        );
    }
}
