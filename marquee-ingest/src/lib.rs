//! The ingestion pipeline for the movie cache.
//!
//! Discovers candidate catalog IDs from bulk export snapshots and the
//! change feed, maintains a durable work queue with retry tracking,
//! and hydrates each queued ID: director credits, the selection
//! predicate, and (for selected movies) full details and cached
//! posters.

pub mod changes;
pub mod clock;
pub mod enqueue;
pub mod error;
pub mod export;
pub mod hydrate;
pub mod popular;
pub mod weekly;
pub mod worker;

pub use changes::{ingest_changes, LAST_CHANGES_DATE};
pub use clock::now_iso;
pub use enqueue::{enqueue_ids, ENQUEUE_BATCH};
pub use error::IngestError;
pub use export::{ingest_export, scan_export, ExportStats, LAST_EXPORT_DATE};
pub use hydrate::{
    hydrate_directors, hydrate_movie_details, movie_from_listing, poster_cache_path,
    prefetch_poster,
};
pub use popular::{refresh_popular, RefreshOptions, RefreshStats};
pub use weekly::{run_weekly, WeeklyStats};
pub use worker::{run_worker, WorkerOptions};
