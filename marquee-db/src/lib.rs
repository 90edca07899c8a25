//! SQLite persistence layer for the movie cache.
//!
//! Provides schema creation, upsert operations, the ingestion work
//! queue, watermark state, and read queries, backed by SQLite
//! (via rusqlite with bundled feature).

pub use rusqlite::Connection;

pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use operations::{
    claim_in_progress, enqueue_movie, get_state, insert_director_credit, mark_done, mark_failed,
    next_queue_entry, queued_or_hydrated, set_state, upsert_movie_details, upsert_movie_listing,
    upsert_person, OperationError,
};
pub use queries::{
    directors_hydrated, is_woman_directed, movie_by_id, movies_by_ids, queue_stats, QueueStats,
};
pub use schema::{open_database, open_memory};
pub use types::{Movie, Person, QueueEntry, QueueStatus, SELECTED_GENDER};
