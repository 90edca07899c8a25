//! Write operations: movie/person upserts, director credits, the
//! ingestion queue state machine, and watermark state.

use std::collections::HashSet;

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::types::{Movie, Person, QueueEntry, QueueStatus};

/// Maximum stored length of a queue entry's last_error message.
const MAX_ERROR_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Queue entry not found for tmdb_id {0}")]
    EntryNotFound(i64),
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert or update a movie from a listing payload.
///
/// Listing payloads (search/popular/changes) never carry a runtime, so
/// this deliberately leaves any previously hydrated runtime untouched.
pub fn upsert_movie_listing(conn: &Connection, movie: &Movie) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO movies (tmdb_id, title, year, runtime, overview, poster_path,
             backdrop_path, vote_avg, vote_count, popularity, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(tmdb_id) DO UPDATE SET
             title = excluded.title,
             year = excluded.year,
             overview = excluded.overview,
             poster_path = excluded.poster_path,
             backdrop_path = excluded.backdrop_path,
             vote_avg = excluded.vote_avg,
             vote_count = excluded.vote_count,
             popularity = excluded.popularity,
             updated_at = excluded.updated_at",
        params![
            movie.tmdb_id,
            movie.title,
            movie.year,
            movie.runtime,
            movie.overview,
            movie.poster_path,
            movie.backdrop_path,
            movie.vote_avg,
            movie.vote_count,
            movie.popularity,
            movie.updated_at,
        ],
    )?;
    Ok(())
}

/// Insert or update a movie from a full-detail payload, runtime included.
pub fn upsert_movie_details(conn: &Connection, movie: &Movie) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO movies (tmdb_id, title, year, runtime, overview, poster_path,
             backdrop_path, vote_avg, vote_count, popularity, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(tmdb_id) DO UPDATE SET
             title = excluded.title,
             year = excluded.year,
             runtime = excluded.runtime,
             overview = excluded.overview,
             poster_path = excluded.poster_path,
             backdrop_path = excluded.backdrop_path,
             vote_avg = excluded.vote_avg,
             vote_count = excluded.vote_count,
             popularity = excluded.popularity,
             updated_at = excluded.updated_at",
        params![
            movie.tmdb_id,
            movie.title,
            movie.year,
            movie.runtime,
            movie.overview,
            movie.poster_path,
            movie.backdrop_path,
            movie.vote_avg,
            movie.vote_count,
            movie.popularity,
            movie.updated_at,
        ],
    )?;
    Ok(())
}

// ── Person / Credit Operations ──────────────────────────────────────────────

/// Insert or update a credited person.
pub fn upsert_person(conn: &Connection, person: &Person) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO people (tmdb_person_id, name, gender, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(tmdb_person_id) DO UPDATE SET
             name = excluded.name,
             gender = excluded.gender,
             updated_at = excluded.updated_at",
        params![
            person.tmdb_person_id,
            person.name,
            person.gender,
            person.updated_at
        ],
    )?;
    Ok(())
}

/// Record a director credit. Append-only; repeated inserts are no-ops.
pub fn insert_director_credit(
    conn: &Connection,
    tmdb_id: i64,
    tmdb_person_id: i64,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT OR IGNORE INTO credits_director (tmdb_id, tmdb_person_id) VALUES (?1, ?2)",
        params![tmdb_id, tmdb_person_id],
    )?;
    Ok(())
}

// ── Queue Operations ────────────────────────────────────────────────────────

/// Insert a new pending queue entry. Returns true if a row was
/// actually inserted (insert-or-ignore on the unique tmdb_id).
pub fn enqueue_movie(conn: &Connection, tmdb_id: i64, now: &str) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO ingest_queue (tmdb_id, status, added_at)
         VALUES (?1, 'pending', ?2)",
        params![tmdb_id, now],
    )?;
    Ok(changed > 0)
}

/// Of the given IDs, return those that already have director credits
/// or already sit in the queue. Callers chunk the input to stay within
/// SQLite's bound-parameter limits (the enqueuer uses 500).
pub fn queued_or_hydrated(
    conn: &Connection,
    ids: &[i64],
) -> Result<HashSet<i64>, OperationError> {
    if ids.is_empty() {
        return Ok(HashSet::new());
    }

    let placeholders = vec!["?"; ids.len()].join(",");

    let mut existing = HashSet::new();

    let mut stmt = conn.prepare(&format!(
        "SELECT DISTINCT tmdb_id FROM credits_director WHERE tmdb_id IN ({placeholders})"
    ))?;
    for row in stmt.query_map(rusqlite::params_from_iter(ids.iter()), |row| {
        row.get::<_, i64>(0)
    })? {
        existing.insert(row?);
    }

    let mut stmt = conn.prepare(&format!(
        "SELECT tmdb_id FROM ingest_queue WHERE tmdb_id IN ({placeholders})"
    ))?;
    for row in stmt.query_map(rusqlite::params_from_iter(ids.iter()), |row| {
        row.get::<_, i64>(0)
    })? {
        existing.insert(row?);
    }

    Ok(existing)
}

/// Get the oldest eligible queue entry: status pending (or also failed
/// when `include_failed`), with attempts below `max_attempts`.
pub fn next_queue_entry(
    conn: &Connection,
    include_failed: bool,
    max_attempts: i64,
) -> Result<Option<QueueEntry>, OperationError> {
    let status_filter = if include_failed {
        "status IN ('pending', 'failed')"
    } else {
        "status = 'pending'"
    };

    let mut stmt = conn.prepare(&format!(
        "SELECT tmdb_id, status, attempts, added_at, last_attempt, last_error
         FROM ingest_queue
         WHERE {status_filter} AND attempts < ?1
         ORDER BY added_at
         LIMIT 1"
    ))?;

    let result = stmt.query_row(params![max_attempts], |row| {
        let status: String = row.get(1)?;
        Ok(QueueEntry {
            tmdb_id: row.get(0)?,
            status: QueueStatus::from_str_loose(&status),
            attempts: row.get(2)?,
            added_at: row.get(3)?,
            last_attempt: row.get(4)?,
            last_error: row.get(5)?,
        })
    });
    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Mark an entry in_progress before hydrating it.
///
/// This is not an atomic claim: with a single sequential worker the
/// select/update pair cannot race. Running multiple workers against
/// one queue would need a conditional UPDATE ... RETURNING instead.
pub fn claim_in_progress(conn: &Connection, tmdb_id: i64, now: &str) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE ingest_queue SET status = 'in_progress', last_attempt = ?2 WHERE tmdb_id = ?1",
        params![tmdb_id, now],
    )?;
    if changed == 0 {
        return Err(OperationError::EntryNotFound(tmdb_id));
    }
    Ok(())
}

/// Mark an entry done after successful hydration.
pub fn mark_done(conn: &Connection, tmdb_id: i64, now: &str) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE ingest_queue SET status = 'done', last_attempt = ?2 WHERE tmdb_id = ?1",
        params![tmdb_id, now],
    )?;
    if changed == 0 {
        return Err(OperationError::EntryNotFound(tmdb_id));
    }
    Ok(())
}

/// Mark an entry failed: increment attempts and store the error
/// message truncated to 500 characters.
pub fn mark_failed(
    conn: &Connection,
    tmdb_id: i64,
    error: &str,
    now: &str,
) -> Result<(), OperationError> {
    let truncated: String = error.chars().take(MAX_ERROR_LEN).collect();
    let changed = conn.execute(
        "UPDATE ingest_queue
         SET status = 'failed', attempts = attempts + 1, last_attempt = ?2, last_error = ?3
         WHERE tmdb_id = ?1",
        params![tmdb_id, now, truncated],
    )?;
    if changed == 0 {
        return Err(OperationError::EntryNotFound(tmdb_id));
    }
    Ok(())
}

// ── Watermark State ─────────────────────────────────────────────────────────

/// Read a watermark value, if one has been recorded.
pub fn get_state(conn: &Connection, key: &str) -> Result<Option<String>, OperationError> {
    let result = conn.query_row(
        "SELECT value FROM ingest_state WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    );
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Upsert a watermark value by key.
pub fn set_state(conn: &Connection, key: &str, value: &str) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO ingest_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}
