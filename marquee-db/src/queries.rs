//! Read queries for the movie cache: record lookups, the selection
//! predicate, and queue statistics.

use rusqlite::{params, Connection};

use crate::operations::OperationError;
use crate::types::{Movie, SELECTED_GENDER};

const MOVIE_COLUMNS: &str = "tmdb_id, title, year, runtime, overview, poster_path, \
     backdrop_path, vote_avg, vote_count, popularity, updated_at";

// ── Movie Lookups ───────────────────────────────────────────────────────────

/// Fetch a single cached movie by TMDB ID.
pub fn movie_by_id(conn: &Connection, tmdb_id: i64) -> Result<Option<Movie>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies WHERE tmdb_id = ?1"
    ))?;
    let result = stmt.query_row(params![tmdb_id], row_to_movie);
    match result {
        Ok(m) => Ok(Some(m)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch cached movies for a list of IDs, preserving the input order.
/// IDs with no cached record are silently absent from the result.
pub fn movies_by_ids(conn: &Connection, ids: &[i64]) -> Result<Vec<Movie>, OperationError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(",");
    let mut stmt = conn.prepare(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies WHERE tmdb_id IN ({placeholders})"
    ))?;
    let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), row_to_movie)?;

    let mut by_id = std::collections::HashMap::new();
    for row in rows {
        let movie = row?;
        by_id.insert(movie.tmdb_id, movie);
    }

    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}

// ── Hydration Predicates ────────────────────────────────────────────────────

/// Whether director credits have already been hydrated for a movie.
/// Any credits_director row counts; this is the enqueue dedup signal.
pub fn directors_hydrated(conn: &Connection, tmdb_id: i64) -> Result<bool, OperationError> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM credits_director WHERE tmdb_id = ?1)",
        params![tmdb_id],
        |row| row.get(0),
    )?;
    Ok(found)
}

/// The selection predicate: true iff at least one credited director
/// has the selected gender code.
pub fn is_woman_directed(conn: &Connection, tmdb_id: i64) -> Result<bool, OperationError> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(
             SELECT 1
             FROM credits_director cd
             JOIN people p ON p.tmdb_person_id = cd.tmdb_person_id
             WHERE cd.tmdb_id = ?1 AND p.gender = ?2
         )",
        params![tmdb_id, SELECTED_GENDER],
        |row| row.get(0),
    )?;
    Ok(found)
}

// ── Queue Statistics ────────────────────────────────────────────────────────

/// Per-status counts for the ingestion queue.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueStats {
    pub pending: i64,
    pub in_progress: i64,
    pub done: i64,
    pub failed: i64,
}

impl QueueStats {
    pub fn total(&self) -> i64 {
        self.pending + self.in_progress + self.done + self.failed
    }
}

/// Count queue entries by status.
pub fn queue_stats(conn: &Connection) -> Result<QueueStats, OperationError> {
    let mut stmt = conn.prepare("SELECT status, COUNT(*) FROM ingest_queue GROUP BY status")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut stats = QueueStats::default();
    for row in rows {
        let (status, count) = row?;
        match status.as_str() {
            "pending" => stats.pending = count,
            "in_progress" => stats.in_progress = count,
            "done" => stats.done = count,
            "failed" => stats.failed = count,
            _ => {}
        }
    }
    Ok(stats)
}

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        tmdb_id: row.get(0)?,
        title: row.get(1)?,
        year: row.get(2)?,
        runtime: row.get(3)?,
        overview: row.get(4)?,
        poster_path: row.get(5)?,
        backdrop_path: row.get(6)?,
        vote_avg: row.get(7)?,
        vote_count: row.get(8)?,
        popularity: row.get(9)?,
        updated_at: row.get(10)?,
    })
}
