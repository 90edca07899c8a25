//! Row types stored in the movie cache database.

/// TMDB gender code matched by the selection predicate.
pub const SELECTED_GENDER: i64 = 1;

/// A cached movie record. `runtime` is only populated by full-detail
/// hydration; listing payloads never carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub tmdb_id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i32>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_avg: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
    pub updated_at: String,
}

/// A credited person. Gender uses TMDB's integer codes
/// (0 unknown, 1 female, 2 male, 3 non-binary).
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub tmdb_person_id: i64,
    pub name: String,
    pub gender: i64,
    pub updated_at: String,
}

/// Lifecycle of an ingestion queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    Pending,
    InProgress,
    Done,
    Failed,
}

impl QueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Pending => "pending",
            QueueStatus::InProgress => "in_progress",
            QueueStatus::Done => "done",
            QueueStatus::Failed => "failed",
        }
    }

    /// Parse a status string, defaulting unknown values to `Pending`.
    pub fn from_str_loose(s: &str) -> Self {
        match s {
            "in_progress" => QueueStatus::InProgress,
            "done" => QueueStatus::Done,
            "failed" => QueueStatus::Failed,
            _ => QueueStatus::Pending,
        }
    }
}

/// A work item in the ingestion queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub tmdb_id: i64,
    pub status: QueueStatus,
    pub attempts: i64,
    pub added_at: String,
    pub last_attempt: Option<String>,
    pub last_error: Option<String>,
}
