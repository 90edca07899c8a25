use marquee_db::operations::OperationError;
use marquee_tmdb::TmdbError;

/// Errors that can occur during an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),

    #[error("TMDB error: {0}")]
    Tmdb(#[from] TmdbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed export line: {0}")]
    ExportLine(#[from] serde_json::Error),

    #[error("No export snapshot found in the last {days_back} days")]
    NoExportFound { days_back: u32 },
}
