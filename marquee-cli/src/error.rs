use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Opening or migrating the cache database failed
    #[error("Database error: {0}")]
    Schema(#[from] marquee_db::schema::SchemaError),

    /// A database read or write failed
    #[error("Database error: {0}")]
    Db(#[from] marquee_db::OperationError),

    /// TMDB client setup or request failed
    #[error("{0}")]
    Tmdb(#[from] marquee_tmdb::TmdbError),

    /// An ingestion run failed
    #[error("{0}")]
    Ingest(#[from] marquee_ingest::IngestError),
}
