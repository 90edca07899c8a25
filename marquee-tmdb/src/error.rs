/// Errors that can occur talking to the TMDB API.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid credentials: {0}")]
    Credentials(String),

    #[error("Failed to parse TMDB response: {0}")]
    Json(#[from] serde_json::Error),
}
