//! TMDB API credentials and request context.

use crate::error::TmdbError;

/// API credential plus the language/region context sent with every call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub region: String,
    pub language: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// `TMDB_API_KEY` is required; `TMDB_REGION` and `TMDB_LANGUAGE`
    /// default to `US` / `en-US`.
    pub fn load() -> Result<Self, TmdbError> {
        let api_key = std::env::var("TMDB_API_KEY").map_err(|_| {
            TmdbError::Credentials("Missing API key. Set the TMDB_API_KEY env var".to_string())
        })?;
        let region = std::env::var("TMDB_REGION").unwrap_or_else(|_| "US".to_string());
        let language = std::env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "en-US".to_string());

        Ok(Self {
            api_key,
            region,
            language,
        })
    }

    /// Apply CLI overrides for region and language.
    pub fn with_overrides(mut self, region: Option<String>, language: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }
}
