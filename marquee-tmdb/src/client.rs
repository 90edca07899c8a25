//! Blocking HTTP client for the TMDB API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::error::TmdbError;
use crate::types::{ChangedMovie, CreditsResponse, MovieListing, Page};

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the CDN URL for a poster at a given size (e.g. "w342").
/// `poster_path` is the path fragment stored on a movie record and
/// carries its own leading slash.
pub fn poster_url(poster_path: &str, size: &str) -> String {
    format!("{IMAGE_BASE_URL}/{size}{poster_path}")
}

/// Build the CDN URL for a backdrop at a given size (e.g. "w780").
pub fn backdrop_url(backdrop_path: &str, size: &str) -> String {
    format!("{IMAGE_BASE_URL}/{size}{backdrop_path}")
}

/// HTTP client for the TMDB API.
///
/// Purely a transport: the caller owns rate limiting (every method
/// here performs exactly one HTTP request).
pub struct TmdbClient {
    http: reqwest::blocking::Client,
    creds: Credentials,
}

impl TmdbClient {
    pub fn new(creds: Credentials) -> Result<Self, TmdbError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(API_TIMEOUT)
            .build()?;
        Ok(Self { http, creds })
    }

    /// Keyword search over the movie catalog (paged).
    pub fn search_movies(&self, query: &str, page: u32) -> Result<Page<MovieListing>, TmdbError> {
        self.get(
            "/search/movie",
            &[
                ("query", query),
                ("page", &page.to_string()),
                ("include_adult", "false"),
                ("region", &self.creds.region),
            ],
        )
    }

    /// The popular-movies list (paged).
    pub fn popular_movies(&self, page: u32) -> Result<Page<MovieListing>, TmdbError> {
        self.get(
            "/movie/popular",
            &[("page", &page.to_string()), ("region", &self.creds.region)],
        )
    }

    /// Full details for a single movie, runtime included.
    pub fn movie_details(&self, tmdb_id: i64) -> Result<MovieListing, TmdbError> {
        self.get(&format!("/movie/{tmdb_id}"), &[])
    }

    /// Cast and crew credits for a single movie.
    pub fn movie_credits(&self, tmdb_id: i64) -> Result<CreditsResponse, TmdbError> {
        self.get(&format!("/movie/{tmdb_id}/credits"), &[])
    }

    /// One page of the movie change feed for a date range.
    pub fn movie_changes(
        &self,
        start_date: &str,
        end_date: &str,
        page: u32,
    ) -> Result<Page<ChangedMovie>, TmdbError> {
        self.get(
            "/movie/changes",
            &[
                ("start_date", start_date),
                ("end_date", end_date),
                ("page", &page.to_string()),
            ],
        )
    }

    /// Fetch a bulk-export snapshot for streaming. Returns the raw
    /// response so the caller can decompress incrementally; fails with
    /// `TmdbError::Status` when the snapshot doesn't exist (yet).
    pub fn get_export(&self, url: &str) -> Result<reqwest::blocking::Response, TmdbError> {
        let resp = self.http.get(url).send()?;
        check_status(resp)
    }

    /// Download an image from the TMDB CDN.
    pub fn download_image(&self, url: &str) -> Result<Vec<u8>, TmdbError> {
        let resp = self.http.get(url).send()?;
        let resp = check_status(resp)?;
        Ok(resp.bytes()?.to_vec())
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, TmdbError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("api_key", self.creds.api_key.as_str()),
            ("language", self.creds.language.as_str()),
        ];
        query.extend_from_slice(params);

        let resp = self
            .http
            .get(format!("{BASE_URL}{path}"))
            .query(&query)
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TmdbError::Credentials(
                "TMDB rejected the API key".to_string(),
            ));
        }

        let text = check_status(resp)?.text()?;
        serde_json::from_str(&text).map_err(|e| {
            log::debug!("Unparseable TMDB response for {path}: {}", excerpt(&text));
            TmdbError::Json(e)
        })
    }
}

fn check_status(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, TmdbError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = excerpt(&resp.text().unwrap_or_default());
    Err(TmdbError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Bounded body excerpt for diagnostics. Truncates on character
/// boundaries, never bytes; TMDB bodies carry non-ASCII titles.
fn excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}
