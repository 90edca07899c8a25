//! The catalog-source seam consumed by the ingestion pipeline.

use crate::client::{self, TmdbClient};
use crate::error::TmdbError;
use crate::types::{ChangedMovie, CreditsResponse, MovieListing, Page};

/// The catalog operations the ingestion pipeline depends on.
///
/// `TmdbClient` is the only production implementation; tests substitute
/// a stub so pipeline behavior can be exercised without the network.
pub trait CatalogSource {
    fn popular_movies(&self, page: u32) -> Result<Page<MovieListing>, TmdbError>;
    fn movie_details(&self, tmdb_id: i64) -> Result<MovieListing, TmdbError>;
    fn movie_credits(&self, tmdb_id: i64) -> Result<CreditsResponse, TmdbError>;
    fn movie_changes(
        &self,
        start_date: &str,
        end_date: &str,
        page: u32,
    ) -> Result<Page<ChangedMovie>, TmdbError>;
    /// Download a poster image by its stored path fragment and size.
    fn download_poster(&self, poster_path: &str, size: &str) -> Result<Vec<u8>, TmdbError>;
}

impl CatalogSource for TmdbClient {
    fn popular_movies(&self, page: u32) -> Result<Page<MovieListing>, TmdbError> {
        TmdbClient::popular_movies(self, page)
    }

    fn movie_details(&self, tmdb_id: i64) -> Result<MovieListing, TmdbError> {
        TmdbClient::movie_details(self, tmdb_id)
    }

    fn movie_credits(&self, tmdb_id: i64) -> Result<CreditsResponse, TmdbError> {
        TmdbClient::movie_credits(self, tmdb_id)
    }

    fn movie_changes(
        &self,
        start_date: &str,
        end_date: &str,
        page: u32,
    ) -> Result<Page<ChangedMovie>, TmdbError> {
        TmdbClient::movie_changes(self, start_date, end_date, page)
    }

    fn download_poster(&self, poster_path: &str, size: &str) -> Result<Vec<u8>, TmdbError> {
        self.download_image(&client::poster_url(poster_path, size))
    }
}
