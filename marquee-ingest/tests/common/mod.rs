//! Shared test fixtures: an in-memory catalog source standing in for
//! the TMDB client.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use marquee_tmdb::{
    CatalogSource, ChangedMovie, CreditsResponse, CrewMember, MovieListing, Page, TmdbError,
};

/// Scripted catalog source. Pages and payloads are fixed up front;
/// poster downloads are recorded for assertions.
#[derive(Default)]
pub struct StubCatalog {
    pub credits: HashMap<i64, Vec<CrewMember>>,
    pub details: HashMap<i64, MovieListing>,
    pub popular_pages: Vec<Vec<MovieListing>>,
    pub change_pages: Vec<Vec<Option<i64>>>,
    /// IDs whose credits fetch fails with a server error.
    pub failing_credits: HashSet<i64>,
    pub downloads: RefCell<Vec<(String, String)>>,
}

impl CatalogSource for StubCatalog {
    fn popular_movies(&self, page: u32) -> Result<Page<MovieListing>, TmdbError> {
        let results = self
            .popular_pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(Page {
            page,
            total_pages: self.popular_pages.len() as u32,
            results,
        })
    }

    fn movie_details(&self, tmdb_id: i64) -> Result<MovieListing, TmdbError> {
        self.details
            .get(&tmdb_id)
            .cloned()
            .ok_or(TmdbError::Status {
                status: 404,
                message: "not found".to_string(),
            })
    }

    fn movie_credits(&self, tmdb_id: i64) -> Result<CreditsResponse, TmdbError> {
        if self.failing_credits.contains(&tmdb_id) {
            return Err(TmdbError::Status {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(CreditsResponse {
            id: tmdb_id,
            crew: self.credits.get(&tmdb_id).cloned().unwrap_or_default(),
        })
    }

    fn movie_changes(
        &self,
        _start_date: &str,
        _end_date: &str,
        page: u32,
    ) -> Result<Page<ChangedMovie>, TmdbError> {
        let results = self
            .change_pages
            .get(page as usize - 1)
            .map(|ids| ids.iter().map(|&id| ChangedMovie { id }).collect())
            .unwrap_or_default();
        Ok(Page {
            page,
            total_pages: self.change_pages.len() as u32,
            results,
        })
    }

    fn download_poster(&self, poster_path: &str, size: &str) -> Result<Vec<u8>, TmdbError> {
        self.downloads
            .borrow_mut()
            .push((poster_path.to_string(), size.to_string()));
        Ok(b"poster-bytes".to_vec())
    }
}

pub fn director(id: i64, name: &str, gender: i64) -> CrewMember {
    CrewMember {
        id: Some(id),
        name: Some(name.to_string()),
        gender: Some(gender),
        job: Some("Director".to_string()),
    }
}

pub fn listing(id: i64, title: &str, poster_path: Option<&str>) -> MovieListing {
    MovieListing {
        id,
        title: Some(title.to_string()),
        release_date: Some("2009-06-26".to_string()),
        poster_path: poster_path.map(str::to_string),
        vote_average: Some(7.0),
        vote_count: Some(100),
        popularity: Some(10.0),
        ..Default::default()
    }
}
