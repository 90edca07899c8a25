//! Direct hydration from the popular-movies list.
//!
//! Unlike the queue-driven worker, this scans popular pages and
//! hydrates selected movies immediately; listing payloads already
//! carry the record fields, so there is nothing to defer.

use std::path::PathBuf;
use std::time::Duration;

use marquee_tmdb::{CatalogSource, RateLimiter};
use rusqlite::Connection;

use crate::clock::now_iso;
use crate::error::IngestError;
use crate::hydrate;

/// Options for a popular-list refresh.
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Number of popular pages to scan.
    pub pages: u32,
    pub poster_sizes: Vec<String>,
    pub poster_sleep: Duration,
    pub cache_dir: PathBuf,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            pages: 10,
            poster_sizes: vec!["w342".to_string()],
            poster_sleep: Duration::from_millis(100),
            cache_dir: PathBuf::from("cache/posters"),
        }
    }
}

/// Counts from one refresh run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshStats {
    /// Listings scanned (with a usable ID).
    pub scanned: u64,
    /// Movies matching the selection predicate.
    pub selected: u64,
}

/// Scan popular pages, upsert every listing, and fully hydrate the
/// movies the selection predicate matches.
pub fn refresh_popular(
    conn: &Connection,
    source: &dyn CatalogSource,
    limiter: &mut RateLimiter,
    options: &RefreshOptions,
) -> Result<RefreshStats, IngestError> {
    let mut stats = RefreshStats::default();

    for page in 1..=options.pages {
        limiter.wait();
        let payload = source.popular_movies(page)?;
        if payload.results.is_empty() {
            break;
        }

        for listing in &payload.results {
            if listing.id <= 0 {
                continue;
            }
            stats.scanned += 1;

            let movie = hydrate::movie_from_listing(listing, &now_iso());
            marquee_db::upsert_movie_listing(conn, &movie)?;

            if !marquee_db::directors_hydrated(conn, listing.id)? {
                limiter.wait();
                hydrate::hydrate_directors(conn, source, listing.id)?;
            }

            if marquee_db::is_woman_directed(conn, listing.id)? {
                limiter.wait();
                hydrate::hydrate_movie_details(conn, source, listing.id)?;
                for size in &options.poster_sizes {
                    let downloaded = hydrate::prefetch_poster(
                        conn,
                        source,
                        limiter,
                        &options.cache_dir,
                        listing.id,
                        size,
                    )?;
                    if downloaded && !options.poster_sleep.is_zero() {
                        std::thread::sleep(options.poster_sleep);
                    }
                }
                stats.selected += 1;
            }
        }
    }

    log::info!(
        "Popular refresh: scanned {}, selected {}",
        stats.scanned,
        stats.selected
    );
    Ok(stats)
}
