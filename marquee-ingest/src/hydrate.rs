//! Hydration helpers: turn TMDB payloads into cached rows and
//! prefetch poster images into the on-disk cache.

use std::path::{Path, PathBuf};

use marquee_db::types::{Movie, Person};
use marquee_tmdb::{CatalogSource, CrewMember, MovieListing, RateLimiter};
use rusqlite::Connection;

use crate::clock::now_iso;
use crate::error::IngestError;

/// Convert an API payload into a movie row. Works for both listing
/// and full-detail payloads; the runtime field is simply absent from
/// listings.
pub fn movie_from_listing(listing: &MovieListing, now: &str) -> Movie {
    Movie {
        tmdb_id: listing.id,
        title: listing.display_title().to_string(),
        year: listing.year(),
        runtime: listing.runtime,
        overview: listing.overview.clone(),
        poster_path: listing.poster_path.clone(),
        backdrop_path: listing.backdrop_path.clone(),
        vote_avg: listing.vote_average,
        vote_count: listing.vote_count,
        popularity: listing.popularity,
        updated_at: now.to_string(),
    }
}

fn person_from_crew(member: &CrewMember, now: &str) -> Option<Person> {
    Some(Person {
        tmdb_person_id: member.id?,
        name: member.name.clone().unwrap_or_default(),
        gender: member.gender.unwrap_or(0),
        updated_at: now.to_string(),
    })
}

/// Fetch credits for a movie and record its directors: upsert each
/// director as a person and insert the credit pair. Returns the number
/// of directors recorded. Zero is a valid outcome; the movie then has
/// no credit rows and stays eligible for future re-discovery.
pub fn hydrate_directors(
    conn: &Connection,
    source: &dyn CatalogSource,
    tmdb_id: i64,
) -> Result<usize, IngestError> {
    let credits = source.movie_credits(tmdb_id)?;
    let now = now_iso();

    let mut recorded = 0;
    for member in credits.crew.iter().filter(|m| m.is_director()) {
        let Some(person) = person_from_crew(member, &now) else {
            continue;
        };
        marquee_db::upsert_person(conn, &person)?;
        marquee_db::insert_director_credit(conn, tmdb_id, person.tmdb_person_id)?;
        recorded += 1;
    }

    Ok(recorded)
}

/// Fetch full details for a movie and upsert them, runtime included.
pub fn hydrate_movie_details(
    conn: &Connection,
    source: &dyn CatalogSource,
    tmdb_id: i64,
) -> Result<(), IngestError> {
    let details = source.movie_details(tmdb_id)?;
    let movie = movie_from_listing(&details, &now_iso());
    marquee_db::upsert_movie_details(conn, &movie)?;
    Ok(())
}

/// On-disk cache location for a poster. The serving layer reads the
/// same layout, so files written here are directly servable.
pub fn poster_cache_path(cache_dir: &Path, tmdb_id: i64, size: &str) -> PathBuf {
    cache_dir.join(format!("{tmdb_id}_{size}.jpg"))
}

/// Download and cache one poster size for a movie, if it isn't cached
/// already. Returns true only when a fresh download happened. Movies
/// without a stored poster path are skipped, not errors.
pub fn prefetch_poster(
    conn: &Connection,
    source: &dyn CatalogSource,
    limiter: &mut RateLimiter,
    cache_dir: &Path,
    tmdb_id: i64,
    size: &str,
) -> Result<bool, IngestError> {
    let Some(movie) = marquee_db::movie_by_id(conn, tmdb_id)? else {
        return Ok(false);
    };
    let Some(poster_path) = movie.poster_path else {
        return Ok(false);
    };

    let dest = poster_cache_path(cache_dir, tmdb_id, size);
    if dest.exists() {
        return Ok(false);
    }

    limiter.wait();
    let bytes = source.download_poster(&poster_path, size)?;
    std::fs::create_dir_all(cache_dir)?;
    std::fs::write(&dest, &bytes)?;
    Ok(true)
}
