mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::{director, listing, StubCatalog};
use marquee_ingest::{poster_cache_path, refresh_popular, RefreshOptions};
use marquee_tmdb::{MovieListing, RateLimiter};

#[test]
fn upserts_every_listing_but_hydrates_only_selected() {
    let conn = marquee_db::open_memory().unwrap();
    let cache = tempfile::tempdir().unwrap();

    let source = StubCatalog {
        popular_pages: vec![vec![
            listing(100, "Selected Movie", Some("/p100.jpg")),
            listing(200, "Other Movie", Some("/p200.jpg")),
        ]],
        credits: HashMap::from([
            (100, vec![director(7, "Céline Sciamma", 1)]),
            (200, vec![director(8, "Some Director", 2)]),
        ]),
        details: HashMap::from([(
            100,
            MovieListing {
                runtime: Some(122),
                ..listing(100, "Selected Movie", Some("/p100.jpg"))
            },
        )]),
        ..Default::default()
    };

    let opts = RefreshOptions {
        pages: 3,
        poster_sizes: vec!["w342".to_string()],
        poster_sleep: Duration::ZERO,
        cache_dir: cache.path().to_path_buf(),
    };

    let mut limiter = RateLimiter::new(0.0);
    let stats = refresh_popular(&conn, &source, &mut limiter, &opts).unwrap();
    assert_eq!(stats.scanned, 2);
    assert_eq!(stats.selected, 1);

    // Both listings are cached; only the selected one has details.
    let selected = marquee_db::movie_by_id(&conn, 100).unwrap().unwrap();
    assert_eq!(selected.runtime, Some(122));
    let other = marquee_db::movie_by_id(&conn, 200).unwrap().unwrap();
    assert_eq!(other.runtime, None);

    assert!(poster_cache_path(cache.path(), 100, "w342").exists());
    assert!(!poster_cache_path(cache.path(), 200, "w342").exists());
}

#[test]
fn second_refresh_skips_rehydrating_directors() {
    let conn = marquee_db::open_memory().unwrap();
    let cache = tempfile::tempdir().unwrap();

    let source = StubCatalog {
        popular_pages: vec![vec![listing(200, "Other Movie", None)]],
        credits: HashMap::from([(200, vec![director(8, "Some Director", 2)])]),
        ..Default::default()
    };

    let opts = RefreshOptions {
        pages: 1,
        poster_sizes: vec![],
        poster_sleep: Duration::ZERO,
        cache_dir: cache.path().to_path_buf(),
    };

    let mut limiter = RateLimiter::new(0.0);
    refresh_popular(&conn, &source, &mut limiter, &opts).unwrap();
    assert!(marquee_db::directors_hydrated(&conn, 200).unwrap());

    // Hydrating again is cheap: credits already present, only the
    // listing upsert runs.
    let stats = refresh_popular(&conn, &source, &mut limiter, &opts).unwrap();
    assert_eq!(stats.scanned, 1);
    assert_eq!(stats.selected, 0);
}
