mod common;

use common::StubCatalog;
use marquee_ingest::{ingest_changes, LAST_CHANGES_DATE};
use marquee_tmdb::RateLimiter;

#[test]
fn paginates_and_sets_watermark() {
    let conn = marquee_db::open_memory().unwrap();
    let source = StubCatalog {
        change_pages: vec![vec![Some(1), Some(2)], vec![Some(3), None]],
        ..Default::default()
    };
    let mut limiter = RateLimiter::new(0.0);

    let added = ingest_changes(&conn, &source, &mut limiter, "2026-08-22", "2026-08-29").unwrap();
    assert_eq!(added, 3); // the id-less record is skipped

    assert_eq!(
        marquee_db::get_state(&conn, LAST_CHANGES_DATE)
            .unwrap()
            .as_deref(),
        Some("2026-08-29")
    );
}

#[test]
fn empty_feed_is_a_successful_run() {
    let conn = marquee_db::open_memory().unwrap();
    let source = StubCatalog::default();
    let mut limiter = RateLimiter::new(0.0);

    let added = ingest_changes(&conn, &source, &mut limiter, "2026-08-22", "2026-08-29").unwrap();
    assert_eq!(added, 0);
    // The watermark still advances: the range was fully scanned.
    assert!(marquee_db::get_state(&conn, LAST_CHANGES_DATE)
        .unwrap()
        .is_some());
}

#[test]
fn zero_ids_are_treated_as_missing() {
    let conn = marquee_db::open_memory().unwrap();
    let source = StubCatalog {
        change_pages: vec![vec![Some(0), Some(4)]],
        ..Default::default()
    };
    let mut limiter = RateLimiter::new(0.0);

    let added = ingest_changes(&conn, &source, &mut limiter, "2026-08-22", "2026-08-29").unwrap();
    assert_eq!(added, 1);

    let queued: i64 = conn
        .query_row("SELECT tmdb_id FROM ingest_queue", [], |row| row.get(0))
        .unwrap();
    assert_eq!(queued, 4);
}

#[test]
fn already_seen_ids_are_not_requeued() {
    let conn = marquee_db::open_memory().unwrap();
    let source = StubCatalog {
        change_pages: vec![vec![Some(1), Some(2)]],
        ..Default::default()
    };
    let mut limiter = RateLimiter::new(0.0);

    marquee_db::enqueue_movie(&conn, 2, "2026-08-28T00:00:00Z").unwrap();
    let added = ingest_changes(&conn, &source, &mut limiter, "2026-08-22", "2026-08-29").unwrap();
    assert_eq!(added, 1);
}
