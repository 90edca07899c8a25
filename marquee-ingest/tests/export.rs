use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use marquee_db::types::Person;
use marquee_ingest::scan_export;

fn gzip_lines(lines: &[&str]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        writeln!(encoder, "{line}").unwrap();
    }
    encoder.finish().unwrap()
}

#[test]
fn scan_skips_missing_ids_and_dedups() {
    let conn = marquee_db::open_memory().unwrap();

    // ID 10 is already hydrated and must not be re-queued.
    marquee_db::upsert_person(
        &conn,
        &Person {
            tmdb_person_id: 1,
            name: "Director".to_string(),
            gender: 1,
            updated_at: "2026-08-28T00:00:00Z".to_string(),
        },
    )
    .unwrap();
    marquee_db::insert_director_credit(&conn, 10, 1).unwrap();

    let body = gzip_lines(&[
        r#"{"adult":false,"id":10,"original_title":"Cached","popularity":6.1}"#,
        r#"{"adult":false,"id":11,"original_title":"New One","popularity":2.3}"#,
        r#"{"adult":false,"id":12,"original_title":"New Two","popularity":1.0}"#,
        r#"{"adult":false,"id":11,"original_title":"New One","popularity":2.3}"#,
        r#"{"adult":false,"original_title":"No Id Here","popularity":0.4}"#,
        r#"{"adult":false,"id":13,"original_title":"New Three","popularity":9.9}"#,
    ]);

    let stats = scan_export(&conn, &body[..]).unwrap();
    assert_eq!(stats.scanned, 5);
    assert_eq!(stats.enqueued, 3);

    let queued: Vec<i64> = conn
        .prepare("SELECT tmdb_id FROM ingest_queue ORDER BY tmdb_id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(queued, vec![11, 12, 13]);
}

#[test]
fn scan_handles_more_lines_than_one_batch() {
    let conn = marquee_db::open_memory().unwrap();

    let lines: Vec<String> = (1..=1200)
        .map(|id| format!(r#"{{"id":{id},"original_title":"Movie {id}"}}"#))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let body = gzip_lines(&refs);

    let stats = scan_export(&conn, &body[..]).unwrap();
    assert_eq!(stats.scanned, 1200);
    assert_eq!(stats.enqueued, 1200);
}

#[test]
fn malformed_line_is_an_error() {
    let conn = marquee_db::open_memory().unwrap();
    let body = gzip_lines(&[r#"{"id":1}"#, "not json at all"]);

    let err = scan_export(&conn, &body[..]).unwrap_err();
    assert!(matches!(err, marquee_ingest::IngestError::ExportLine(_)));
}

#[test]
fn zero_and_negative_ids_are_skipped() {
    let conn = marquee_db::open_memory().unwrap();
    let body = gzip_lines(&[
        r#"{"id":0,"original_title":"Falsy"}"#,
        r#"{"id":-7,"original_title":"Negative"}"#,
        r#"{"id":14,"original_title":"Real"}"#,
    ]);

    let stats = scan_export(&conn, &body[..]).unwrap();
    assert_eq!(stats.scanned, 1);
    assert_eq!(stats.enqueued, 1);

    let queued: Option<i64> = conn
        .query_row("SELECT tmdb_id FROM ingest_queue", [], |row| row.get(0))
        .ok();
    assert_eq!(queued, Some(14));
}

#[test]
fn empty_lines_are_tolerated() {
    let conn = marquee_db::open_memory().unwrap();
    let body = gzip_lines(&[r#"{"id":1}"#, "", r#"{"id":2}"#]);

    let stats = scan_export(&conn, &body[..]).unwrap();
    assert_eq!(stats.scanned, 2);
    assert_eq!(stats.enqueued, 2);
}
