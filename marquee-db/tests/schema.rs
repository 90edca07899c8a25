use marquee_db::{open_database, open_memory};

#[test]
fn memory_database_has_all_tables() {
    let conn = open_memory().unwrap();
    for table in [
        "movies",
        "people",
        "credits_director",
        "ingest_queue",
        "ingest_state",
        "schema_version",
    ] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "missing table {table}");
    }
}

#[test]
fn open_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.sqlite3");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO ingest_state (key, value) VALUES ('last_export_date', '2026-08-28')",
            [],
        )
        .unwrap();
    }

    // Reopening an existing database must not recreate or wipe tables.
    let conn = open_database(&path).unwrap();
    let value: String = conn
        .query_row(
            "SELECT value FROM ingest_state WHERE key = 'last_export_date'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "2026-08-28");
}

#[test]
fn schema_version_recorded() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, marquee_db::schema::CURRENT_VERSION);
}
