//! Timestamp formatting shared across the pipeline.

/// Current UTC time as an ISO-8601 string, the format stored in
/// `updated_at` / `added_at` / `last_attempt` columns.
pub fn now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
