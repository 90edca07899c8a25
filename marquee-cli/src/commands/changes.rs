use std::path::Path;

use chrono::{Days, Utc};

use crate::cli_types::ApiArgs;
use crate::error::CliError;

use super::{api_context, check_mark, open_db, print_queue_stats};

/// Run the changes command: walk the change feed over a date range and
/// enqueue every ID not already known. The range defaults to the
/// trailing seven days.
pub(crate) fn run_changes(
    db: &Path,
    start_date: Option<String>,
    end_date: Option<String>,
    api: &ApiArgs,
) -> Result<(), CliError> {
    let conn = open_db(db)?;
    let (client, mut limiter) = api_context(api)?;

    let today = Utc::now().date_naive();
    let end_date = end_date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    let start_date = start_date
        .unwrap_or_else(|| (today - Days::new(7)).format("%Y-%m-%d").to_string());

    println!("Scanning change feed {start_date} .. {end_date}...");
    let added = marquee_ingest::ingest_changes(&conn, &client, &mut limiter, &start_date, &end_date)?;

    println!("{} {} IDs newly queued", check_mark(), added);
    print_queue_stats(&conn)
}
