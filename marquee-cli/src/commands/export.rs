use std::path::Path;

use crate::cli_types::ApiArgs;
use crate::error::CliError;

use super::{api_context, check_mark, open_db, print_queue_stats};

/// Run the export command: probe for the newest bulk-export snapshot
/// and enqueue every ID not already known.
pub(crate) fn run_export(db: &Path, days_back: u32, api: &ApiArgs) -> Result<(), CliError> {
    let conn = open_db(db)?;
    let (client, _limiter) = api_context(api)?;

    println!("Probing export snapshots (up to {days_back} days back)...");
    let stats = marquee_ingest::ingest_export(&conn, &client, days_back)?;

    println!(
        "{} {} IDs scanned, {} newly queued",
        check_mark(),
        stats.scanned,
        stats.enqueued,
    );
    print_queue_stats(&conn)
}
