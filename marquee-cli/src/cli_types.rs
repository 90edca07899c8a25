//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Maintain a local cache of woman-directed movies from TMDB", long_about = None)]
pub(crate) struct Cli {
    /// Path to the cache database
    #[arg(long, global = true, default_value = "movies.sqlite3")]
    pub db: PathBuf,

    /// Directory for cached poster images
    #[arg(long, global = true, default_value = "cache/posters")]
    pub cache_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that talk to the TMDB API.
#[derive(Args, Clone)]
pub(crate) struct ApiArgs {
    /// Maximum API requests per second (0 disables throttling)
    #[arg(long, default_value_t = 20.0)]
    pub rate: f64,

    /// Preferred region for listings (e.g., US, FR)
    #[arg(long)]
    pub region: Option<String>,

    /// Preferred language for titles and overviews (e.g., en-US)
    #[arg(long)]
    pub language: Option<String>,
}

/// Common arguments for commands that download poster images.
#[derive(Args, Clone)]
pub(crate) struct PosterArgs {
    /// Poster sizes to cache (e.g., w185,w342,w500)
    #[arg(long, value_delimiter = ',', default_value = "w342")]
    pub poster_sizes: Vec<String>,

    /// Pause in seconds after each fresh poster download
    #[arg(long, default_value_t = 0.05)]
    pub poster_sleep: f64,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Enqueue IDs from the newest daily bulk-export snapshot
    Export {
        /// How many days back to probe for a snapshot
        #[arg(long, default_value_t = 7)]
        days_back: u32,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Enqueue IDs from the change feed for a date range
    Changes {
        /// Range start (YYYY-MM-DD, default: 7 days ago)
        #[arg(long)]
        start_date: Option<String>,

        /// Range end (YYYY-MM-DD, default: today)
        #[arg(long)]
        end_date: Option<String>,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Drain the ingestion queue: hydrate, filter, and cache posters
    Worker {
        /// Maximum entries to process (0 = drain everything)
        #[arg(long, default_value_t = 0)]
        max_items: u64,

        /// Also retry previously failed entries
        #[arg(long)]
        include_failed: bool,

        /// Give up on entries that have failed this many times
        #[arg(long, default_value_t = 5)]
        max_attempts: i64,

        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        posters: PosterArgs,
    },

    /// Refresh from the popular list, bypassing the queue
    Popular {
        /// Number of popular pages to scan
        #[arg(long, default_value_t = 10)]
        pages: u32,

        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        posters: PosterArgs,
    },

    /// Full weekly batch: export, changes, then drain the queue
    Weekly {
        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        posters: PosterArgs,
    },
}
