//! marquee CLI
//!
//! Batch tool for maintaining a local cache of woman-directed movies
//! from the TMDB catalog.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { days_back, ref api } => {
            commands::export::run_export(&cli.db, days_back, api)
        }
        Commands::Changes {
            ref start_date,
            ref end_date,
            ref api,
        } => commands::changes::run_changes(&cli.db, start_date.clone(), end_date.clone(), api),
        Commands::Worker {
            max_items,
            include_failed,
            max_attempts,
            ref api,
            ref posters,
        } => commands::worker::run_worker(
            &cli.db,
            &cli.cache_dir,
            max_items,
            include_failed,
            max_attempts,
            api,
            posters,
        ),
        Commands::Popular {
            pages,
            ref api,
            ref posters,
        } => commands::popular::run_popular(&cli.db, &cli.cache_dir, pages, api, posters),
        Commands::Weekly {
            ref api,
            ref posters,
        } => commands::weekly::run_weekly(&cli.db, &cli.cache_dir, api, posters),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
