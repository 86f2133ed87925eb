//! CLI entry point for browsing the tasting log.
//!
//! # Responsibility
//! - Build a seeded catalog from `BREWLOG_*` environment settings.
//! - Print category or review listings for an optional filter.
//!
//! # Invariants
//! - Output is deterministic for a fixed `BREWLOG_SEED` value.
//! - Failures go to stderr with a non-zero exit code.

use brewlog_core::{format_tasting_date, init_logging, Catalog, CoreConfig};
use chrono::Local;
use log::info;
use std::process::ExitCode;

const USAGE: &str = "usage: brewlog_cli [categories|reviews|version] [filter]";

#[derive(Debug)]
enum Command {
    Categories(String),
    Reviews(String),
    Version,
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let filter = args.get(1).cloned().unwrap_or_default();
    match args.first().map(String::as_str) {
        None | Some("reviews") => Ok(Command::Reviews(filter)),
        Some("categories") => Ok(Command::Categories(filter)),
        Some("version") => Ok(Command::Version),
        Some(other) => Err(format!("unknown command `{other}`\n{USAGE}")),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let command = parse_command(args)?;
    if let Command::Version = command {
        println!("brewlog_core version={}", brewlog_core::core_version());
        return Ok(());
    }

    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let today = Local::now().date_naive();
    let mut seed = config.seed_source(today);
    let catalog = Catalog::bootstrap(seed.as_mut()).map_err(|err| err.to_string())?;
    info!(
        "event=cli_bootstrap module=cli status=ok categories={} reviews={}",
        catalog.categories().len(),
        catalog.reviews().len()
    );

    match command {
        Command::Categories(filter) => {
            for category in catalog.categories().find_categories(&filter) {
                println!("{}\t{}", category.name, catalog.tasted_count(&category));
            }
        }
        Command::Reviews(filter) => {
            for review in catalog.reviews().find_reviews(&filter) {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    review.name,
                    review.category_name(),
                    review.score,
                    review.count,
                    format_tasting_date(review.date)
                );
            }
        }
        Command::Version => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("brewlog_cli: {err}");
            ExitCode::FAILURE
        }
    }
}
