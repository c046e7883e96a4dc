//! Core module for flattening the TIGRFAM complete listing
//!
//! Downloads the complete-listing webpage and rewrites its HTML table
//! as a five-column tab-separated file.

use clap::{self, Parser};
use log::{error, info, Level};
use simple_logger::init_with_level;

use fam_listing::cli::Args;
use fam_listing::core::parse_listing;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    parse_listing(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
