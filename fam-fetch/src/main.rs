//! Core module for downloading TIGRFAM annotations
//!
//! Fetches per-model HMM report pages from the JCVI API endpoint with
//! a bounded pool of download workers and flattens them into a single
//! wide annotation table.

use clap::{self, Parser};
use log::{error, info, Level};
use simple_logger::init_with_level;

use fam_fetch::cli::Args;
use fam_fetch::core::fetch_annotations;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.workers.max(config::MIN_WORKERS))
        .build_global()
        .unwrap();

    fetch_annotations(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
