//! Core module for flattening TIGRFAM INFO files
//!
//! Reads the profile cutoffs scattered across per-model INFO flat
//! files into a single five-column tab-separated table, one row per
//! file, ready to be joined against hmmsearch output by fam-count.

use clap::{self, Parser};
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use fam_info::cli::Args;
use fam_info::core::build_table;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    build_table(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
