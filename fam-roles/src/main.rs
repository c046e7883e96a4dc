//! Core module for building the TIGRFAM role hierarchy
//!
//! Joins role names and role links into a hierarchical index of
//! TIGRFAMs: one row per model with its main role and sub role.

use clap::{self, Parser};
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use fam_roles::cli::Args;
use fam_roles::core::build_hierarchy;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    build_hierarchy(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
