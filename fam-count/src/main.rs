//! Core module for counting validated TIGRFAM annotations
//!
//! Parses hmmsearch tbl output, joins each hit against per-model score
//! cutoffs and writes a per-model count of the hits whose domain score
//! strictly exceeds the trusted-domain cutoff. Hits for models absent
//! from the cutoff table are dropped with a notice; a malformed cutoff
//! row in the legacy table format aborts the run with a distinct exit
//! status.

use clap::{self, Parser};
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use fam_count::cli::Args;
use fam_count::core::count_annotations;
use fam_count::record::CutoffError;

// exit status for a malformed row in the strict legacy cutoff table
const MALFORMED_CUTOFFS: i32 = 2;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Debug).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    count_annotations(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        match e.downcast_ref::<CutoffError>() {
            Some(CutoffError::MalformedRow { .. }) => std::process::exit(MALFORMED_CUTOFFS),
            _ => std::process::exit(1),
        }
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
