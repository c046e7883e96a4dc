//! Core module for downloading TIGRFAM annotations
//!
//! Fetches the per-model HMM report pages from the JCVI API endpoint
//! on a bounded worker pool, flattens each report table into one row
//! of the wide annotation format, and writes the combined table. Each
//! download is independent; failures are logged per model and the rest
//! of the run keeps going.

pub mod cli;
pub mod core;

pub fn lib_fam_fetch(args: Vec<String>) {
    let args = cli::Args::from(args);
    crate::core::fetch_annotations(args).expect("ERROR: Failed to download annotations!");

    log::info!("SUCCESS: fam-fetch ran successfully!");
}
