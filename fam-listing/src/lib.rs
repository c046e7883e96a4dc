//! Core module for flattening the TIGRFAM complete listing
//!
//! Downloads the complete-listing webpage and rewrites its HTML table
//! as a five-column tab-separated file, header row included.

pub mod cli;
pub mod core;

pub fn lib_fam_listing(args: Vec<String>) {
    let args = cli::Args::from(args);
    crate::core::parse_listing(args).expect("ERROR: Failed to parse the complete listing!");

    log::info!("SUCCESS: fam-listing ran successfully!");
}
