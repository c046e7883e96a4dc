//! Core module for flattening TIGRFAM INFO files
//!
//! Reads the profile cutoffs scattered across per-model INFO flat
//! files into a single five-column tab-separated table, one row per
//! file. The cutoff values are carried verbatim; fam-count owns the
//! numeric validation of whatever ends up in the table.

pub mod cli;
pub mod core;

pub fn lib_fam_info(args: Vec<String>) {
    let args = cli::Args::from(args);
    crate::core::build_table(args).expect("ERROR: Failed to build the cutoff table!");

    log::info!("SUCCESS: fam-info ran successfully!");
}
