//! Core module for counting validated TIGRFAM annotations
//!
//! This module joins a stream of hmmsearch tbl records against a table
//! of per-model score cutoffs and counts the hits that qualify as
//! validated annotations. The cutoff table is loaded fully before the
//! first hit is read, in either the five-column format written by
//! fam-info or the wide annotation format written by fam-fetch. Hits
//! are then filtered in two stages: models missing from the cutoff
//! table are dropped with a notice, and surviving hits must beat their
//! model's trusted-domain cutoff strictly. The result is one count per
//! model, in the order models were first seen in the stream.

pub mod cli;
pub mod core;
pub mod record;

pub fn lib_fam_count(args: Vec<String>) {
    let args = cli::Args::from(args);
    crate::core::count_annotations(args).expect("ERROR: Failed to count annotations!");

    log::info!("SUCCESS: fam-count ran successfully!");
}
