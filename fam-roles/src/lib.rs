//! Core module for building the TIGRFAM role hierarchy
//!
//! Joins the role-names file (role id, rank, description) against the
//! role-links file (model, role id) into a flat three-column lookup
//! table of main role and sub role per model. Models whose role id has
//! no mainrole or sub1role description are kept with NA placeholders.

pub mod cli;
pub mod core;

pub fn lib_fam_roles(args: Vec<String>) {
    let args = cli::Args::from(args);
    crate::core::build_hierarchy(args).expect("ERROR: Failed to build the role hierarchy!");

    log::info!("SUCCESS: fam-roles ran successfully!");
}
