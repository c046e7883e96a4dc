pub mod fns;
pub mod mods;

pub use fns::*;
pub use mods::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// numeric values
pub const SENTINEL_CUTOFF: f64 = 1_000_000.0;
pub const MIN_WORKERS: usize = 1;
pub const LEGACY_CUTOFF_FIELDS: usize = 5;
pub const ANNOTATION_CUTOFF_FIELDS: usize = 8;
pub const ANNOTATION_THRESHOLD_OFFSET: usize = 4;
pub const LISTING_FIELDS: usize = 5;
pub const ACCESSION_WIDTH: usize = 5;
pub const REQUEST_TIMEOUT: u64 = 60; // seconds

// file names
pub const ANNOTATION_COUNTS: &str = "tigrfam_annotation_counts.tsv";
pub const INFO_TABLE: &str = "TIGRFAM_INFO.tsv";
pub const COMPLETE_LISTING: &str = "TIGRFAM_complete_listing.tsv";
pub const COMPLETE_ANNOTATIONS: &str = "TIGRFAM_complete_annotations.tsv";
pub const ROLE_HIERARCHY: &str = "TIGRFAM_hierarchy.tsv";

// remote endpoints
pub const LISTING_URL: &str = "http://www.jcvi.org/cgi-bin/tigrfams/Listing.cgi";
pub const REPORT_ENDPOINT: &str = "http://www.jcvi.org/cgi-bin/tigrfams/HmmReportPage.cgi?acc=";

// table headers
pub const COUNTS_HEADER: &str = "TIGRFAM\tcount";
pub const INFO_HEADER: &str =
    "accession\ttrusted_global\ttrusted_domain\tnoise_global\tnoise_domain";
pub const HIERARCHY_HEADER: &str = "MAINROLE\tSUB1ROLE\tTIGRFAM";

// markers
pub const COMMENT_CHAR: char = '#';
pub const MISSING_ROLE: &str = "NA";

// report page fields, in output column order
pub const ANNOTATION_KEYS: [&str; 19] = [
    "Accession",
    "Name",
    "Function",
    "Gene_Symbol",
    "Trusted_Cutoff",
    "Domain_Trusted_Cutoff",
    "Noise_Cutoff",
    "Domain_Noise_Cutoff",
    "Isology_Type",
    "HMM_Length",
    "Mainrole_Category",
    "Subrole_Category",
    "Gene_Ontology_Term",
    "Author",
    "Entry_Date",
    "Last_Modified",
    "Comment",
    "References",
    "Genome_Property",
];
