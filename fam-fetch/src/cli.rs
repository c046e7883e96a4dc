use clap::Parser;
use config::{COMPLETE_ANNOTATIONS, REPORT_ENDPOINT};
use std::path::PathBuf;

pub const DEFAULT_START: usize = 1;
pub const DEFAULT_END: usize = 4571;
pub const DEFAULT_WORKERS: usize = 20;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 'a',
        long = "api-endpoint",
        required = false,
        value_name = "URL",
        help = "JCVI TIGRFAMs HMM report page API access point",
        default_value = REPORT_ENDPOINT
    )]
    pub api_endpoint: String,

    #[arg(
        short = 's',
        long = "start",
        required = false,
        value_name = "ID",
        help = "Start TIGRFAM ID to download from",
        default_value_t = DEFAULT_START
    )]
    pub start: usize,

    #[arg(
        short = 'e',
        long = "end",
        required = false,
        value_name = "ID",
        help = "End TIGRFAM ID to download to",
        default_value_t = DEFAULT_END
    )]
    pub end: usize,

    #[arg(
        short = 'w',
        long = "workers",
        required = false,
        value_name = "N",
        help = "Number of parallel download workers",
        default_value_t = DEFAULT_WORKERS
    )]
    pub workers: usize,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        value_name = "PATH",
        help = "Output filename",
        default_value = COMPLETE_ANNOTATIONS
    )]
    pub output: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}
