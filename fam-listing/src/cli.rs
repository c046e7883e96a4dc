use clap::Parser;
use config::{COMPLETE_LISTING, LISTING_URL};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 'w',
        long = "webpage",
        required = false,
        value_name = "URL",
        help = "JCVI TIGRFAMs complete listing webpage",
        default_value = LISTING_URL
    )]
    pub webpage: String,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        value_name = "PATH",
        help = "Output filename",
        default_value = COMPLETE_LISTING
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
