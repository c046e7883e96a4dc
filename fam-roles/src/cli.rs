use clap::Parser;
use config::{ArgCheck, ROLE_HIERARCHY};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "role-names",
        required = true,
        value_name = "PATH",
        help = "Path to TIGR_ROLE_NAMES"
    )]
    pub role_names: PathBuf,

    #[arg(
        short = 'l',
        long = "role-links",
        required = true,
        value_name = "PATH",
        help = "Path to TIGRFAMS_ROLE_LINK"
    )]
    pub role_links: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        value_name = "PATH",
        help = "Output filename",
        default_value = ROLE_HIERARCHY
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

impl ArgCheck for Args {
    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.role_names, &self.role_links]
    }
}
