use clap::Parser;
use config::{ArgCheck, INFO_TABLE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        required = true,
        value_name = "PATHS",
        value_delimiter = ',',
        num_args = 1..,
        help = "TIGRFAM INFO files"
    )]
    pub info: Vec<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        value_name = "PATH",
        help = "Output filename",
        default_value = INFO_TABLE
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
        self.info.iter().collect()
    }
}
