use clap::Parser;
use config::{ArgCheck, CutoffFormat, ANNOTATION_COUNTS};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 't',
        long = "tbl",
        required = true,
        value_name = "PATH",
        help = "hmmsearch tbl output file"
    )]
    pub tbl: PathBuf,

    #[arg(
        short = 'c',
        long = "cutoffs",
        required = true,
        value_name = "PATH",
        help = "TIGRFAM cutoffs table [five-column fam-info format or fam-fetch annotation format]"
    )]
    pub cutoffs: PathBuf,

    #[arg(
        short = 'f',
        long = "format",
        required = false,
        value_name = "FORMAT",
        help = "Cutoff table format [legacy|annotation]",
        default_value = "legacy"
    )]
    pub format: String,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        value_name = "PATH",
        help = "Output filename",
        default_value = ANNOTATION_COUNTS
    )]
    pub output: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    pub fn mode(&self) -> anyhow::Result<CutoffFormat> {
        self.format
            .parse::<CutoffFormat>()
            .map_err(|e| anyhow::anyhow!(e))
    }
}

impl ArgCheck for Args {
    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.tbl, &self.cutoffs]
    }
}
