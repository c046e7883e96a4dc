use dashmap::DashSet;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

// os
#[cfg(not(windows))]
const TICK_SETTINGS: (&str, u64) = ("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ", 80);
#[cfg(windows)]
const TICK_SETTINGS: (&str, u64) = (r"+-x| ", 200);

/// return a pre-configured progress bar
pub fn get_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let progressbar_style = ProgressStyle::default_spinner()
        .tick_chars(TICK_SETTINGS.0)
        .template(" {spinner} {msg:<30} {wide_bar} ETA {eta_precise} ")
        .expect("no template error");

    let progress_bar = ProgressBar::new(length);

    progress_bar.set_style(progressbar_style);
    progress_bar.enable_steady_tick(Duration::from_millis(TICK_SETTINGS.1));
    progress_bar.set_message(msg.to_owned());

    progress_bar
}

/// write a header + ordered rows to a tab-separated file
pub fn write_records<P: AsRef<std::path::Path>>(header: &str, rows: &Vec<String>, fname: P) {
    log::info!(
        "Records in {:?}: {:?}. Writing...",
        fname.as_ref(),
        rows.len()
    );
    let f = match File::create(fname.as_ref()) {
        Ok(f) => f,
        Err(e) => panic!("Error creating file: {}", e),
    };
    let mut writer = BufWriter::new(f);

    writeln!(writer, "{}", header).unwrap_or_else(|e| {
        panic!("Error writing to file: {}", e);
    });
    for row in rows.iter() {
        writeln!(writer, "{}", row).unwrap_or_else(|e| {
            panic!("Error writing to file: {}", e);
        });
    }
}

/// write a header + a DashSet of rows to a tab-separated file
pub fn par_write_records<T, P>(header: &str, rows: &DashSet<T>, fname: P)
where
    T: AsRef<str> + Sync + Send + Eq + std::hash::Hash,
    P: AsRef<std::path::Path>,
{
    log::info!(
        "Records in {:?}: {:?}. Writing...",
        fname.as_ref(),
        rows.len()
    );
    let f = match File::create(fname.as_ref()) {
        Ok(f) => f,
        Err(e) => panic!("Error creating file: {}", e),
    };
    let mut writer = BufWriter::new(f);

    writeln!(writer, "{}", header).unwrap_or_else(|e| {
        panic!("Error writing to file: {}", e);
    });
    for row in rows.iter() {
        writeln!(writer, "{}", row.as_ref()).unwrap_or_else(|e| {
            panic!("Error writing to file: {}", e);
        });
    }
}

/// argument checker for all subcommands
pub trait ArgCheck {
    fn check(&self) -> Result<(), CliError> {
        self.validate_args()
    }

    fn validate_args(&self) -> Result<(), CliError> {
        if self.get_inputs().is_empty() {
            let err = "No input files provided".to_string();
            return Err(CliError::InvalidInput(err));
        }
        for input in self.get_inputs() {
            validate(input)?;
        }

        Ok(())
    }

    fn get_inputs(&self) -> Vec<&PathBuf>;
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// argument validation
pub fn validate(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!("{:?} does not exist", arg)));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!("{:?} is not a file", arg)));
    }

    match std::fs::metadata(arg) {
        Ok(metadata) if metadata.len() == 0 => {
            Err(CliError::InvalidInput(format!("file {:?} is empty", arg)))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(CliError::IoError(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyArgs {
        inputs: Vec<PathBuf>,
    }

    impl ArgCheck for DummyArgs {
        fn get_inputs(&self) -> Vec<&PathBuf> {
            self.inputs.iter().collect()
        }
    }

    #[test]
    fn test_validate_missing_file() {
        let arg = PathBuf::from("does/not/exist.tsv");
        assert!(validate(&arg).is_err());
    }

    #[test]
    fn test_validate_empty_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("famtools_empty_input.tsv");
        File::create(&path).unwrap();

        assert!(validate(&path).is_err());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_argcheck_rejects_no_inputs() {
        let args = DummyArgs { inputs: vec![] };
        assert!(args.check().is_err());
    }

    #[test]
    fn test_argcheck_accepts_nonempty_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("famtools_ok_input.tsv");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "TIGR00001\t10.0\t5.0\t8.0\t4.0").unwrap();

        let args = DummyArgs {
            inputs: vec![path.clone()],
        };
        assert!(args.check().is_ok());

        std::fs::remove_file(&path).ok();
    }
}
