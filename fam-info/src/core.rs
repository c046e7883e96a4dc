use anyhow::{Context, Result};
use log::error;

use std::io::ErrorKind;
use std::path::PathBuf;

use config::{write_records, INFO_HEADER};

use crate::cli::Args;

/// Cutoff fields of one INFO file, carried as raw strings.
///
/// Numeric validation happens downstream in fam-count; this tool only
/// flattens whatever the INFO files say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRecord {
    pub accession: String,
    pub trusted_global: String,
    pub trusted_domain: String,
    pub noise_global: String,
    pub noise_domain: String,
}

impl InfoRecord {
    fn with_defaults(path: &PathBuf) -> Self {
        InfoRecord {
            accession: path.display().to_string(),
            trusted_global: "0".to_string(),
            trusted_domain: "0".to_string(),
            noise_global: "0".to_string(),
            noise_domain: "0".to_string(),
        }
    }

    pub fn to_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.accession,
            self.trusted_global,
            self.trusted_domain,
            self.noise_global,
            self.noise_domain
        )
    }
}

/// Fold all INFO files into the five-column cutoff table.
pub fn build_table(args: Args) -> Result<()> {
    let mut rows = Vec::with_capacity(args.info.len());
    for path in &args.info {
        rows.push(parse_info(path)?.to_row());
    }

    write_records(INFO_HEADER, &rows, &args.output);

    Ok(())
}

/// Parse the accession and cutoff lines of one INFO file.
///
/// Missing lines leave the defaults in place: the file name stands in
/// for the accession and the thresholds stay 0. A file that cannot be
/// decoded is logged and contributes its defaults.
pub fn parse_info(path: &PathBuf) -> Result<InfoRecord> {
    let mut record = InfoRecord::with_defaults(path);

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            error!("ERROR, can't read: {:?}", path);
            return Ok(record);
        }
        Err(e) => return Err(e).with_context(|| format!("reading {:?}", path)),
    };

    for line in content.lines() {
        if line.starts_with("AC") {
            record.accession = second_token(line, path)?;
        } else if line.starts_with("TC") {
            (record.trusted_global, record.trusted_domain) = cutoff_pair(line, path)?;
        } else if line.starts_with("NC") {
            (record.noise_global, record.noise_domain) = cutoff_pair(line, path)?;
        }
    }

    Ok(record)
}

fn second_token(line: &str, path: &PathBuf) -> Result<String> {
    line.split_whitespace()
        .nth(1)
        .map(|token| token.to_string())
        .ok_or_else(|| anyhow::anyhow!("malformed accession line in {:?}: {}", path, line))
}

fn cutoff_pair(line: &str, path: &PathBuf) -> Result<(String, String)> {
    let mut tokens = line.split_whitespace().skip(1);
    let global = tokens
        .next()
        .ok_or_else(|| anyhow::anyhow!("malformed cutoff line in {:?}: {}", path, line))?;
    let domain = tokens
        .next()
        .ok_or_else(|| anyhow::anyhow!("malformed cutoff line in {:?}: {}", path, line))?;

    Ok((global.to_string(), domain.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_info() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TIGR00001.INFO");
        fs::write(
            &path,
            "ID rpmE\nAC TIGR00001\nDE ribosomal protein bL31\nTC 35.00 35.00\nNC 28.00 28.00\n",
        )
        .unwrap();

        let record = parse_info(&path).unwrap();

        assert_eq!(record.accession, "TIGR00001");
        assert_eq!(record.trusted_global, "35.00");
        assert_eq!(record.trusted_domain, "35.00");
        assert_eq!(record.noise_global, "28.00");
        assert_eq!(record.noise_domain, "28.00");
    }

    #[test]
    fn test_parse_info_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TIGR00002.INFO");
        fs::write(&path, "ID something\nDE no cutoffs in this file\n").unwrap();

        let record = parse_info(&path).unwrap();

        assert_eq!(record.accession, path.display().to_string());
        assert_eq!(record.trusted_global, "0");
        assert_eq!(record.noise_domain, "0");
    }

    #[test]
    fn test_parse_info_undecodable_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TIGR00003.INFO");
        fs::write(&path, [0xff, 0xfe, 0x41, 0x43]).unwrap();

        let record = parse_info(&path).unwrap();

        assert_eq!(record.accession, path.display().to_string());
        assert_eq!(record.trusted_global, "0");
    }

    #[test]
    fn test_parse_info_malformed_cutoff_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TIGR00004.INFO");
        fs::write(&path, "AC TIGR00004\nTC 35.00\n").unwrap();

        assert!(parse_info(&path).is_err());
    }

    #[test]
    fn test_row_format() {
        let record = InfoRecord {
            accession: "TIGR00001".to_string(),
            trusted_global: "35.00".to_string(),
            trusted_domain: "35.00".to_string(),
            noise_global: "28.00".to_string(),
            noise_domain: "28.00".to_string(),
        };

        assert_eq!(record.to_row(), "TIGR00001\t35.00\t35.00\t28.00\t28.00");
    }
}
