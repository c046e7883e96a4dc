use anyhow::{Context, Result};
use hashbrown::HashMap;
use log::info;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use config::{write_records, HIERARCHY_HEADER, MISSING_ROLE};

use crate::cli::Args;

const MAINROLE: &str = "mainrole";
const SUB1ROLE: &str = "sub1role";

/// role_id -> rank -> description
pub type RoleDescriptions = HashMap<String, HashMap<String, String>>;

/// Join role names and role links into the hierarchy table.
pub fn build_hierarchy(args: Args) -> Result<()> {
    let roles = parse_role_names(&args.role_names)?;
    let links = parse_role_links(&args.role_links)?;

    info!(
        "Linking {} TIGRFAMs against {} role ids...",
        links.len(),
        roles.len()
    );

    let mut rows = Vec::with_capacity(links.len());
    for (tigrfam, role_id) in &links {
        let (mainrole, sub1role) = roles
            .get(role_id)
            .and_then(|ranks| Some((ranks.get(MAINROLE)?.as_str(), ranks.get(SUB1ROLE)?.as_str())))
            .unwrap_or((MISSING_ROLE, MISSING_ROLE));

        rows.push(format!("{}\t{}\t{}", mainrole, sub1role, tigrfam));
    }

    write_records(HIERARCHY_HEADER, &rows, &args.output);

    Ok(())
}

/// Parse TIGR_ROLE_NAMES into a nested role_id -> rank -> description map.
///
/// Rows look like `role_id:<TAB>100<TAB>mainrole:<TAB>Protein synthesis`;
/// the rank keeps a trailing colon that is stripped here.
pub fn parse_role_names(path: &PathBuf) -> Result<RoleDescriptions> {
    let reader = BufReader::new(File::open(path)?);
    let mut roles: RoleDescriptions = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.trim_end().splitn(4, '\t');

        let _label = fields.next();
        let role_id = fields
            .next()
            .with_context(|| format!("malformed role name line: {}", line))?;
        let rank = fields
            .next()
            .with_context(|| format!("malformed role name line: {}", line))?;
        let description = fields
            .next()
            .with_context(|| format!("malformed role name line: {}", line))?;

        roles
            .entry(role_id.to_string())
            .or_default()
            .insert(rank.trim_end_matches(':').to_string(), description.to_string());
    }

    Ok(roles)
}

/// Parse TIGRFAMS_ROLE_LINK into (tigrfam, role_id) pairs, first-seen
/// order, last link winning for a duplicated model.
pub fn parse_role_links(path: &PathBuf) -> Result<Vec<(String, String)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut order: Vec<(String, String)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();

        let tigrfam = fields
            .next()
            .with_context(|| format!("malformed role link line: {}", line))?;
        let role_id = fields
            .next()
            .with_context(|| format!("malformed role link line: {}", line))?;

        match seen.get(tigrfam) {
            Some(&idx) => order[idx].1 = role_id.to_string(),
            None => {
                seen.insert(tigrfam.to_string(), order.len());
                order.push((tigrfam.to_string(), role_id.to_string()));
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_role_names() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "TIGR_ROLE_NAMES",
            "role_id:\t100\tmainrole:\tProtein synthesis\n\
             role_id:\t100\tsub1role:\tRibosomal proteins: synthesis and modification\n\
             role_id:\t157\tmainrole:\tTransport and binding proteins\n",
        );

        let roles = parse_role_names(&path).unwrap();

        assert_eq!(roles["100"]["mainrole"], "Protein synthesis");
        assert_eq!(
            roles["100"]["sub1role"],
            "Ribosomal proteins: synthesis and modification"
        );
        assert_eq!(roles["157"]["mainrole"], "Transport and binding proteins");
        assert!(roles["157"].get("sub1role").is_none());
    }

    #[test]
    fn test_parse_role_links_last_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "TIGRFAMS_ROLE_LINK",
            "TIGR00001\t100\nTIGR00002\t157\nTIGR00001\t102\n",
        );

        let links = parse_role_links(&path).unwrap();

        assert_eq!(
            links,
            vec![
                ("TIGR00001".to_string(), "102".to_string()),
                ("TIGR00002".to_string(), "157".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_rank_falls_back_to_na() {
        let mut roles: RoleDescriptions = HashMap::new();
        roles
            .entry("157".to_string())
            .or_default()
            .insert("mainrole".to_string(), "Transport".to_string());

        let (mainrole, sub1role) = roles
            .get("157")
            .and_then(|ranks| {
                Some((ranks.get(MAINROLE)?.as_str(), ranks.get(SUB1ROLE)?.as_str()))
            })
            .unwrap_or((MISSING_ROLE, MISSING_ROLE));

        assert_eq!(mainrole, "NA");
        assert_eq!(sub1role, "NA");
    }
}
