use anyhow::{Context, Result};
use hashbrown::HashMap;
use log::{debug, info, warn};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use config::{write_records, CutoffFormat, COMMENT_CHAR, COUNTS_HEADER};

use crate::cli::Args;
use crate::record::{CutoffError, Cutoffs, Hit};

/// Count validated annotations per model and write the counts table.
pub fn count_annotations(args: Args) -> Result<()> {
    let format = args.mode()?;
    let cutoffs = read_cutoffs(&args.cutoffs, format)?;
    let counts = count_hits(&args.tbl, &cutoffs)?;

    info!(
        "{} models with at least one validated annotation",
        counts.len()
    );

    let rows = counts
        .iter()
        .map(|(model, count)| format!("{}\t{}", model, count))
        .collect::<Vec<String>>();
    write_records(COUNTS_HEADER, &rows, &args.output);

    Ok(())
}

/// Load a cutoff table into a mapping keyed by model accession.
///
/// The header row is skipped; a duplicated accession silently keeps the
/// last occurrence.
pub fn read_cutoffs(
    path: &PathBuf,
    format: CutoffFormat,
) -> Result<HashMap<String, Cutoffs>, CutoffError> {
    let reader = BufReader::new(File::open(path)?);
    let mut cutoffs = HashMap::new();

    let mut lines = reader.lines();
    lines.next().transpose()?; // skip header

    for (rownum, line) in lines.enumerate() {
        let line = line?;
        let record = Cutoffs::from_row(&line, rownum, format)?;
        cutoffs.insert(record.accession.clone(), record);
    }

    debug!("Read model cutoffs for {} TIGRFAMs.", cutoffs.len());
    Ok(cutoffs)
}

/// Stream a tbl file and count hits that pass both filter stages,
/// grouped by model name in first-seen order.
pub fn count_hits(
    path: &PathBuf,
    cutoffs: &HashMap<String, Cutoffs>,
) -> Result<AnnotationCounts> {
    let reader = BufReader::new(File::open(path)?);
    let mut counts = AnnotationCounts::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with(COMMENT_CHAR) {
            continue;
        }

        let hit = Hit::parse(&line).with_context(|| format!("on tbl line {}", lineno + 1))?;

        if !passes_membership(&hit, cutoffs) {
            continue;
        }
        if passes_threshold(&hit, cutoffs) {
            counts.increment(&hit.query_name);
        }
    }

    Ok(counts)
}

/// First filter stage: the hit's model must be present in the cutoff
/// table. Result streams routinely reference superseded model families.
fn passes_membership(hit: &Hit, cutoffs: &HashMap<String, Cutoffs>) -> bool {
    if cutoffs.contains_key(&hit.query_name) {
        true
    } else {
        warn!("No cutoffs found for {}. Skipping...", hit.query_name);
        false
    }
}

/// Second filter stage: a hit is a validated annotation iff its domain
/// score strictly exceeds the model's trusted-domain cutoff.
fn passes_threshold(hit: &Hit, cutoffs: &HashMap<String, Cutoffs>) -> bool {
    let model = cutoffs.get(&hit.query_name).unwrap_or_else(|| {
        panic!(
            "cutoff lookup failed for {} after the membership filter",
            hit.query_name
        )
    });

    hit.domain_score > model.trusted_domain
}

/// Per-model counter that remembers first-seen order.
#[derive(Debug, Default)]
pub struct AnnotationCounts {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl AnnotationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, model: &str) {
        match self.counts.get_mut(model) {
            Some(count) => *count += 1,
            None => {
                self.order.push(model.to_string());
                self.counts.insert(model.to_string(), 1);
            }
        }
    }

    pub fn get(&self, model: &str) -> Option<u64> {
        self.counts.get(model).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(move |model| (model.as_str(), self.counts[model]))
    }
}
