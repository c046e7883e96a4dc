/// Cutoff table flavors understood by fam-count.
///
/// The legacy format is the five-column table produced by fam-info;
/// the annotation format is the wide table produced by fam-fetch, where
/// the four thresholds sit in columns 4-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffFormat {
    Legacy,
    Annotation,
}

/// How threshold parse failures are treated at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// any unparseable threshold aborts the whole load
    Strict,
    /// unparseable thresholds are replaced with [`crate::SENTINEL_CUTOFF`]
    Tolerant,
}

impl CutoffFormat {
    pub fn policy(&self) -> ParsePolicy {
        match self {
            CutoffFormat::Legacy => ParsePolicy::Strict,
            CutoffFormat::Annotation => ParsePolicy::Tolerant,
        }
    }
}

impl std::str::FromStr for CutoffFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(CutoffFormat::Legacy),
            "annotation" => Ok(CutoffFormat::Annotation),
            _ => Err(format!(
                "unknown cutoff table format: {} [expected: legacy|annotation]",
                s
            )),
        }
    }
}
