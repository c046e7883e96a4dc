use log::warn;
use thiserror::Error;

use config::{
    CutoffFormat, ParsePolicy, ANNOTATION_CUTOFF_FIELDS, ANNOTATION_THRESHOLD_OFFSET,
    LEGACY_CUTOFF_FIELDS, SENTINEL_CUTOFF,
};

const THRESHOLD_FIELDS: [&str; 4] = [
    "trusted_global",
    "trusted_domain",
    "noise_global",
    "noise_domain",
];

#[derive(Debug, Error)]
pub enum CutoffError {
    #[error("Couldn't parse line {rownum}: {line}")]
    MalformedRow { rownum: usize, line: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum HitError {
    #[error("truncated hit record: missing {field}")]
    Truncated { field: &'static str },
    #[error("cannot parse {field} from '{value}'")]
    Malformed { field: &'static str, value: String },
}

/// Score cutoffs for one TIGRFAM model.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutoffs {
    pub accession: String,
    pub trusted_global: f64,
    pub trusted_domain: f64,
    pub noise_global: f64,
    pub noise_domain: f64,
}

impl Cutoffs {
    /// Parse one data row of a cutoff table.
    ///
    /// The legacy table carries the thresholds in columns 1-4, the
    /// annotation table in columns 4-7; the format also fixes the parse
    /// policy: strict rows abort on any unparseable threshold, tolerant
    /// rows substitute the sentinel and keep going.
    pub fn from_row(line: &str, rownum: usize, format: CutoffFormat) -> Result<Cutoffs, CutoffError> {
        let fields: Vec<&str> = line.split('\t').collect();
        let (min_fields, offset) = match format {
            CutoffFormat::Legacy => (LEGACY_CUTOFF_FIELDS, 1),
            CutoffFormat::Annotation => (ANNOTATION_CUTOFF_FIELDS, ANNOTATION_THRESHOLD_OFFSET),
        };

        if fields.len() < min_fields {
            return Err(CutoffError::MalformedRow {
                rownum,
                line: line.to_string(),
            });
        }

        let accession = fields[0].to_string();
        let mut thresholds = [0.0f64; 4];

        for (i, name) in THRESHOLD_FIELDS.iter().enumerate() {
            let raw = fields[offset + i];
            thresholds[i] = match format.policy() {
                ParsePolicy::Strict => raw.parse::<f64>().map_err(|_| CutoffError::MalformedRow {
                    rownum,
                    line: line.to_string(),
                })?,
                ParsePolicy::Tolerant => match raw.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        warn!(
                            "Could not parse {} from '{}' on line {} for {}. Substituting {}...",
                            name, raw, rownum, accession, SENTINEL_CUTOFF
                        );
                        SENTINEL_CUTOFF
                    }
                },
            };
        }

        Ok(Cutoffs {
            accession,
            trusted_global: thresholds[0],
            trusted_domain: thresholds[1],
            noise_global: thresholds[2],
            noise_domain: thresholds[3],
        })
    }
}

/// One non-comment line of hmmsearch tbl output.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub target: String,
    pub target_accession: String,
    pub query_name: String,
    pub query_accession: String,
    pub full_e_value: f64,
    pub full_score: f64,
    pub full_bias: f64,
    pub domain_e_value: f64,
    pub domain_score: f64,
    pub domain_bias: f64,
    pub exp: f64,
    pub reg: i64,
    pub clu: i64,
    pub ov: i64,
    pub env: i64,
    pub dom: i64,
    pub rep: i64,
    pub inc: i64,
    pub description: String,
}

fn float(field: &'static str, value: &str) -> Result<f64, HitError> {
    value.parse::<f64>().map_err(|_| HitError::Malformed {
        field,
        value: value.to_string(),
    })
}

fn int(field: &'static str, value: &str) -> Result<i64, HitError> {
    value.parse::<i64>().map_err(|_| HitError::Malformed {
        field,
        value: value.to_string(),
    })
}

impl Hit {
    pub fn parse(line: &str) -> Result<Hit, HitError> {
        let mut fields = line.split_whitespace();
        let mut next = |field: &'static str| fields.next().ok_or(HitError::Truncated { field });

        let target = next("target")?.to_string();
        let target_accession = next("target_accession")?.to_string();
        let query_name = next("query_name")?.to_string();
        let query_accession = next("query_accession")?.to_string();
        let full_e_value = float("full_e_value", next("full_e_value")?)?;
        let full_score = float("full_score", next("full_score")?)?;
        let full_bias = float("full_bias", next("full_bias")?)?;
        let domain_e_value = float("domain_e_value", next("domain_e_value")?)?;
        let domain_score = float("domain_score", next("domain_score")?)?;
        let domain_bias = float("domain_bias", next("domain_bias")?)?;
        let exp = float("exp", next("exp")?)?;
        let reg = int("reg", next("reg")?)?;
        let clu = int("clu", next("clu")?)?;
        let ov = int("ov", next("ov")?)?;
        let env = int("env", next("env")?)?;
        let dom = int("dom", next("dom")?)?;
        let rep = int("rep", next("rep")?)?;
        let inc = int("inc", next("inc")?)?;

        // the tbl description column has unpredictable internal spacing;
        // remaining tokens are rejoined without it
        let description = fields.collect::<Vec<&str>>().concat();

        Ok(Hit {
            target,
            target_accession,
            query_name,
            query_accession,
            full_e_value,
            full_score,
            full_bias,
            domain_e_value,
            domain_score,
            domain_bias,
            exp,
            reg,
            clu,
            ov,
            env,
            dom,
            rep,
            inc,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TBL_LINE: &str = "contig_1_42  -  TIGR00001  TIGR00001  1.2e-50  170.3  0.1  \
                            1.4e-50  169.9  0.1  1.1  1  0  0  1  1  1  1  ribosomal protein L35";

    #[test]
    fn test_legacy_row() {
        let row = "TIGR00001\t10.0\t5.0\t8.0\t4.0";
        let cutoffs = Cutoffs::from_row(row, 0, CutoffFormat::Legacy).unwrap();

        assert_eq!(cutoffs.accession, "TIGR00001");
        assert_eq!(cutoffs.trusted_global, 10.0);
        assert_eq!(cutoffs.trusted_domain, 5.0);
        assert_eq!(cutoffs.noise_global, 8.0);
        assert_eq!(cutoffs.noise_domain, 4.0);
    }

    #[test]
    fn test_legacy_row_is_strict() {
        let row = "TIGR00001\t10.0\tnot_a_number\t8.0\t4.0";
        let err = Cutoffs::from_row(row, 3, CutoffFormat::Legacy).unwrap_err();

        match err {
            CutoffError::MalformedRow { rownum, line } => {
                assert_eq!(rownum, 3);
                assert!(line.contains("not_a_number"));
            }
            _ => panic!("expected a malformed row error"),
        }
    }

    #[test]
    fn test_legacy_row_too_short() {
        let row = "TIGR00001\t10.0\t5.0";
        assert!(Cutoffs::from_row(row, 0, CutoffFormat::Legacy).is_err());
    }

    #[test]
    fn test_annotation_row() {
        let row = "TIGR00001\trpmE\tribosomal protein bL31\trpmE\t35.0\t35.0\t28.0\t28.0\tequivalog";
        let cutoffs = Cutoffs::from_row(row, 0, CutoffFormat::Annotation).unwrap();

        assert_eq!(cutoffs.accession, "TIGR00001");
        assert_eq!(cutoffs.trusted_global, 35.0);
        assert_eq!(cutoffs.trusted_domain, 35.0);
        assert_eq!(cutoffs.noise_global, 28.0);
        assert_eq!(cutoffs.noise_domain, 28.0);
    }

    #[test]
    fn test_annotation_row_substitutes_sentinel() {
        let row = "TIGR00042\tname\tfunction\tsymbol\t--\t30.0\t--\t25.0\tequivalog";
        let cutoffs = Cutoffs::from_row(row, 7, CutoffFormat::Annotation).unwrap();

        assert_eq!(cutoffs.trusted_global, SENTINEL_CUTOFF);
        assert_eq!(cutoffs.trusted_domain, 30.0);
        assert_eq!(cutoffs.noise_global, SENTINEL_CUTOFF);
        assert_eq!(cutoffs.noise_domain, 25.0);
    }

    #[test]
    fn test_annotation_row_too_short_is_fatal() {
        let row = "TIGR00042\tname\tfunction\tsymbol\t35.0";
        assert!(Cutoffs::from_row(row, 0, CutoffFormat::Annotation).is_err());
    }

    #[test]
    fn test_hit_parse() {
        let hit = Hit::parse(TBL_LINE).unwrap();

        assert_eq!(hit.target, "contig_1_42");
        assert_eq!(hit.target_accession, "-");
        assert_eq!(hit.query_name, "TIGR00001");
        assert_eq!(hit.full_e_value, 1.2e-50);
        assert_eq!(hit.full_score, 170.3);
        assert_eq!(hit.domain_score, 169.9);
        assert_eq!(hit.exp, 1.1);
        assert_eq!(hit.reg, 1);
        assert_eq!(hit.inc, 1);
        assert_eq!(hit.description, "ribosomalproteinL35");
    }

    #[test]
    fn test_hit_parse_empty_description() {
        let line = "t1 - TIGR00002 - 1e-10 50.0 0.0 1e-10 49.0 0.0 1.0 1 0 0 1 1 1 1";
        let hit = Hit::parse(line).unwrap();

        assert_eq!(hit.description, "");
    }

    #[test]
    fn test_hit_parse_bad_score_is_fatal() {
        let line = "t1 - TIGR00002 - 1e-10 fifty 0.0 1e-10 49.0 0.0 1.0 1 0 0 1 1 1 1 desc";
        let err = Hit::parse(line).unwrap_err();

        match err {
            HitError::Malformed { field, value } => {
                assert_eq!(field, "full_score");
                assert_eq!(value, "fifty");
            }
            _ => panic!("expected a malformed field error"),
        }
    }

    #[test]
    fn test_hit_parse_truncated() {
        let line = "t1 - TIGR00002 -";
        assert!(matches!(
            Hit::parse(line),
            Err(HitError::Truncated { field: "full_e_value" })
        ));
    }
}
