use anyhow::{anyhow, bail, Result};
use dashmap::DashSet;
use hashbrown::HashMap;
use log::{info, warn};
use rayon::prelude::*;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use std::time::Duration;

use config::{
    get_progress_bar, par_write_records, ACCESSION_WIDTH, ANNOTATION_KEYS, REQUEST_TIMEOUT,
};

use crate::cli::Args;

/// Download every report page in the id range and flatten the results
/// into the wide annotation table. Failed downloads are logged per
/// model and skipped; row order carries no guarantee.
pub fn fetch_annotations(args: Args) -> Result<()> {
    if args.start > args.end {
        bail!("--start must not be greater than --end");
    }

    let tigrfams = (args.start..=args.end)
        .map(|id| format!("TIGR{:0width$}", id, width = ACCESSION_WIDTH))
        .collect::<Vec<String>>();

    info!(
        "Downloading {} TIGRFAM report pages with {} workers...",
        tigrfams.len(),
        args.workers
    );

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT))
        .build()?;
    let pb = get_progress_bar(tigrfams.len() as u64, "Downloading reports...");
    let rows: DashSet<String> = DashSet::new();

    tigrfams.par_iter().for_each(|tigrfam| {
        match fetch_report(&client, &args.api_endpoint, tigrfam) {
            Ok(row) => {
                rows.insert(row);
            }
            Err(e) => warn!("{} generated an exception: {}", tigrfam, e),
        }

        pb.inc(1);
    });

    pb.finish_and_clear();
    info!("Downloaded {} of {} reports", rows.len(), tigrfams.len());

    let header = ANNOTATION_KEYS.join("\t");
    par_write_records(&header, &rows, &args.output);

    Ok(())
}

/// Fetch one report page and render it as an output row.
fn fetch_report(client: &Client, endpoint: &str, tigrfam: &str) -> Result<String> {
    let html = client
        .get(format!("{}{}", endpoint, tigrfam))
        .send()?
        .error_for_status()?
        .text()?;

    let mut data = parse_report_table(&html)?;
    validate_entries(&mut data, tigrfam);

    Ok(format_row(&data))
}

/// Parse the two-column report table into key -> sanitized value.
///
/// Keys have their spaces replaced with underscores so they line up
/// with [`ANNOTATION_KEYS`].
pub fn parse_report_table(html: &str) -> Result<HashMap<String, String>> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| anyhow!("no report table found"))?;

    let mut columns = HashMap::new();
    for row in table.select(&row_selector) {
        let cells = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<String>>();

        let [key, value] = cells.as_slice() else {
            bail!("malformed report table row: expected 2 cells, found {}", cells.len());
        };

        columns.insert(key.replace(' ', "_"), sanitize_field(value));
    }

    Ok(columns)
}

/// Remove line breaks and other characters that would break the table.
pub fn sanitize_field(text: &str) -> String {
    text.replace(['\r', '\n', '\t', '\u{0008}'], " ")
}

/// Fill the expected keys with empty strings when the report page
/// omitted them; an empty accession falls back to the queried id.
pub fn validate_entries(data: &mut HashMap<String, String>, tigrfam: &str) {
    for key in ANNOTATION_KEYS {
        data.entry(key.to_string()).or_default();
    }

    if data["Accession"].is_empty() {
        data.insert("Accession".to_string(), tigrfam.to_string());
    }
}

fn format_row(data: &HashMap<String, String>) -> String {
    ANNOTATION_KEYS
        .iter()
        .map(|key| data[*key].as_str())
        .collect::<Vec<&str>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_HTML: &str = r#"
        <html><body>
        <table>
          <tr><td>Accession</td><td>TIGR00001</td></tr>
          <tr><td>Name</td><td>rpmE</td></tr>
          <tr><td>Trusted Cutoff</td><td>35.00</td></tr>
          <tr><td>Domain Trusted Cutoff</td><td>35.00</td></tr>
          <tr><td>Comment</td><td>spans
two lines	with a tab</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_parse_report_table() {
        let data = parse_report_table(REPORT_HTML).unwrap();

        assert_eq!(data["Accession"], "TIGR00001");
        assert_eq!(data["Name"], "rpmE");
        assert_eq!(data["Trusted_Cutoff"], "35.00");
        assert_eq!(data["Domain_Trusted_Cutoff"], "35.00");
        assert_eq!(data["Comment"], "spans two lines with a tab");
    }

    #[test]
    fn test_parse_report_table_malformed_row() {
        let html = "<table><tr><td>only one cell</td></tr></table>";
        assert!(parse_report_table(html).is_err());
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(
            sanitize_field("line\r\nbreaks\tand\u{0008}controls"),
            "line  breaks and controls"
        );
    }

    #[test]
    fn test_validate_entries_fills_missing_keys() {
        let mut data = HashMap::new();
        data.insert("Name".to_string(), "rpmE".to_string());

        validate_entries(&mut data, "TIGR00042");

        assert_eq!(data.len(), ANNOTATION_KEYS.len());
        assert_eq!(data["Accession"], "TIGR00042");
        assert_eq!(data["Gene_Symbol"], "");
    }

    #[test]
    fn test_format_row_column_order() {
        let mut data = HashMap::new();
        validate_entries(&mut data, "TIGR00042");
        data.insert("Name".to_string(), "rpmE".to_string());

        let row = format_row(&data);
        let fields = row.split('\t').collect::<Vec<&str>>();

        assert_eq!(fields.len(), ANNOTATION_KEYS.len());
        assert_eq!(fields[0], "TIGR00042");
        assert_eq!(fields[1], "rpmE");
    }
}
