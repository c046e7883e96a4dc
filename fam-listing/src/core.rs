use anyhow::{anyhow, bail, Result};
use log::info;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use std::time::Duration;

use config::{write_records, LISTING_FIELDS, REQUEST_TIMEOUT};

use crate::cli::Args;

/// Download the complete listing page and flatten its table to a TSV.
pub fn parse_listing(args: Args) -> Result<()> {
    info!("Downloading the complete listing from {}...", args.webpage);

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT))
        .build()?;
    let html = client
        .get(&args.webpage)
        .send()?
        .error_for_status()?
        .text()?;

    let mut rows = parse_listing_table(&html)?;
    if rows.is_empty() {
        bail!("no rows found in the listing table");
    }

    let header = rows.remove(0);
    write_records(&header, &rows, &args.output);

    Ok(())
}

/// Extract the first table of the listing page, one tab-joined row per
/// `<tr>`. Row 0 reads `<th>` cells, every other row `<td>` cells.
pub fn parse_listing_table(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let header_selector = Selector::parse("th").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| anyhow!("no table found in the listing page"))?;

    let mut rows = Vec::new();
    for (idx, row) in table.select(&row_selector).enumerate() {
        let selector = if idx == 0 {
            &header_selector
        } else {
            &cell_selector
        };

        let columns = row
            .select(selector)
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<String>>();

        if columns.len() < LISTING_FIELDS {
            bail!(
                "expected {} columns on listing row {}, found {}",
                LISTING_FIELDS,
                idx,
                columns.len()
            );
        }

        rows.push(columns[..LISTING_FIELDS].join("\t"));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_HTML: &str = r#"
        <html><body>
        <table>
          <tr><th>Accession</th><th>Name</th><th>Function</th><th>Mainrole</th><th>Subrole</th></tr>
          <tr><td>TIGR00001</td><td>rpmE</td><td>ribosomal protein bL31</td><td>Protein synthesis</td><td>Ribosomal proteins</td></tr>
          <tr><td>TIGR00002</td><td>S16</td><td>ribosomal protein uS16</td><td>Protein synthesis</td><td>Ribosomal proteins</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_parse_listing_table() {
        let rows = parse_listing_table(LISTING_HTML).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "Accession\tName\tFunction\tMainrole\tSubrole"
        );
        assert_eq!(
            rows[1],
            "TIGR00001\trpmE\tribosomal protein bL31\tProtein synthesis\tRibosomal proteins"
        );
    }

    #[test]
    fn test_parse_listing_table_no_table() {
        assert!(parse_listing_table("<html><body>nothing</body></html>").is_err());
    }

    #[test]
    fn test_parse_listing_table_short_row() {
        let html = "<table><tr><th>a</th><th>b</th><th>c</th><th>d</th><th>e</th></tr>\
                    <tr><td>only</td><td>four</td><td>cells</td><td>here</td></tr></table>";
        assert!(parse_listing_table(html).is_err());
    }
}
