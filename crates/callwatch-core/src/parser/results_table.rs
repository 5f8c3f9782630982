//! Results-table parser for the availability page
//!
//! The upstream service renders matching callsigns in the first HTML table
//! of the response; when nothing matches, the page comes back with no table
//! at all. The scan keeps those two outcomes apart as an explicit tag so
//! callers never have to inspect error messages to tell them apart.

use scraper::{Html, Selector};

use crate::error::{CallwatchError, Result};

/// Outcome of scanning a results page for the callsign table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableScan {
    /// The page contains no results table: zero callsigns are available
    Empty,
    /// Cell values of the first table, row-major order, duplicates preserved
    Rows(Vec<String>),
}

impl TableScan {
    /// Flatten the scan into a callsign list, empty for [`TableScan::Empty`]
    pub fn into_call_signs(self) -> Vec<String> {
        match self {
            TableScan::Empty => Vec::new(),
            TableScan::Rows(call_signs) => call_signs,
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CallwatchError::Parse(format!("invalid selector: {e:?}")))
}

/// Scan `html` for the first results table and flatten it into callsigns
///
/// Cells are read in row-major order across all rows and columns. Header
/// cells (`<th>`) are skipped, matching the upstream page where only data
/// rows use `<td>`; cell text is trimmed and passed through verbatim with
/// no deduplication or format validation.
///
/// # Arguments
/// * `html` - Raw HTML string of the results page
///
/// # Returns
/// [`TableScan::Empty`] when the page has no table element, otherwise
/// [`TableScan::Rows`] with at least one callsign
///
/// # Errors
/// `Parse` if a table is present but yields no data cells
pub fn scan_results_table(html: &str) -> Result<TableScan> {
    let document = Html::parse_document(html);

    let table_selector = selector("table")?;
    let Some(table) = document.select(&table_selector).next() else {
        return Ok(TableScan::Empty);
    };

    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let mut call_signs = Vec::new();
    for row in table.select(&row_selector) {
        for cell in row.select(&cell_selector) {
            let text = cell.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                call_signs.push(text);
            }
        }
    }

    // A table with no usable cells is structurally unexpected; the upstream
    // page omits the table entirely when nothing is available.
    if call_signs.is_empty() {
        return Err(CallwatchError::Parse(
            "results table contains no data cells".to_string(),
        ));
    }

    Ok(TableScan::Rows(call_signs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_column_rows_in_order() {
        let html = r#"
        <html>
        <body>
        <table>
            <tr><td>VE3AB</td></tr>
            <tr><td>VE3CD</td></tr>
        </table>
        </body>
        </html>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(
            scan,
            TableScan::Rows(vec!["VE3AB".to_string(), "VE3CD".to_string()])
        );
    }

    #[test]
    fn test_scan_multi_column_row_major_order() {
        let html = r#"
        <table>
            <tr><td>VE3AB</td><td>VE3CD</td></tr>
            <tr><td>VE3EF</td><td>VE3GH</td></tr>
        </table>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(
            scan,
            TableScan::Rows(vec![
                "VE3AB".to_string(),
                "VE3CD".to_string(),
                "VE3EF".to_string(),
                "VE3GH".to_string(),
            ])
        );
    }

    #[test]
    fn test_scan_no_table_is_empty_not_error() {
        let html = r#"
        <html>
        <body>
        <p>No matching call signs were found.</p>
        </body>
        </html>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(scan, TableScan::Empty);
    }

    #[test]
    fn test_scan_skips_header_cells() {
        let html = r#"
        <table>
            <tr><th>Available call signs</th></tr>
            <tr><td>VA3XY</td></tr>
        </table>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(scan, TableScan::Rows(vec!["VA3XY".to_string()]));
    }

    #[test]
    fn test_scan_preserves_duplicates() {
        let html = r#"
        <table>
            <tr><td>VE3AB</td></tr>
            <tr><td>VE3AB</td></tr>
        </table>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(
            scan,
            TableScan::Rows(vec!["VE3AB".to_string(), "VE3AB".to_string()])
        );
    }

    #[test]
    fn test_scan_trims_cell_whitespace() {
        let html = "<table><tr><td>  VE3AB \u{a0}</td></tr></table>";

        let scan = scan_results_table(html).unwrap();
        assert_eq!(scan, TableScan::Rows(vec!["VE3AB".to_string()]));
    }

    #[test]
    fn test_scan_only_first_table_is_read() {
        let html = r#"
        <table><tr><td>VE3AB</td></tr></table>
        <table><tr><td>NAVIGATION</td></tr></table>
        "#;

        let scan = scan_results_table(html).unwrap();
        assert_eq!(scan, TableScan::Rows(vec!["VE3AB".to_string()]));
    }

    #[test]
    fn test_scan_cell_less_table_is_parse_error() {
        let html = "<html><body><table></table></body></html>";

        let result = scan_results_table(html);
        match result {
            Err(CallwatchError::Parse(msg)) => {
                assert!(msg.contains("no data cells"));
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_scan_header_only_table_is_parse_error() {
        let html = "<table><tr><th>Available call signs</th></tr></table>";

        let result = scan_results_table(html);
        assert!(matches!(result, Err(CallwatchError::Parse(_))));
    }

    #[test]
    fn test_into_call_signs_empty() {
        assert!(TableScan::Empty.into_call_signs().is_empty());
    }

    #[test]
    fn test_into_call_signs_rows() {
        let scan = TableScan::Rows(vec!["VE3AB".to_string()]);
        assert_eq!(scan.into_call_signs(), vec!["VE3AB".to_string()]);
    }
}
