//! Categorize Discover CSV statement exports.
//!
//! Discover exports look like:
//! Trans. Date,Post Date,Description,Amount,Category
//!
//! Every column and row is kept as-is. The `Category` column is filled from
//! the description keywords, replacing Discover's own category when present.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use spendsort_core::{categorize, Category};

pub const DESCRIPTION_COLUMN: &str = "Description";
pub const CATEGORY_COLUMN: &str = "Category";
pub const AMOUNT_COLUMN: &str = "Amount";

/// A CSV table with a keyword-derived category per row.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    categories: Vec<Category>,
}

impl CategorizedTable {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Category of each row, in row order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Cell value by column name
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Categorize a CSV read from any reader.
pub fn categorize_csv<R: Read>(reader: R) -> Result<CategorizedTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let source_headers = rdr.headers().context("reading CSV header")?.clone();
    let desc_idx = source_headers
        .iter()
        .position(|h| h.trim() == DESCRIPTION_COLUMN)
        .with_context(|| format!("CSV has no {DESCRIPTION_COLUMN:?} column"))?;
    let existing_cat_idx = source_headers
        .iter()
        .position(|h| h.trim() == CATEGORY_COLUMN);

    let mut headers = source_headers.clone();
    if existing_cat_idx.is_none() {
        headers.push_field(CATEGORY_COLUMN);
    }
    let width = source_headers.len();

    let mut rows = Vec::new();
    let mut categories = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading CSV row {}", line + 1))?;
        if record.len() > width {
            bail!(
                "CSV row {} has {} fields, header has {}",
                line + 1,
                record.len(),
                width
            );
        }
        let category = categorize(record.get(desc_idx).unwrap_or(""));

        let mut row = StringRecord::new();
        for i in 0..width {
            match existing_cat_idx {
                Some(cat_idx) if cat_idx == i => row.push_field(category.label()),
                _ => row.push_field(record.get(i).unwrap_or("")),
            }
        }
        if existing_cat_idx.is_none() {
            row.push_field(category.label());
        }

        rows.push(row);
        categories.push(category);
    }

    Ok(CategorizedTable {
        headers,
        rows,
        categories,
    })
}

/// Parse and categorize a Discover CSV export.
pub fn parse_discover_csv(path: impl AsRef<Path>) -> Result<CategorizedTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let table = categorize_csv(file).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("categorized {} rows from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCOVER: &str = "\
Trans. Date,Post Date,Description,Amount,Category
09/01/2024,09/01/2024,AMAZON.COM*RT4 SEATTLE WA,23.45,Merchandise
09/02/2024,09/03/2024,BOBA GUYS IRVINE,6.50,Restaurants
09/05/2024,09/05/2024,INTERNET PAYMENT - THANK YOU,-300.00,Payments and Credits
09/07/2024,09/08/2024,COSTCO WHSE #0480,88.12,Warehouse Clubs
";

    #[test]
    fn test_replaces_existing_category_column() {
        let table = categorize_csv(DISCOVER.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.headers().len(), 5);
        assert_eq!(table.get(0, CATEGORY_COLUMN), Some("Shopping"));
        assert_eq!(table.get(1, CATEGORY_COLUMN), Some("Food & Beverage"));
        assert_eq!(table.get(2, CATEGORY_COLUMN), Some("Utilities & Bills"));
        assert_eq!(table.get(3, CATEGORY_COLUMN), Some("Other"));
    }

    #[test]
    fn test_preserves_other_columns_and_order() {
        let table = categorize_csv(DISCOVER.as_bytes()).unwrap();
        assert_eq!(table.get(0, "Trans. Date"), Some("09/01/2024"));
        assert_eq!(table.get(2, AMOUNT_COLUMN), Some("-300.00"));
        assert_eq!(table.get(3, DESCRIPTION_COLUMN), Some("COSTCO WHSE #0480"));
        assert_eq!(
            table.categories(),
            &[
                Category::Shopping,
                Category::FoodAndBeverage,
                Category::UtilitiesAndBills,
                Category::Other
            ]
        );
    }

    #[test]
    fn test_appends_category_when_missing() {
        let csv = "Date,Description,Amount\n01/02/24,Target T-1234,19.99\n";
        let table = categorize_csv(csv.as_bytes()).unwrap();
        let headers: Vec<&str> = table.headers().iter().collect();
        assert_eq!(headers, vec!["Date", "Description", "Amount", "Category"]);
        assert_eq!(table.get(0, CATEGORY_COLUMN), Some("Target"));
    }

    #[test]
    fn test_empty_description_is_other() {
        let csv = "Date,Description,Amount\n01/02/24,,19.99\n01/03/24\n";
        let table = categorize_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.categories(), &[Category::Other, Category::Other]);
        assert_eq!(table.rows()[1].len(), 4);
    }

    #[test]
    fn test_row_wider_than_header_is_an_error() {
        let csv = "Date,Description,Amount\n01/02/24,Coffee,3.50\n01/03/24,Tea,4.00,EXTRA,MORE\n";
        let err = categorize_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "CSV row 2 has 5 fields, header has 3");
    }

    #[test]
    fn test_missing_description_column_is_an_error() {
        let csv = "Date,Memo,Amount\n01/02/24,Coffee,3.50\n";
        let err = categorize_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Description"));
    }

    #[test]
    fn test_header_only() {
        let table = categorize_csv("Date,Description,Amount\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 4);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = parse_discover_csv("/nonexistent/discover.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/discover.csv"));
    }
}
