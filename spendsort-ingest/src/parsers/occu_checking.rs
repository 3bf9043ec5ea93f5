//! Orange County Credit Union statement parser (text)
//!
//! Only the "Pacific Checking #0040" block is read. Rows look like:
//!   PACIFIC CHECKING #0040
//!   01/02/24     El Pollo Loco Truck          -12.34
//!   01/05/24     Deposit Dividend              0.42
//!   PACIFIC SAVINGS #0010
//!
//! Columns are separated by runs of two or more spaces. A description with
//! an internal double space is split too; the middle pieces are re-joined
//! with one space, which loses the original spacing.

use anyhow::Result;
use regex::Regex;
use spendsort_core::{categorize, Transaction};

use crate::section::{SectionFilter, PACIFIC_CHECKING};

/// Splits and validates single transaction lines.
#[derive(Debug, Clone)]
pub struct LineParser {
    date_re: Regex,
    column_re: Regex,
    amount_re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            date_re: Regex::new(r"\d{2}/\d{2}/\d{2}")?,
            column_re: Regex::new(r"\s{2,}")?,
            amount_re: Regex::new(r"^-?\d+(\.\d{2})?$")?,
        })
    }

    /// True if the line carries an MM/DD/YY-shaped token anywhere.
    pub fn has_date(&self, line: &str) -> bool {
        self.date_re.is_match(line)
    }

    /// Parse a line already known to sit inside the section and carry a date.
    ///
    /// Returns `None` for lines with fewer than three columns or with a last
    /// column that is not an amount.
    pub fn parse_line(&self, line: &str) -> Option<Transaction> {
        let parts: Vec<&str> = self.column_re.split(line.trim()).collect();
        log::debug!("split line into {:?}", parts);

        if parts.len() < 3 {
            log::debug!("skipping line with {} column(s): {line}", parts.len());
            return None;
        }

        let date = parts[0];
        let amount = parts[parts.len() - 1];
        let description = parts[1..parts.len() - 1].join(" ");

        if !self.amount_re.is_match(amount) {
            log::debug!("skipping line with invalid amount {amount:?}: {line}");
            return None;
        }

        let category = categorize(&description);
        Some(Transaction::new(date, description, amount, category))
    }
}

/// Parse the checking section out of page texts, in page order.
///
/// Pages with no text contribute nothing. A statement without the section
/// yields an empty list.
pub fn parse_occu_checking_pages<I>(pages: I) -> Result<Vec<Transaction>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parser = LineParser::new()?;
    let mut filter = SectionFilter::new(PACIFIC_CHECKING);
    let mut out = Vec::new();

    for (page_idx, page) in pages.into_iter().enumerate() {
        let text = page.as_ref();
        if text.trim().is_empty() {
            log::debug!("page {} has no text", page_idx + 1);
            continue;
        }

        for line in text.split('\n') {
            log::debug!("raw line: {line}");

            if !filter.observe(line) || !parser.has_date(line) {
                continue;
            }

            if let Some(txn) = parser.parse_line(line) {
                out.push(txn);
            }
        }
    }

    log::debug!("parsed {} checking transactions", out.len());
    Ok(out)
}

/// Parse a single block of extracted statement text.
pub fn parse_occu_checking_text(text: &str) -> Result<Vec<Transaction>> {
    parse_occu_checking_pages([text])
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendsort_core::Category;

    #[test]
    fn test_parse_line_basic() {
        let parser = LineParser::new().unwrap();
        let txn = parser.parse_line("01/02/24   El Pollo Loco Truck   -12.34").unwrap();
        assert_eq!(txn.date(), "01/02/24");
        assert_eq!(txn.description(), "El Pollo Loco Truck");
        assert_eq!(txn.amount(), "-12.34");
        assert_eq!(txn.category(), Category::FoodAndBeverage);
    }

    #[test]
    fn test_parse_line_rejects_bad_amount() {
        let parser = LineParser::new().unwrap();
        assert!(parser.parse_line("01/02/24   Bad Amount   12.3x").is_none());
        assert!(parser.parse_line("01/02/24   Thousands   1,200.00").is_none());
        assert!(parser.parse_line("01/02/24   One decimal   12.3").is_none());
    }

    #[test]
    fn test_parse_line_needs_three_columns() {
        let parser = LineParser::new().unwrap();
        assert!(parser.parse_line("01/02/24   12.34").is_none());
        assert!(parser.parse_line("01/02/24 Coffee 12.34").is_none());
    }

    #[test]
    fn test_parse_line_whole_dollar_amount() {
        let parser = LineParser::new().unwrap();
        let txn = parser.parse_line("  01/09/24    ATM Withdrawal    -40  ").unwrap();
        assert_eq!(txn.amount(), "-40");
        assert_eq!(txn.category(), Category::Transportation);
    }

    #[test]
    fn test_parse_line_joins_middle_columns() {
        let parser = LineParser::new().unwrap();
        let txn = parser
            .parse_line("01/04/24    Amazon  Mktp   Order 55    -23.10")
            .unwrap();
        assert_eq!(txn.description(), "Amazon Mktp Order 55");
        assert_eq!(txn.category(), Category::Shopping);
    }

    #[test]
    fn test_has_date() {
        let parser = LineParser::new().unwrap();
        assert!(parser.has_date("01/02/24   Coffee   3.50"));
        assert!(parser.has_date("Posted 12/31/23"));
        assert!(!parser.has_date("1/2/24   Coffee   3.50"));
        assert!(!parser.has_date("Balance Forward   100.00"));
    }

    #[test]
    fn test_parse_text_section_only() {
        let text = "noise\nPACIFIC CHECKING #0040\n01/02/24  Coffee Shop  3.50\nPACIFIC SAVINGS\n01/03/24  Groceries  40.00";
        let txns = parse_occu_checking_text(text).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description(), "Coffee Shop");
        assert_eq!(txns[0].amount(), "3.50");
    }

    #[test]
    fn test_no_section_yields_empty() {
        let text = "01/02/24  Coffee Shop  3.50\n01/03/24  Groceries  40.00";
        let txns = parse_occu_checking_text(text).unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_lines_without_date_are_ignored() {
        let text = "Pacific Checking #0040\nBeginning Balance    1,000.00\nWire Fee  Recurring  5.00\n01/02/24  Recurring Internet  -59.99";
        let txns = parse_occu_checking_text(text).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category(), Category::UtilitiesAndBills);
    }
}
