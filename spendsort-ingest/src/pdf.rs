//! PDF statement loading via `pdf_extract`.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use spendsort_core::Transaction;

use crate::parsers::parse_occu_checking_pages;

/// Extract the text of every page, in page order.
///
/// Pages without a text layer come back as empty strings.
pub fn extract_pages(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| anyhow!("extracting text from {}: {e}", path.display()))?;
    log::debug!("extracted {} page(s) from {}", pages.len(), path.display());
    Ok(pages)
}

/// Read an OCCU statement PDF and return its checking transactions.
pub fn parse_occu_statement_pdf(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let pages = extract_pages(path)?;
    let txns = parse_occu_checking_pages(&pages)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("parsed {} transactions from {}", txns.len(), path.display());
    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pdf_is_an_error() {
        let err = parse_occu_statement_pdf("/nonexistent/statement.pdf").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/statement.pdf"));
    }
}
