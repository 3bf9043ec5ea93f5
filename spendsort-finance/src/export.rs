//! Write categorized transactions as CSV (no index column).

use std::path::Path;

use anyhow::{Context, Result};
use spendsort_core::Transaction;

use crate::discover_parser::CategorizedTable;

pub const TRANSACTION_HEADERS: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// Write statement transactions with a `Date,Description,Amount,Category`
/// header. The header is written even when there are no rows.
pub fn write_transactions(path: impl AsRef<Path>, txns: &[Transaction]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(TRANSACTION_HEADERS)
        .with_context(|| format!("writing {}", path.display()))?;
    for txn in txns {
        wtr.serialize(txn)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("writing {}", path.display()))?;

    log::info!("wrote {} transactions to {}", txns.len(), path.display());
    Ok(())
}

/// Write a categorized CSV table back out, header first.
pub fn write_table(path: impl AsRef<Path>, table: &CategorizedTable) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(table.headers())
        .with_context(|| format!("writing {}", path.display()))?;
    for row in table.rows() {
        wtr.write_record(row)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("writing {}", path.display()))?;

    log::info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
