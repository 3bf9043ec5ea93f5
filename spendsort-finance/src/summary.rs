//! Per-category spending totals for statement transactions and CSV tables.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use spendsort_core::{Category, Transaction};

use crate::discover_parser::{CategorizedTable, AMOUNT_COLUMN};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub transaction_count: usize,
    pub total_amount: f64,
    /// Rows whose amount text did not parse as a number
    pub unparsed_amounts: usize,
}

/// Earliest and latest transaction date seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementPeriod {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// Groups categorized amounts into summaries
pub struct SpendingSummary;

impl SpendingSummary {
    /// Group `(category, amount)` pairs. Output follows `Category::ALL` and
    /// leaves out categories with no rows.
    pub fn from_pairs<I>(pairs: I) -> Vec<CategorySummary>
    where
        I: IntoIterator<Item = (Category, Option<f64>)>,
    {
        let mut groups: HashMap<Category, CategorySummary> = HashMap::new();

        for (category, amount) in pairs {
            let entry = groups.entry(category).or_insert_with(|| CategorySummary {
                category,
                transaction_count: 0,
                total_amount: 0.0,
                unparsed_amounts: 0,
            });
            entry.transaction_count += 1;
            match amount {
                Some(a) => entry.total_amount += a,
                None => entry.unparsed_amounts += 1,
            }
        }

        Category::ALL
            .into_iter()
            .filter_map(|c| groups.remove(&c))
            .collect()
    }

    pub fn from_transactions(txns: &[Transaction]) -> Vec<CategorySummary> {
        Self::from_pairs(txns.iter().map(|t| (t.category(), t.amount_value())))
    }

    /// Date span of the transactions whose date parses; `None` if none do.
    pub fn period(txns: &[Transaction]) -> Option<StatementPeriod> {
        let mut dates = txns.iter().filter_map(Transaction::date_naive);
        let first = dates.next()?;
        let (first, last) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(StatementPeriod { first, last })
    }

    /// Uses the table's `Amount` column; tables without one count rows only.
    pub fn from_table(table: &CategorizedTable) -> Vec<CategorySummary> {
        let amount_idx = table.column_index(AMOUNT_COLUMN);
        Self::from_pairs(table.rows().iter().zip(table.categories()).map(|(row, cat)| {
            let amount = amount_idx
                .and_then(|i| row.get(i))
                .and_then(parse_amount);
            (*cat, amount)
        }))
    }
}

/// Accepts "1,234.56", "$12.00" and "(12.00)" as written by bank exports.
fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim().replace([',', '$'], "");
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return inner.trim().parse::<f64>().ok().map(|v| -v);
    }
    s.parse().ok()
}
