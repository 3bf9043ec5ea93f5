//! spendsort-finance: Discover CSV categorization, CSV export, and spending summaries

pub mod discover_parser;
pub mod export;
pub mod summary;

pub use discover_parser::{categorize_csv, parse_discover_csv, CategorizedTable};
pub use export::{write_table, write_transactions};
pub use summary::{CategorySummary, SpendingSummary, StatementPeriod};
