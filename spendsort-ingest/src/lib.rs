//! spendsort-ingest: statement ingestion (PDF text) and bank-specific parsers.

pub mod parsers;
pub mod pdf;
pub mod section;

pub use parsers::{parse_occu_checking_pages, parse_occu_checking_text, LineParser};
pub use pdf::{extract_pages, parse_occu_statement_pdf};
pub use section::{SectionFilter, SectionMarkers, PACIFIC_CHECKING};
