//! spendsort-core: transaction types and the keyword categorizer

pub mod categorizer;
pub mod finance;

pub use categorizer::{categorize, CATEGORY_KEYWORDS};
pub use finance::{Category, Transaction};
