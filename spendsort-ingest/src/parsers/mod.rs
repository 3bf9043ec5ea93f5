//! Bank-specific statement text parsers.

pub mod occu_checking;

pub use occu_checking::{parse_occu_checking_pages, parse_occu_checking_text, LineParser};
