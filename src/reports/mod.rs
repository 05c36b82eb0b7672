//! Reports
//!
//! Aggregations computed from the ledger for display.

pub mod summary;

pub use summary::{CategorySummary, CategoryTotal};
