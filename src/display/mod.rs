//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod entry;
pub mod summary;

pub use entry::{format_entry_row, format_entry_table};
pub use summary::{format_category_summary, format_exchange_rate, format_incomes};
