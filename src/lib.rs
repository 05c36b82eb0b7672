//! Family Ledger - a household budget ledger with CSV persistence
//!
//! Records dated spending entries tagged with a category and currency,
//! aggregates totals per category, and round-trips the whole ledger through a
//! CSV file with an embedded metadata block.
//!
//! # Architecture
//!
//! - `models`: categories, currencies, entries and their ids
//! - `ledger`: the in-memory ledger owning all entries and settings
//! - `storage`: CSV codec and atomic file writes
//! - `services`: shell-side policy (positive amounts, settlement conversion)
//! - `reports` / `display`: category summary and terminal formatting
//! - `config`: paths and user settings
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```
//! use family_ledger::ledger::Ledger;
//! use family_ledger::models::{Category, Currency};
//!
//! let mut ledger = Ledger::new();
//! let id = ledger.add_entry("Rent", 800.0, Category::Housing, Currency::Gbp);
//! assert_eq!(id.to_string(), "1");
//! assert_eq!(ledger.total_by_category(Category::Housing, Currency::Gbp), 800.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
