//! Core data models for the family ledger
//!
//! This module contains the closed category and currency enumerations, the
//! entry record, and its identifier.

pub mod category;
pub mod currency;
pub mod entry;
pub mod ids;

pub use category::Category;
pub use currency::{convert, Currency, DEFAULT_EXCHANGE_RATE};
pub use entry::{parse_timestamp, Entry, TIMESTAMP_FORMAT};
pub use ids::EntryId;
