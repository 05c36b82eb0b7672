//! Ledger entry model
//!
//! One recorded spending line. Entries are owned by the ledger; the id and
//! creation timestamp never change after construction.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::currency::Currency;
use super::ids::EntryId;

/// Timestamp layout used for display and persistence
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,

    /// Free text, may contain delimiters and line breaks
    pub description: String,

    /// Amount in `currency`
    pub amount: f64,

    pub category: Category,

    pub currency: Currency,

    /// Creation instant, local time, whole seconds
    created_at: NaiveDateTime,
}

impl Entry {
    /// Create an entry stamped with the current local time
    pub fn new(
        id: EntryId,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
    ) -> Self {
        Self::with_timestamp(id, description, amount, category, currency, now())
    }

    /// Create an entry with an explicit creation timestamp
    pub fn with_timestamp(
        id: EntryId,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            currency,
            created_at: created_at.trunc_subsecs(0),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp_string(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Replace every mutable field at once
    pub fn update(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
    ) {
        self.description = description.into();
        self.amount = amount;
        self.category = category;
        self.currency = currency;
    }
}

/// Parse a persisted `YYYY-MM-DD HH:MM:SS` timestamp
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
