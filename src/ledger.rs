//! In-memory ledger
//!
//! The ledger is the sole owner of entries. It hands out ids from a
//! monotonically increasing counter, keeps entries in insertion order, answers
//! aggregation queries, and holds the ledger-wide settings (exchange rate and
//! the two income figures).
//!
//! The ledger is not internally synchronized. A multi-threaded caller must wrap
//! it in a lock held for the duration of each operation.

use chrono::NaiveDateTime;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Currency, Entry, EntryId, DEFAULT_EXCHANGE_RATE};

/// Default monthly income of the first earner
pub const DEFAULT_INCOME_A: f64 = 4500.0;

/// Default monthly income of the second earner
pub const DEFAULT_INCOME_B: f64 = 3200.0;

/// Owning collection of entries plus ledger-wide settings
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Entry>,
    exchange_rate: f64,
    income_a: f64,
    income_b: f64,
    next_id: EntryId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            income_a: DEFAULT_INCOME_A,
            income_b: DEFAULT_INCOME_B,
            next_id: EntryId::FIRST,
        }
    }
}

impl Ledger {
    /// Create an empty ledger with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry stamped with the current time, returning its id.
    ///
    /// The amount is stored as given, sign and finiteness included; the save
    /// format writes any `f64` back in a form the loader accepts.
    pub fn add_entry(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
    ) -> EntryId {
        let id = self.allocate_id();
        self.entries
            .push(Entry::new(id, description, amount, category, currency));
        tracing::debug!(%id, %category, %currency, amount, "added entry");
        id
    }

    /// Add an entry with an explicit creation timestamp, returning its id
    pub fn add_entry_at(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
        created_at: NaiveDateTime,
    ) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(Entry::with_timestamp(
            id,
            description,
            amount,
            category,
            currency,
            created_at,
        ));
        id
    }

    /// Replace the description, amount, category and currency of an entry.
    ///
    /// Returns `false` without touching anything if no entry has this id.
    pub fn modify_entry(
        &mut self,
        id: EntryId,
        description: impl Into<String>,
        amount: f64,
        category: Category,
        currency: Currency,
    ) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.update(description, amount, category, currency);
                tracing::debug!(%id, "modified entry");
                true
            }
            None => false,
        }
    }

    /// Remove an entry, keeping the order of the rest.
    ///
    /// Returns `false` if no entry has this id.
    pub fn delete_entry(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(%id, "deleted entry");
                true
            }
            None => false,
        }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Entries in one category, in insertion order
    pub fn entries_by_category(&self, category: Category) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Sum of amounts over entries matching both category and currency.
    ///
    /// Entries in other currencies are excluded; no conversion happens here.
    pub fn total_by_category(&self, category: Category, currency: Currency) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.category == category && e.currency == currency)
            .map(|e| e.amount)
            .sum()
    }

    /// Remove every entry and restart ids at 1. Settings are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = EntryId::FIRST;
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The id the next added entry will receive
    pub fn next_id(&self) -> EntryId {
        self.next_id
    }

    /// Set the GBP to USD multiplier. Rejects non-positive and non-finite rates.
    pub fn set_exchange_rate(&mut self, rate: f64) -> LedgerResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(LedgerError::InvalidArgument(format!(
                "Exchange rate must be a positive number, got {}",
                rate
            )));
        }
        self.exchange_rate = rate;
        Ok(())
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    /// Set the first earner's monthly income. Rejects negative and non-finite values.
    pub fn set_income_a(&mut self, income: f64) -> LedgerResult<()> {
        self.income_a = validate_income(income)?;
        Ok(())
    }

    pub fn income_a(&self) -> f64 {
        self.income_a
    }

    /// Set the second earner's monthly income. Rejects negative and non-finite values.
    pub fn set_income_b(&mut self, income: f64) -> LedgerResult<()> {
        self.income_b = validate_income(income)?;
        Ok(())
    }

    pub fn income_b(&self) -> f64 {
        self.income_b
    }

    /// Sum of both incomes
    pub fn gross_income(&self) -> f64 {
        self.income_a + self.income_b
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

fn validate_income(income: f64) -> LedgerResult<f64> {
    if !income.is_finite() || income < 0.0 {
        return Err(LedgerError::InvalidArgument(format!(
            "Income must be a non-negative number, got {}",
            income
        )));
    }
    Ok(income)
}
