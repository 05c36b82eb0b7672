//! Entry service
//!
//! Shell-side policy on top of the ledger: amounts must be positive, amounts
//! are converted into the settlement currency before being stored, and a
//! description is generated when none is given. The ledger itself applies
//! none of these rules.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{convert, Category, Currency, EntryId};

/// Input for recording or amending an entry
#[derive(Debug, Clone)]
pub struct EntryInput {
    /// Amount in `currency`, before settlement conversion
    pub amount: f64,
    pub category: Category,
    pub currency: Currency,
    pub description: Option<String>,
}

impl EntryInput {
    pub fn new(amount: f64, category: Category, currency: Currency) -> Self {
        Self {
            amount,
            category,
            currency,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service for entry management
pub struct EntryService<'a> {
    ledger: &'a mut Ledger,
    settlement: Currency,
}

impl<'a> EntryService<'a> {
    /// Create a service storing entries in `settlement`
    pub fn new(ledger: &'a mut Ledger, settlement: Currency) -> Self {
        Self { ledger, settlement }
    }

    /// Record a new entry, returning its id
    pub fn record(&mut self, input: EntryInput) -> LedgerResult<EntryId> {
        let (description, amount) = self.settle(&input)?;
        Ok(self
            .ledger
            .add_entry(description, amount, input.category, self.settlement))
    }

    /// Replace an existing entry's fields
    pub fn amend(&mut self, id: EntryId, input: EntryInput) -> LedgerResult<()> {
        let (description, amount) = self.settle(&input)?;
        if self
            .ledger
            .modify_entry(id, description, amount, input.category, self.settlement)
        {
            Ok(())
        } else {
            Err(LedgerError::entry_not_found(id.to_string()))
        }
    }

    /// Remove an entry
    pub fn remove(&mut self, id: EntryId) -> LedgerResult<()> {
        if self.ledger.delete_entry(id) {
            Ok(())
        } else {
            Err(LedgerError::entry_not_found(id.to_string()))
        }
    }

    fn settle(&self, input: &EntryInput) -> LedgerResult<(String, f64)> {
        validate_amount(input.amount)?;

        let description = match input.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => default_description(input.category, input.amount, input.currency),
        };
        let amount = convert(
            input.amount,
            self.ledger.exchange_rate(),
            input.currency,
            self.settlement,
        );

        Ok((description, amount))
    }
}

/// Generated description, e.g. `grocery_12.50_USD`
pub fn default_description(category: Category, amount: f64, currency: Currency) -> String {
    format!(
        "{}_{:.2}_{}",
        category.as_str().to_lowercase(),
        amount,
        currency.code()
    )
}

fn validate_amount(amount: f64) -> LedgerResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidArgument(format!(
            "Amount must be a positive number, got {}",
            amount
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_converts_into_settlement_currency() {
        let mut ledger = Ledger::new();
        ledger.set_exchange_rate(1.25).unwrap();

        let id = EntryService::new(&mut ledger, Currency::Gbp)
            .record(EntryInput::new(12.5, Category::Grocery, Currency::Usd))
            .unwrap();

        let entry = ledger.get(id).unwrap();
        assert_eq!(entry.currency, Currency::Gbp);
        assert!((entry.amount - 10.0).abs() < 1e-9);
        assert_eq!(entry.description, "grocery_12.50_USD");
    }

    #[test]
    fn test_record_keeps_given_description() {
        let mut ledger = Ledger::new();

        let id = EntryService::new(&mut ledger, Currency::Gbp)
            .record(EntryInput::new(800.0, Category::Housing, Currency::Gbp).description("Rent"))
            .unwrap();

        let entry = ledger.get(id).unwrap();
        assert_eq!(entry.description, "Rent");
        assert_eq!(entry.amount, 800.0);
    }

    #[test]
    fn test_record_rejects_non_positive_amounts() {
        let mut ledger = Ledger::new();
        let mut service = EntryService::new(&mut ledger, Currency::Gbp);

        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = service
                .record(EntryInput::new(bad, Category::Food, Currency::Gbp))
                .unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert_eq!(ledger.entry_count(), 0);
    }

    #[test]
    fn test_amend_and_remove() {
        let mut ledger = Ledger::new();
        let mut service = EntryService::new(&mut ledger, Currency::Usd);
        let id = service
            .record(EntryInput::new(10.0, Category::Food, Currency::Usd))
            .unwrap();

        let museum = EntryInput::new(20.0, Category::Tourism, Currency::Usd).description("Museum");
        service.amend(id, museum).unwrap();
        assert!(service
            .amend(EntryId::new(9), EntryInput::new(1.0, Category::Food, Currency::Usd))
            .unwrap_err()
            .is_not_found());

        service.remove(id).unwrap();
        assert!(service.remove(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_default_description() {
        assert_eq!(
            default_description(Category::Kittens, 3.0, Currency::Gbp),
            "kittens_3.00_GBP"
        );
    }
}
