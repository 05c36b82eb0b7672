//! Currency codes and the single GBP/USD conversion path

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Default GBP to USD multiplier
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.38;

/// A supported currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    const ALL: [Currency; 2] = [Currency::Gbp, Currency::Usd];

    /// All currencies in declaration order
    pub fn all() -> &'static [Currency] {
        &Self::ALL
    }

    /// Three-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gbp => "GBP",
            Self::Usd => "USD",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Gbp => "£",
            Self::Usd => "$",
        }
    }

    /// Parse a currency from its code or lower-cased code
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| {
                let code = c.code();
                s == code || s == code.to_lowercase()
            })
            .ok_or_else(|| LedgerError::invalid_currency(s))
    }

    /// Format an amount with this currency's symbol, two decimal places
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.symbol(), amount.abs())
        } else {
            format!("{}{:.2}", self.symbol(), amount)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert an amount between currencies.
///
/// `rate` is the GBP to USD multiplier: GBP→USD multiplies, USD→GBP divides.
/// Same-currency conversion returns the amount untouched.
pub fn convert(amount: f64, rate: f64, from: Currency, to: Currency) -> f64 {
    match (from, to) {
        (Currency::Gbp, Currency::Usd) => amount * rate,
        (Currency::Usd, Currency::Gbp) => amount / rate,
        _ => amount,
    }
}
