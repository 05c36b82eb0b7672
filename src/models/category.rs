//! Spending category
//!
//! Categories form a closed set. Each has a canonical display name which is
//! also its on-disk encoding; parsing accepts that name or its lower-cased form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Grocery,
    Transport,
    Housing,
    Entertainment,
    Tourism,
    Subscriptions,
    Kittens,
    Other,
}

impl Category {
    const ALL: [Category; 9] = [
        Category::Food,
        Category::Grocery,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Tourism,
        Category::Subscriptions,
        Category::Kittens,
        Category::Other,
    ];

    /// All categories in declaration order
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Grocery => "Grocery",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Tourism => "Tourism",
            Self::Subscriptions => "Subscriptions",
            Self::Kittens => "Kittens",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parse a category from its canonical or fully lower-cased name
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| {
                let name = c.as_str();
                s == name || s == name.to_lowercase()
            })
            .ok_or_else(|| LedgerError::invalid_category(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
