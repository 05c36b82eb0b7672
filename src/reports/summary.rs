//! Category Summary Report
//!
//! Totals per category in one currency, measured against the household's
//! gross income.

use crate::ledger::Ledger;
use crate::models::{Category, Currency};

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    /// Percentage of gross income
    pub percentage: f64,
}

/// Category summary for a single currency
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Currency the totals are expressed in
    pub currency: Currency,
    /// Categories with a non-zero total, in declaration order
    pub categories: Vec<CategoryTotal>,
    /// Sum of both incomes
    pub gross_income: f64,
    /// Sum of all category totals
    pub grand_total: f64,
    /// Percentage of gross income spent
    pub grand_total_percentage: f64,
    /// Gross income minus grand total
    pub savings: f64,
    /// Percentage of gross income saved
    pub savings_percentage: f64,
}

impl CategorySummary {
    /// Summarise `ledger` for entries held in `currency`
    pub fn generate(ledger: &Ledger, currency: Currency) -> Self {
        let gross_income = ledger.gross_income();
        let percentage = |amount: f64| {
            if gross_income > 0.0 {
                amount / gross_income * 100.0
            } else {
                0.0
            }
        };

        let categories: Vec<CategoryTotal> = Category::all()
            .iter()
            .map(|&category| (category, ledger.total_by_category(category, currency)))
            .filter(|(_, total)| *total != 0.0)
            .map(|(category, total)| CategoryTotal {
                category,
                total,
                percentage: percentage(total),
            })
            .collect();

        let grand_total: f64 = categories.iter().map(|c| c.total).sum();
        let savings = gross_income - grand_total;

        Self {
            currency,
            categories,
            gross_income,
            grand_total,
            grand_total_percentage: percentage(grand_total),
            savings,
            savings_percentage: percentage(savings),
        }
    }

    /// Whether any category has spending
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_summary_totals() {
        let mut ledger = Ledger::new();
        ledger.set_income_a(3000.0).unwrap();
        ledger.set_income_b(1000.0).unwrap();
        ledger.add_entry("Rent", 800.0, Category::Housing, Currency::Gbp);
        ledger.add_entry("Milk", 2.5, Category::Grocery, Currency::Gbp);
        ledger.add_entry("Eggs", 7.5, Category::Grocery, Currency::Gbp);
        ledger.add_entry("Diner", 40.0, Category::Food, Currency::Usd);

        let summary = CategorySummary::generate(&ledger, Currency::Gbp);

        let cats: Vec<Category> = summary.categories.iter().map(|c| c.category).collect();
        assert_eq!(cats, vec![Category::Grocery, Category::Housing]);
        assert!(approx(summary.categories[0].total, 10.0));
        assert!(approx(summary.categories[1].percentage, 20.0));
        assert!(approx(summary.gross_income, 4000.0));
        assert!(approx(summary.grand_total, 810.0));
        assert!(approx(summary.savings, 3190.0));
        assert!(approx(summary.savings_percentage, 79.75));
    }

    #[test]
    fn test_zero_income_gives_zero_percentages() {
        let mut ledger = Ledger::new();
        ledger.set_income_a(0.0).unwrap();
        ledger.set_income_b(0.0).unwrap();
        ledger.add_entry("Rent", 800.0, Category::Housing, Currency::Gbp);

        let summary = CategorySummary::generate(&ledger, Currency::Gbp);

        assert_eq!(summary.categories[0].percentage, 0.0);
        assert_eq!(summary.grand_total_percentage, 0.0);
        assert_eq!(summary.savings, -800.0);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        let summary = CategorySummary::generate(&ledger, Currency::Usd);

        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, 0.0);
        assert_eq!(summary.savings, ledger.gross_income());
    }
}
