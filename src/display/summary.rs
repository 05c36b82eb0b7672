//! Summary and settings display formatting

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::Currency;
use crate::reports::CategorySummary;

/// Format a category summary with gross income, grand total and savings
pub fn format_category_summary(summary: &CategorySummary) -> String {
    let symbol = summary.currency.symbol();
    let mut output = String::new();

    output.push_str(&format!("Summary for {}:\n", summary.currency));
    output.push_str(&format!("{:<20}{:>15}  {:>11}\n", "Category", "Total", "Percentage"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    if summary.is_empty() {
        output.push_str("(no spending recorded)\n");
    }
    for row in &summary.categories {
        output.push_str(&format!(
            "{:<20}{}{:>14.2} {:>10.2} %\n",
            row.category.as_str(),
            symbol,
            row.total,
            row.percentage
        ));
    }

    output.push_str(&"-".repeat(48));
    output.push('\n');
    output.push_str(&format!(
        "{:<20}{}{:>14.2}\n",
        "Gross Income", symbol, summary.gross_income
    ));
    output.push_str(&format!(
        "{:<20}{}{:>14.2} {:>10.2} %\n",
        "Grand Total", symbol, summary.grand_total, summary.grand_total_percentage
    ));
    output.push_str(&format!(
        "{:<20}{}{:>14.2} {:>10.2} %\n",
        "Savings", symbol, summary.savings, summary.savings_percentage
    ));

    output
}

/// Format both incomes and their sum
pub fn format_incomes(ledger: &Ledger, settings: &Settings) -> String {
    let currency = settings.settlement_currency;
    format!(
        "{:<20}{}\n{:<20}{}\n{:<20}{}\n",
        format!("{} income:", settings.first_earner),
        currency.format_amount(ledger.income_a()),
        format!("{} income:", settings.second_earner),
        currency.format_amount(ledger.income_b()),
        "Gross income:",
        currency.format_amount(ledger.gross_income()),
    )
}

/// Format the exchange rate as `1 GBP = x USD`
pub fn format_exchange_rate(rate: f64) -> String {
    format!("1 {} = {} {}\n", Currency::Gbp, rate, Currency::Usd)
}
