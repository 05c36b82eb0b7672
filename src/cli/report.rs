//! Report CLI commands

use super::Session;
use crate::display::format_category_summary;
use crate::error::LedgerResult;
use crate::reports::CategorySummary;

/// Print the category summary in the settlement currency
pub fn handle_summary(session: &Session) -> LedgerResult<()> {
    let currency = session.settings().settlement_currency;
    let summary = CategorySummary::generate(session.ledger(), currency);
    print!("{}", format_category_summary(&summary));
    Ok(())
}
