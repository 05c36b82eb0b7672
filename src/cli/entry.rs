//! Entry CLI commands
//!
//! Implements adding, editing, deleting and listing ledger entries.

use clap::Args;

use super::{parse_category, parse_currency, parse_entry_id, Session};
use crate::display::format_entry_table;
use crate::error::LedgerResult;
use crate::models::{Category, Currency};
use crate::services::{EntryInput, EntryService};

/// Arguments for `add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (must be positive)
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Category name or menu number
    #[arg(short, long, value_parser = parse_category)]
    pub category: Category,

    /// Currency the amount was paid in (defaults to the settlement currency)
    #[arg(short = 'C', long, value_parser = parse_currency)]
    pub currency: Option<Currency>,

    /// Description (generated from category, amount and currency if omitted)
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Arguments for `edit`
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    pub id: String,

    /// New description
    pub description: String,

    /// New amount (must be positive)
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// New category name or menu number
    #[arg(short, long, value_parser = parse_category)]
    pub category: Category,

    /// Currency of the new amount (defaults to the settlement currency)
    #[arg(short = 'C', long, value_parser = parse_currency)]
    pub currency: Option<Currency>,
}

/// Arguments for `list`
#[derive(Args)]
pub struct ListArgs {
    /// Only show entries in this category
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,
}

/// Record a new entry
pub fn handle_add(session: &mut Session, args: AddArgs) -> LedgerResult<()> {
    let settlement = session.settings().settlement_currency;
    let mut input = EntryInput::new(
        args.amount,
        args.category,
        args.currency.unwrap_or(settlement),
    );
    input.description = args.description;

    let id = EntryService::new(session.ledger_mut(), settlement).record(input)?;

    let entry = session.ledger().get(id);
    println!("Entry added with ID: {}", id);
    if let Some(entry) = entry {
        println!(
            "  {} {} ({})",
            entry.description,
            entry.currency.format_amount(entry.amount),
            entry.category
        );
    }
    Ok(())
}

/// Replace an entry's description, amount, category and currency
pub fn handle_edit(session: &mut Session, args: EditArgs) -> LedgerResult<()> {
    let id = parse_entry_id(&args.id)?;
    let settlement = session.settings().settlement_currency;
    let input = EntryInput::new(
        args.amount,
        args.category,
        args.currency.unwrap_or(settlement),
    )
    .description(args.description);

    EntryService::new(session.ledger_mut(), settlement).amend(id, input)?;

    println!("Entry {} modified", id);
    Ok(())
}

/// Delete an entry
pub fn handle_delete(session: &mut Session, id: &str) -> LedgerResult<()> {
    let id = parse_entry_id(id)?;
    let settlement = session.settings().settlement_currency;
    let description = session
        .ledger()
        .get(id)
        .map(|entry| entry.description.clone())
        .unwrap_or_default();

    EntryService::new(session.ledger_mut(), settlement).remove(id)?;

    println!("Entry {} deleted ({})", id, description);

    let shifted = session.ledger().entries().iter().any(|entry| entry.id() > id);
    if shifted && !session.is_interactive() {
        println!(
            "Note: entries after {} are renumbered on the next run; check `budget list` \
             before editing or deleting by ID, or use `budget shell` to keep IDs stable.",
            id
        );
    }
    Ok(())
}

/// List entries, optionally filtered by category
pub fn handle_list(session: &Session, args: ListArgs) -> LedgerResult<()> {
    let ledger = session.ledger();
    match args.category {
        Some(category) => print!("{}", format_entry_table(ledger.entries_by_category(category))),
        None => print!("{}", format_entry_table(ledger.entries())),
    }
    Ok(())
}

/// Print the numbered category menu
pub fn handle_categories() -> LedgerResult<()> {
    println!("Available Categories:");
    for (i, category) in Category::all().iter().enumerate() {
        println!("{:>2}. {}", i + 1, category);
    }
    Ok(())
}

/// Remove every entry, keeping rate and incomes
pub fn handle_clear(session: &mut Session) -> LedgerResult<()> {
    let count = session.ledger().entry_count();
    session.ledger_mut().clear();
    println!("Cleared {} entries", count);
    Ok(())
}
