//! Income CLI commands
//!
//! Shows and updates the two monthly income figures that make up gross income.

use clap::Subcommand;

use super::Session;
use crate::display::format_incomes;
use crate::error::LedgerResult;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Show both incomes and gross income
    Show,

    /// Set both monthly incomes
    Set {
        /// First earner's monthly income
        #[arg(allow_negative_numbers = true)]
        first: f64,

        /// Second earner's monthly income
        #[arg(allow_negative_numbers = true)]
        second: f64,
    },
}

/// Handle an income command
pub fn handle_income_command(session: &mut Session, cmd: IncomeCommands) -> LedgerResult<()> {
    match cmd {
        IncomeCommands::Show => {
            print!("{}", format_incomes(session.ledger(), session.settings()));
        }

        IncomeCommands::Set { first, second } => {
            // A rejected value aborts the command before the session is saved
            let ledger = session.ledger_mut();
            ledger.set_income_a(first)?;
            ledger.set_income_b(second)?;

            println!("Incomes updated.");
            print!("{}", format_incomes(session.ledger(), session.settings()));
        }
    }

    Ok(())
}
