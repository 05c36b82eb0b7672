//! Exchange rate CLI commands

use clap::{Args, Subcommand};

use super::{parse_currency, Session};
use crate::display::format_exchange_rate;
use crate::error::LedgerResult;
use crate::models::{convert, Currency};

/// Exchange rate subcommands
#[derive(Subcommand)]
pub enum RateCommands {
    /// Show the GBP to USD exchange rate
    Show,

    /// Set the GBP to USD exchange rate
    Set {
        /// USD per GBP (must be positive)
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },
}

/// Arguments for `convert`
#[derive(Args)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency of the amount
    #[arg(long, value_parser = parse_currency)]
    pub from: Currency,

    /// Target currency
    #[arg(long, value_parser = parse_currency)]
    pub to: Currency,
}

/// Handle a rate command
pub fn handle_rate_command(session: &mut Session, cmd: RateCommands) -> LedgerResult<()> {
    match cmd {
        RateCommands::Show => {
            print!("{}", format_exchange_rate(session.ledger().exchange_rate()));
        }

        RateCommands::Set { rate } => {
            session.ledger_mut().set_exchange_rate(rate)?;
            println!("Exchange rate updated.");
            print!("{}", format_exchange_rate(session.ledger().exchange_rate()));
        }
    }

    Ok(())
}

/// Convert an amount with the ledger's exchange rate
pub fn handle_convert(session: &Session, args: ConvertArgs) -> LedgerResult<()> {
    let converted = convert(
        args.amount,
        session.ledger().exchange_rate(),
        args.from,
        args.to,
    );
    println!(
        "{} = {}",
        args.from.format_amount(args.amount),
        args.to.format_amount(converted)
    );
    Ok(())
}
