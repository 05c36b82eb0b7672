use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use family_ledger::cli::{
    handle_add, handle_categories, handle_clear, handle_convert, handle_delete, handle_edit,
    handle_income_command, handle_list, handle_rate_command, handle_summary, run_shell, AddArgs,
    ConvertArgs, EditArgs, IncomeCommands, ListArgs, RateCommands, Session,
};
use family_ledger::config::{LedgerPaths, Settings};
use family_ledger::log::init_logging;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Family budget ledger",
    long_about = "Records spending entries by category and currency, summarises \
                  them against household income, and keeps everything in a \
                  plain CSV file."
)]
struct Cli {
    /// Ledger file name inside the data directory, or a path
    #[arg(short, long, global = true, env = "BUDGET_LEDGER_FILE")]
    file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a spending entry
    Add(AddArgs),

    /// Replace an entry's description, amount, category and currency
    Edit(EditArgs),

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        id: String,
    },

    /// List entries
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show totals per category against gross income
    Summary,

    /// List categories with their menu numbers
    Categories,

    /// Income management commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Exchange rate commands
    #[command(subcommand)]
    Rate(RateCommands),

    /// Convert an amount between GBP and USD
    Convert(ConvertArgs),

    /// Remove all entries (rate and incomes are kept)
    Clear,

    /// Write default settings and an empty ledger file
    Init,

    /// Show current configuration and paths
    Config,

    /// Run many commands against one in-memory ledger (IDs stay stable)
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut session = Session::open(paths, settings, cli.file.as_deref())?;

    match command {
        Commands::Add(args) => handle_add(&mut session, args)?,
        Commands::Edit(args) => handle_edit(&mut session, args)?,
        Commands::Delete { id } => handle_delete(&mut session, &id)?,
        Commands::List(args) => handle_list(&session, args)?,
        Commands::Summary => handle_summary(&session)?,
        Commands::Categories => handle_categories()?,
        Commands::Income(cmd) => handle_income_command(&mut session, cmd)?,
        Commands::Rate(cmd) => handle_rate_command(&mut session, cmd)?,
        Commands::Convert(args) => handle_convert(&session, args)?,
        Commands::Clear => handle_clear(&mut session)?,
        Commands::Init => {
            session.settings().save(session.paths())?;
            // Touch the ledger so an empty file with metadata is written
            session.ledger_mut();
            println!("Initialized ledger at: {}", session.file().path().display());
        }
        Commands::Shell => {
            run_shell(session)?;
            return Ok(());
        }
        Commands::Config => {
            let report = session.load_report();
            println!("Family Ledger Configuration");
            println!("===========================");
            println!("Base directory:   {}", session.paths().base_dir().display());
            println!("Data directory:   {}", session.paths().data_dir().display());
            println!("Settings file:    {}", session.paths().settings_file().display());
            println!("Ledger file:      {}", session.file().path().display());
            println!();
            println!("Settings:");
            println!("  Settlement currency: {}", session.settings().settlement_currency);
            println!(
                "  Earners:             {}, {}",
                session.settings().first_earner,
                session.settings().second_earner
            );
            println!();
            println!("Ledger:");
            println!("  Entries:       {} ({} skipped on load)", report.loaded, report.skipped);
            println!("  Next ID:       {}", session.ledger().next_id());
            println!("  Exchange rate: {}", session.ledger().exchange_rate());
        }
    }

    session.finish()?;
    Ok(())
}
