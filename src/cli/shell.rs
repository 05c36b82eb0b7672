//! Interactive ledger shell
//!
//! Runs many commands against one in-memory ledger, so an entry keeps the id
//! it was given for the whole session. Loading and saving are explicit
//! commands; leaving with unsaved changes discards them after a warning.
//!
//! When stdin is a terminal the shell reads through `rustyline` with history;
//! otherwise it reads one command per line, which is how scripts and tests
//! drive it.

use std::io::{self, BufRead, IsTerminal};

use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shell_words::split;

use super::{
    handle_add, handle_categories, handle_clear, handle_convert, handle_delete, handle_edit,
    handle_income_command, handle_list, handle_rate_command, handle_summary, AddArgs, ConvertArgs,
    EditArgs, IncomeCommands, ListArgs, RateCommands, Session,
};
use crate::error::{LedgerError, LedgerResult};

const PROMPT: &str = "budget> ";

/// One line typed at the shell prompt
#[derive(Parser)]
#[command(name = "budget", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
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

    /// Replace the ledger with the contents of its file (renumbers entries)
    Load,

    /// Write the ledger to its file
    Save,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

enum LoopControl {
    Continue,
    Exit,
}

/// Run the shell until `exit` or end of input
pub fn run_shell(mut session: Session) -> LedgerResult<()> {
    session.set_interactive();

    let report = session.load_report();
    println!(
        "Ledger: {} ({} entries loaded, {} skipped)",
        session.file().path().display(),
        report.loaded,
        report.skipped
    );
    println!("Type `help` for commands, `save` to write changes, `exit` to leave.");

    if io::stdin().is_terminal() {
        run_interactive(&mut session)?;
    } else {
        run_script(&mut session)?;
    }

    if session.is_dirty() {
        eprintln!("Warning: unsaved changes were discarded");
    }
    Ok(())
}

fn run_interactive(session: &mut Session) -> LedgerResult<()> {
    let mut editor = DefaultEditor::new().map_err(readline_error)?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                if let LoopControl::Exit = handle_line(session, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(readline_error(err)),
        }
    }

    Ok(())
}

fn run_script(session: &mut Session) -> LedgerResult<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if let LoopControl::Exit = handle_line(session, &line) {
            break;
        }
    }
    Ok(())
}

fn handle_line(session: &mut Session, line: &str) -> LoopControl {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("Error: {}", err);
            return LoopControl::Continue;
        }
    };

    if tokens.is_empty() {
        return LoopControl::Continue;
    }

    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Help and usage errors both go through clap's own rendering
            err.print().ok();
            return LoopControl::Continue;
        }
    };

    tracing::debug!(line, "shell command");
    match dispatch(session, parsed.command) {
        Ok(control) => control,
        Err(err) => {
            eprintln!("Error: {}", err);
            LoopControl::Continue
        }
    }
}

fn dispatch(session: &mut Session, command: ShellCommand) -> LedgerResult<LoopControl> {
    match command {
        ShellCommand::Add(args) => handle_add(session, args)?,
        ShellCommand::Edit(args) => handle_edit(session, args)?,
        ShellCommand::Delete { id } => handle_delete(session, &id)?,
        ShellCommand::List(args) => handle_list(session, args)?,
        ShellCommand::Summary => handle_summary(session)?,
        ShellCommand::Categories => handle_categories()?,
        ShellCommand::Income(cmd) => handle_income_command(session, cmd)?,
        ShellCommand::Rate(cmd) => handle_rate_command(session, cmd)?,
        ShellCommand::Convert(args) => handle_convert(session, args)?,
        ShellCommand::Clear => handle_clear(session)?,
        ShellCommand::Load => {
            let report = session.reload()?;
            println!(
                "Loaded {} entries ({} skipped) from {}",
                report.loaded,
                report.skipped,
                session.file().path().display()
            );
        }
        ShellCommand::Save => {
            session.save()?;
            println!(
                "Saved {} entries to {}",
                session.ledger().entry_count(),
                session.file().path().display()
            );
        }
        ShellCommand::Exit => return Ok(LoopControl::Exit),
    }

    Ok(LoopControl::Continue)
}

fn readline_error(err: ReadlineError) -> LedgerError {
    LedgerError::Io(format!("Failed to read input: {}", err))
}
