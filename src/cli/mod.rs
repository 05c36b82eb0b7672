//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger and its services. Every command runs
//! against one [`Session`], which owns the ledger for the invocation.
//!
//! Loading renumbers entries from 1, so an id printed by one `budget`
//! invocation can name a different entry in the next once earlier entries are
//! deleted. `budget shell` keeps one ledger for the whole session instead.

pub mod entry;
pub mod income;
pub mod rate;
pub mod report;
pub mod shell;

pub use entry::{
    handle_add, handle_categories, handle_clear, handle_delete, handle_edit, handle_list, AddArgs,
    EditArgs, ListArgs,
};
pub use income::{handle_income_command, IncomeCommands};
pub use rate::{handle_convert, handle_rate_command, ConvertArgs, RateCommands};
pub use report::handle_summary;
pub use shell::run_shell;

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, Currency, EntryId};
use crate::storage::{LedgerFile, LoadReport};

/// One command invocation: resolved configuration plus the loaded ledger
pub struct Session {
    paths: LedgerPaths,
    settings: Settings,
    file: LedgerFile,
    ledger: Ledger,
    load_report: LoadReport,
    dirty: bool,
    interactive: bool,
}

impl Session {
    /// Load the ledger named by `file_name`, or the settings' default file
    pub fn open(
        paths: LedgerPaths,
        settings: Settings,
        file_name: Option<&str>,
    ) -> LedgerResult<Self> {
        let name = file_name.unwrap_or(&settings.default_file);
        let file = LedgerFile::new(paths.ledger_file(name));
        let (ledger, load_report) = file.load_or_default()?;

        Ok(Self {
            paths,
            settings,
            file,
            ledger,
            load_report,
            dirty: false,
            interactive: false,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn file(&self) -> &LedgerFile {
        &self.file
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mutable access to the ledger; the session will be saved on [`Session::finish`]
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        self.dirty = true;
        &mut self.ledger
    }

    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Whether the ledger has changed since it was last loaded or saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether ids stay valid across commands (one ledger for many commands)
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Keep this session's ledger in memory across commands
    pub(crate) fn set_interactive(&mut self) {
        self.interactive = true;
    }

    /// Write the ledger to its file
    pub fn save(&mut self) -> LedgerResult<()> {
        self.file.save(&self.ledger)?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the in-memory ledger with the file's contents.
    ///
    /// A file that cannot be opened leaves the ledger as it was.
    pub fn reload(&mut self) -> LedgerResult<LoadReport> {
        let report = self.file.load_into(&mut self.ledger)?;
        self.load_report = report;
        self.dirty = false;
        Ok(report)
    }

    /// Save the ledger if any command took mutable access to it
    pub fn finish(mut self) -> LedgerResult<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}

/// Parse a category from its name or 1-based menu number
pub fn parse_category(s: &str) -> Result<Category, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Category::from_index(index).ok_or_else(|| {
            format!(
                "category number must be between 1 and {}",
                Category::all().len()
            )
        });
    }
    Category::parse(s).map_err(|e| e.to_string())
}

/// Parse a currency code
pub fn parse_currency(s: &str) -> Result<Currency, String> {
    Currency::parse(s).map_err(|e| e.to_string())
}

/// Parse an entry id given on the command line; unparseable ids are "not found"
pub fn parse_entry_id(s: &str) -> LedgerResult<EntryId> {
    EntryId::parse(s).map_err(|_| LedgerError::entry_not_found(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> Session {
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        Session::open(paths, Settings::default(), None).unwrap()
    }

    #[test]
    fn test_session_saves_only_when_dirty() {
        let temp_dir = TempDir::new().unwrap();

        let s = session(&temp_dir);
        let path = s.file().path().to_path_buf();
        s.finish().unwrap();
        assert!(!path.exists());

        let mut s = session(&temp_dir);
        s.ledger_mut()
            .add_entry("Rent", 800.0, Category::Housing, Currency::Gbp);
        s.finish().unwrap();
        assert!(path.exists());

        let s = session(&temp_dir);
        assert_eq!(s.ledger().entry_count(), 1);
        assert_eq!(s.load_report().loaded, 1);
    }

    #[test]
    fn test_reload_discards_unsaved_changes() {
        let temp_dir = TempDir::new().unwrap();

        let mut s = session(&temp_dir);
        assert!(s.reload().is_err());

        s.ledger_mut()
            .add_entry("Rent", 800.0, Category::Housing, Currency::Gbp);
        s.save().unwrap();
        assert!(!s.is_dirty());

        s.ledger_mut()
            .add_entry("Milk", 2.5, Category::Grocery, Currency::Gbp);
        let report = s.reload().unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(s.ledger().entry_count(), 1);
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_parse_category_by_name_or_number() {
        assert_eq!(parse_category("Housing").unwrap(), Category::Housing);
        assert_eq!(parse_category("housing").unwrap(), Category::Housing);
        assert_eq!(parse_category("4").unwrap(), Category::Housing);
        assert!(parse_category("0").is_err());
        assert!(parse_category("HOUSING").is_err());
    }

    #[test]
    fn test_parse_entry_id() {
        assert_eq!(parse_entry_id("3").unwrap(), EntryId::new(3));
        assert!(parse_entry_id("three").unwrap_err().is_not_found());
    }
}
