//! Storage layer for the family ledger
//!
//! Persists a [`Ledger`] to a CSV file with an embedded metadata block. Writes
//! go through a temp file and an atomic rename; reads are lenient.

pub mod codec;
pub mod file_io;

pub use codec::{read_ledger, write_ledger, LoadReport, HEADER, METADATA_PREFIX};
pub use file_io::{open_for_read, write_atomic};

use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::ledger::Ledger;

/// Save a ledger to `path`, replacing any existing file
pub fn save_ledger<P: AsRef<Path>>(ledger: &Ledger, path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();
    write_atomic(path, |writer| write_ledger(ledger, writer))?;
    tracing::info!(path = %path.display(), entries = ledger.entry_count(), "saved ledger");
    Ok(())
}

/// Load a ledger from `path` into `ledger`.
///
/// Fails only if the file cannot be opened, in which case `ledger` is left
/// untouched. Otherwise `ledger` is cleared and refilled.
pub fn load_ledger<P: AsRef<Path>>(
    ledger: &mut Ledger,
    path: P,
) -> Result<LoadReport, LedgerError> {
    let path = path.as_ref();
    let file = open_for_read(path)?;
    let report = read_ledger(ledger, file)?;
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "loaded ledger"
    );
    Ok(report)
}

/// A ledger file on disk
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Create a handle for the ledger file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the file into a fresh ledger, or start a default ledger if the
    /// file has not been written yet
    pub fn load_or_default(&self) -> Result<(Ledger, LoadReport), LedgerError> {
        let mut ledger = Ledger::new();
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "no ledger file yet, starting empty");
            return Ok((ledger, LoadReport::default()));
        }
        let report = load_ledger(&mut ledger, &self.path)?;
        Ok((ledger, report))
    }

    /// Load the file into an existing ledger
    pub fn load_into(&self, ledger: &mut Ledger) -> Result<LoadReport, LedgerError> {
        load_ledger(ledger, &self.path)
    }

    /// Save a ledger to this file
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        save_ledger(ledger, &self.path)
    }
}
