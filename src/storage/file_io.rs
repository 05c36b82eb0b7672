//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Open a file for reading
pub fn open_for_read<P: AsRef<Path>>(path: P) -> Result<File, LedgerError> {
    let path = path.as_ref();
    File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over a temp file next to `path`. The
/// temp file is flushed, synced and renamed over `path` only if `write`
/// succeeds, so the target is either fully replaced or not modified at all.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), LedgerError>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create {}: {}", temp_path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf, LedgerError> {
    let name = path
        .file_name()
        .ok_or_else(|| LedgerError::Io(format!("Not a file path: {}", path.display())))?;
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
