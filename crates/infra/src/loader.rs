use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::InventoryStore;
use stockroom_transactions::AuditLog;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed inventory file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoaderError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Reads and writes the flat inventory, transaction and audit files.
///
/// A missing file is reported as `NotFound`, distinct from malformed content,
/// so callers can tell a missing baseline from a corrupt one.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryLoader;

impl InventoryLoader {
    /// Load an inventory file. Any malformed record fails the whole load.
    pub fn read_inventory(&self, path: impl AsRef<Path>) -> Result<InventoryStore, LoaderError> {
        let path = path.as_ref();
        let lines = read_lines(path)?;

        let mut store = InventoryStore::new();
        store.load(&lines).map_err(|source| LoaderError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), parts = store.len(), "inventory loaded");
        Ok(store)
    }

    /// Read every line of a transaction file, blank lines included.
    pub fn read_transactions(&self, path: impl AsRef<Path>) -> Result<Vec<String>, LoaderError> {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        tracing::info!(path = %path.display(), lines = lines.len(), "transactions read");
        Ok(lines)
    }

    /// Write the store as `part_number,description,price` records in store order.
    pub fn write_inventory(&self, path: impl AsRef<Path>, store: &InventoryStore) -> Result<(), LoaderError> {
        let path = path.as_ref();
        write_lines(path, store.to_records())?;
        tracing::info!(path = %path.display(), parts = store.len(), "inventory written");
        Ok(())
    }

    /// Write one audit message per line, in processing order.
    pub fn write_audit_log(&self, path: impl AsRef<Path>, audit: &AuditLog) -> Result<(), LoaderError> {
        let path = path.as_ref();
        write_lines(path, audit.iter().map(|e| e.text()))?;
        tracing::info!(path = %path.display(), entries = audit.len(), "audit log written");
        Ok(())
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, LoaderError> {
    let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| LoaderError::io(path, e))
}

fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), LoaderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|e| LoaderError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(|e| LoaderError::io(path, e))?;
    }
    out.flush().map_err(|e| LoaderError::io(path, e))
}
