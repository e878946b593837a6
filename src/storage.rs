// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;

use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

/// Platform-specific location of the ledger snapshot file.
pub fn data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("transactions.json"))
}

/// Durable mirror of the transaction list. `save` replaces the whole
/// snapshot; `load` returns the last saved list, or an empty list when no
/// usable snapshot exists.
pub trait Snapshot {
    fn load(&self) -> Result<Vec<Transaction>>;
    fn save(&mut self, transactions: &[Transaction]) -> Result<()>;
}

/// Snapshot kept in a single JSON file holding the serialized array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default platform data location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(data_path()?))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Snapshot for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Read snapshot {}", self.path.display()));
            }
        };
        match serde_json::from_str(&raw) {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                // A snapshot that no longer parses starts the ledger empty
                // rather than wedging the app.
                log::warn!(
                    "Snapshot {} is not valid JSON ({}); starting empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string_pretty(transactions)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write snapshot {}", self.path.display()))?;
        log::debug!(
            "Saved {} transaction(s) to {}",
            transactions.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory snapshot. Clones share the underlying cell, so a ledger
/// reopened over a clone observes earlier saves. Intended for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Snapshot for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        match self.cell.borrow().as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions)?;
        *self.cell.borrow_mut() = Some(raw);
        Ok(())
    }
}
