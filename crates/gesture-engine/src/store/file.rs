use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistError;
use crate::store::codec::SymbolDatabase;
use crate::store::registry::SymbolStore;
use crate::store::symbol::{SymbolEntry, DEFAULT_MAX_PATTERNS};

/// A symbol database file at a caller-chosen path.
///
/// Reading never fails: a missing or unreadable file is the same as
/// "nothing trained yet". Writing reports errors so the caller can
/// surface them, but the in-memory store is never touched.
#[derive(Debug, Clone)]
pub struct SymbolFile {
    path: PathBuf,
    max_patterns: usize,
}

impl SymbolFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_patterns: DEFAULT_MAX_PATTERNS,
        }
    }

    /// Capacity for symbols created after loading.
    pub fn with_max_patterns(mut self, max_patterns: usize) -> Self {
        self.max_patterns = max_patterns;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the store, or an empty one if the file is missing or malformed.
    ///
    /// Templates are loaded as saved, including any beyond a symbol's
    /// `maxPatterns`. A `maxPatterns` of 0 is read as 1.
    pub fn load(&self) -> SymbolStore {
        match self.read_database() {
            Ok(Some(db)) => {
                let store = db.into_store(self.max_patterns);
                log::info!(
                    "symbol database loaded from {}: {} symbols",
                    self.path.display(),
                    store.len()
                );
                for entry in store.entries() {
                    log::debug!("  '{}': {} templates", entry.name(), entry.template_count());
                }
                store
            }
            Ok(None) => {
                log::info!(
                    "no symbol database at {}, starting empty",
                    self.path.display()
                );
                SymbolStore::with_capacity(self.max_patterns)
            }
            Err(e) => {
                log::warn!(
                    "failed to load symbol database {}: {e}; starting empty",
                    self.path.display()
                );
                SymbolStore::with_capacity(self.max_patterns)
            }
        }
    }

    /// Write the whole store.
    pub fn save(&self, store: &SymbolStore) -> Result<(), PersistError> {
        let json = store.to_json()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        log::info!(
            "symbol database saved to {}: {} symbols",
            self.path.display(),
            store.len()
        );
        Ok(())
    }

    /// Replace one symbol in the saved file, leaving the others as they are.
    pub fn save_symbol(&self, entry: &SymbolEntry) -> Result<(), PersistError> {
        let mut store = self.load();
        store.insert_entry(entry.clone());
        self.save(&store)
    }

    /// Remove one symbol from the saved file. Returns whether it was there.
    pub fn delete_symbol(&self, name: &str) -> Result<bool, PersistError> {
        let mut store = self.load();
        if !store.remove_symbol(name) {
            return Ok(false);
        }
        self.save(&store)?;
        log::info!("symbol '{name}' removed from {}", self.path.display());
        Ok(true)
    }

    /// Delete the file. Missing files are fine.
    pub fn clear(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("symbol database {} deleted", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Names in the saved file, without building a store.
    pub fn saved_symbol_names(&self) -> Vec<String> {
        match self.read_database() {
            Ok(Some(db)) => db.symbol_names(),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read symbol names from {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    pub fn has_symbol(&self, name: &str) -> bool {
        self.saved_symbol_names().iter().any(|n| n == name)
    }

    fn read_database(&self) -> Result<Option<SymbolDatabase>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(SymbolDatabase::from_json(&json)?))
    }
}
