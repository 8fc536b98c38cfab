//! Storage layer for bookmrk data.
//!
//! The [`Store`] owns the persisted collection of bookmark records and
//! enforces its invariants:
//!
//! - `name` is unique case-insensitively; stored lowercased.
//! - `path` is unique exactly (two names cannot claim the same canonical path).
//! - `path` must exist on disk at add/update time. A bookmark whose target is
//!   deleted later goes stale; that is accepted, not corrected.
//!
//! Persistence is a single JSON file holding the ordered array of records,
//! rewritten whole on every mutation. Every operation is a complete
//! synchronous read-modify-write cycle; one interactive process at a time is
//! assumed, so there is no locking.
//!
//! Name lookups come in two deliberate modes: normalized (case-insensitive,
//! used by existence checks, `get`, and `update`) and exact (case-sensitive
//! against the raw stored value, used by `find` and `remove`). The asymmetry
//! is part of the tool's observed behavior and is kept, not unified.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the record store inside the data directory.
pub const STORE_FILE: &str = "bookmarks.json";

/// A single bookmark record: a short name mapped to a canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Identity key, stored lowercased.
    pub name: String,
    /// Absolute, canonicalized filesystem path.
    pub path: String,
}

/// The persisted bookmark collection and its operations.
///
/// Constructed once per invocation with an explicit data directory and passed
/// to every operation; the store is the sole owner of the persisted state.
pub struct Store {
    file: PathBuf,
    records: Vec<Bookmark>,
}

impl Store {
    /// Open (or create) the store inside the given data directory.
    ///
    /// A missing or empty store file loads as an empty collection.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let file = data_dir.join(STORE_FILE);

        let records = if file.exists() {
            let raw = fs::read_to_string(&file)?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Vec::new()
        };

        Ok(Self { file, records })
    }

    /// Write the whole collection back to disk in one shot.
    fn commit(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.file, json)?;
        Ok(())
    }

    /// Case-insensitive lookup by name.
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.records.iter().any(|b| b.name == needle)
    }

    /// Exact-match lookup by stored canonical path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.records.iter().any(|b| b.path == path)
    }

    /// Insert a new bookmark.
    ///
    /// `path` must already be resolved to its canonical absolute form by the
    /// caller. Fails with `AlreadyExists` if the name (any casing) or the
    /// exact path is already claimed, then with `PathNotFound` if the target
    /// is absent on disk. On failure nothing is written.
    pub fn add(&mut self, name: &str, path: &str) -> Result<()> {
        if self.contains_name(name) || self.contains_path(path) {
            return Err(Error::AlreadyExists(name.to_lowercase()));
        }
        if !Path::new(path).exists() {
            return Err(Error::PathNotFound(path.to_string()));
        }

        self.records.push(Bookmark {
            name: name.to_lowercase(),
            path: path.to_string(),
        });
        self.commit()
    }

    /// Fetch a bookmark by normalized name. Used to resolve an existing
    /// record for open/update.
    pub fn get(&self, name: &str) -> Option<&Bookmark> {
        let needle = name.to_lowercase();
        self.records.iter().find(|b| b.name == needle)
    }

    /// Case-sensitive exact-name search against the raw stored value.
    ///
    /// Returns an empty vec, never an error, when nothing matches. Note this
    /// matches the stored (lowercased) form exactly, unlike `contains_name`.
    pub fn find(&self, name: &str) -> Vec<&Bookmark> {
        self.records.iter().filter(|b| b.name == name).collect()
    }

    /// All records in natural persisted order.
    pub fn list(&self) -> &[Bookmark] {
        &self.records
    }

    /// Update the record identified by `name` (normalized lookup).
    ///
    /// Each supplied field is validated against every *other* record before
    /// any write: `new_name` lowercased against stored names, `new_path`
    /// exactly against stored paths and then for on-disk existence. Either
    /// both validated changes apply in a single commit or neither does.
    pub fn update(
        &mut self,
        name: &str,
        new_name: Option<&str>,
        new_path: Option<&str>,
    ) -> Result<Bookmark> {
        let needle = name.to_lowercase();
        let idx = self
            .records
            .iter()
            .position(|b| b.name == needle)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        if new_name.is_none() && new_path.is_none() {
            return Err(Error::NothingToUpdate);
        }

        if let Some(n) = new_name {
            let lowered = n.to_lowercase();
            if self
                .records
                .iter()
                .enumerate()
                .any(|(i, b)| i != idx && b.name == lowered)
            {
                return Err(Error::AlreadyExists(lowered));
            }
        }
        if let Some(p) = new_path {
            if self
                .records
                .iter()
                .enumerate()
                .any(|(i, b)| i != idx && b.path == p)
            {
                return Err(Error::AlreadyExists(p.to_string()));
            }
            if !Path::new(p).exists() {
                return Err(Error::PathNotFound(p.to_string()));
            }
        }

        if let Some(n) = new_name {
            self.records[idx].name = n.to_lowercase();
        }
        if let Some(p) = new_path {
            self.records[idx].path = p.to_string();
        }
        self.commit()?;

        Ok(self.records[idx].clone())
    }

    /// Delete records matching `name` exactly (case-sensitive).
    ///
    /// Zero matches is an idempotent no-op: no error, no write.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|b| b.name != name);
        let removed = before - self.records.len();
        if removed > 0 {
            self.commit()?;
        }
        Ok(removed)
    }

    /// Clear the entire collection unconditionally.
    ///
    /// The confirmation gate lives in the command layer, not here.
    pub fn remove_all(&mut self) -> Result<usize> {
        let removed = self.records.len();
        self.records.clear();
        self.commit()?;
        Ok(removed)
    }
}

/// Default data directory: `<platform data dir>/bookmrk`.
///
/// Overridable via the `--data-dir` flag or `BOOKMRK_DATA_DIR` env var,
/// both handled by the CLI layer.
pub fn default_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?;
    Ok(data_dir.join("bookmrk"))
}
