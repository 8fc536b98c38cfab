//! Command implementations for the bookmrk CLI.
//!
//! Each command is a thin function that normalizes its inputs (name casing is
//! handled by the store, path resolution happens here), calls one store
//! operation, and returns a serializable result struct. Rendering and the
//! interactive confirmation prompt live in `main`; the store never prompts.

use crate::storage::{Bookmark, Store};
use crate::{Error, Result};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Command results that render as JSON or human-readable text.
pub trait Output: Serialize {
    /// Serialize to a JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Resolve a user-supplied path to its canonical absolute form.
///
/// Expands a leading tilde, then canonicalizes (symlinks and `..` resolved).
/// Paths that do not exist on disk cannot be canonicalized, so they fall back
/// to a lexical absolute form; the store then reports them as `PathNotFound`
/// with a readable path instead of this function failing first.
pub fn resolve_path(raw: &str) -> String {
    let expanded = expand_tilde(raw);
    match fs::canonicalize(&expanded) {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => lexical_absolute(&expanded).to_string_lossy().into_owned(),
    }
}

fn expand_tilde(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if rest.is_empty() {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        } else if let Some(stripped) = rest.strip_prefix(['/', '\\']) {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
    }
    PathBuf::from(raw)
}

/// Absolute form without touching the filesystem: join onto the current
/// directory and collapse `.` / `..` segments.
fn lexical_absolute(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

// === Open ===

#[derive(Debug, Serialize)]
pub struct OpenResult {
    pub name: String,
    pub path: String,
}

impl Output for OpenResult {
    fn to_human(&self) -> String {
        self.path.clone()
    }
}

/// Resolve a bookmark by name (case-insensitive) for opening.
pub fn open_bookmark(data_dir: &Path, name: &str) -> Result<OpenResult> {
    let store = Store::open(data_dir)?;
    let bookmark = store
        .get(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    Ok(OpenResult {
        name: bookmark.name.clone(),
        path: bookmark.path.clone(),
    })
}

/// Open a path in the host's file browser.
///
/// Fire-and-forget: the browser process is spawned detached and launch
/// failures are ignored, matching the tool's interactive-only intent.
pub fn launch_file_browser(path: &str) {
    let _ = browser_command(path).spawn();
}

#[cfg(target_os = "windows")]
fn browser_command(path: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("explorer");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn browser_command(path: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn browser_command(path: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

// === Add ===

#[derive(Debug, Serialize)]
pub struct AddResult {
    pub name: String,
    pub path: String,
}

impl Output for AddResult {
    fn to_human(&self) -> String {
        format!("Added \"{}\" -> {}", self.name, self.path)
    }
}

/// Add a bookmark after resolving the path to canonical absolute form.
pub fn add_bookmark(data_dir: &Path, name: &str, raw_path: &str) -> Result<AddResult> {
    let path = resolve_path(raw_path);

    let mut store = Store::open(data_dir)?;
    store.add(name, &path)?;

    Ok(AddResult {
        name: name.to_lowercase(),
        path,
    })
}

// === List ===

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub bookmarks: Vec<Bookmark>,
    pub total: usize,
}

impl Output for ListResult {
    fn to_human(&self) -> String {
        let mut lines: Vec<String> = self
            .bookmarks
            .iter()
            .map(|b| format!("{} -> {}", b.name, b.path))
            .collect();
        lines.push(format!("Total bookmarks: {}", self.total));
        lines.join("\n")
    }
}

/// List every bookmark in stored order, with the total count.
pub fn list_bookmarks(data_dir: &Path) -> Result<ListResult> {
    let store = Store::open(data_dir)?;
    let bookmarks = store.list().to_vec();
    let total = bookmarks.len();

    Ok(ListResult { bookmarks, total })
}

// === Find ===

#[derive(Debug, Serialize)]
pub struct FindResult {
    pub matches: Vec<Bookmark>,
    #[serde(skip)]
    pub path_only: bool,
}

impl Output for FindResult {
    fn to_human(&self) -> String {
        if self.matches.is_empty() {
            return String::from("No bookmarks found!");
        }
        self.matches
            .iter()
            .map(|b| {
                if self.path_only {
                    b.path.clone()
                } else {
                    format!("{} -> {}", b.name, b.path)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Case-sensitive exact-name search. Zero matches is a normal outcome.
pub fn find_bookmarks(data_dir: &Path, name: &str, path_only: bool) -> Result<FindResult> {
    let store = Store::open(data_dir)?;
    let matches = store.find(name).into_iter().cloned().collect();

    Ok(FindResult { matches, path_only })
}

// === Update ===

#[derive(Debug, Serialize)]
pub struct UpdateResult {
    pub bookmark: Bookmark,
}

impl Output for UpdateResult {
    fn to_human(&self) -> String {
        format!(
            "Updated \"{}\" -> {}",
            self.bookmark.name, self.bookmark.path
        )
    }
}

/// Update a bookmark's name and/or path.
///
/// The target name is validated up front so a missing bookmark reports
/// `NotFound` before any field validation runs. A supplied new path is
/// resolved to canonical form before the store sees it.
pub fn update_bookmark(
    data_dir: &Path,
    name: &str,
    new_name: Option<&str>,
    new_path: Option<&str>,
) -> Result<UpdateResult> {
    let mut store = Store::open(data_dir)?;
    if !store.contains_name(name) {
        return Err(Error::NotFound(name.to_string()));
    }

    let resolved = new_path.map(resolve_path);
    let bookmark = store.update(name, new_name, resolved.as_deref())?;

    Ok(UpdateResult { bookmark })
}

// === Remove ===

#[derive(Debug, Serialize)]
pub struct RemoveResult {
    pub name: String,
    pub removed: usize,
}

impl Output for RemoveResult {
    fn to_human(&self) -> String {
        format!("Removed \"{}\"", self.name)
    }
}

/// Remove a bookmark by name.
///
/// Existence is validated case-insensitively, but the delete itself matches
/// the exact name as given. The two query modes are intentionally different;
/// a cased name can pass validation yet delete nothing.
pub fn remove_bookmark(data_dir: &Path, name: &str) -> Result<RemoveResult> {
    let mut store = Store::open(data_dir)?;
    if !store.contains_name(name) {
        return Err(Error::NotFound(name.to_string()));
    }

    let removed = store.remove(name)?;

    Ok(RemoveResult {
        name: name.to_string(),
        removed,
    })
}

#[derive(Debug, Serialize)]
pub struct RemoveAllResult {
    pub removed: usize,
}

impl Output for RemoveAllResult {
    fn to_human(&self) -> String {
        String::from("Removed all bookmarks")
    }
}

/// Clear the entire collection. Confirmation happens before this is called.
pub fn remove_all_bookmarks(data_dir: &Path) -> Result<RemoveAllResult> {
    let mut store = Store::open(data_dir)?;
    let removed = store.remove_all()?;

    Ok(RemoveAllResult { removed })
}
