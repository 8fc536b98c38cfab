//! Bookmrk - a simple bookmark manager for filesystem paths.
//!
//! This library provides the core functionality for the `bookmrk` CLI tool:
//! a persisted collection of uniquely-named path records with lookup,
//! uniqueness enforcement, and atomic update/delete semantics.

pub mod cli;
pub mod commands;
pub mod storage;

/// Library-level error type for bookmrk operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bookmark already exists: {0}")]
    AlreadyExists(String),

    #[error("Path does not exist: {0}")]
    PathNotFound(String),

    #[error("Bookmark not found: {0}")]
    NotFound(String),

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("{0}")]
    UsageConflict(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for bookmrk operations.
pub type Result<T> = std::result::Result<T, Error>;
