//! CLI argument definitions for bookmrk.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Bookmrk - a simple bookmark manager for filesystem paths.
#[derive(Parser, Debug)]
#[command(name = "bookmrk")]
#[command(author, version, about = "A simple bookmark manager", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show the version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Output in JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the bookmark store.
    /// Can also be set via the BOOKMRK_DATA_DIR environment variable.
    #[arg(long, global = true, env = "BOOKMRK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a bookmark in the host file browser
    Open {
        /// The name of the bookmark
        #[arg(short, long)]
        name: String,
    },

    /// Add a bookmark
    Add {
        /// The name of the bookmark
        #[arg(short, long)]
        name: String,

        /// The path for the bookmark
        #[arg(short, long)]
        path: String,
    },

    /// List all bookmarks
    List,

    /// Find a bookmark by exact name
    Find {
        /// The name to search for (case-sensitive)
        name: String,

        /// Print only the bookmark's path
        #[arg(long)]
        path: bool,
    },

    /// Update a bookmark
    Update {
        /// The name of the bookmark
        #[arg(short, long)]
        name: String,

        /// The new name for the bookmark
        #[arg(long)]
        new_name: Option<String>,

        /// The new path for the bookmark
        #[arg(long)]
        new_path: Option<String>,
    },

    /// Remove a bookmark
    Remove {
        /// The name of the bookmark
        #[arg(short, long)]
        name: Option<String>,

        /// Remove all bookmarks (asks for confirmation)
        #[arg(long)]
        all: bool,
    },
}
