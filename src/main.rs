//! Bookmrk CLI - a simple bookmark manager for filesystem paths.

use bookmrk::cli::{Cli, Commands};
use bookmrk::commands::{self, Output};
use bookmrk::storage;
use clap::{CommandFactory, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    // Data directory: --data-dir flag > BOOKMRK_DATA_DIR env > platform default
    let data_dir = match resolve_data_dir(cli.data_dir) {
        Ok(dir) => dir,
        Err(e) => fail(&e, json),
    };

    if let Err(e) = run_command(cli.command, &data_dir, json) {
        fail(&e, json);
    }
}

fn fail(e: &bookmrk::Error, json: bool) -> ! {
    if json {
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
    } else {
        eprintln!("{}", e);
    }
    process::exit(1);
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> bookmrk::Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => storage::default_data_dir(),
    }
}

fn run_command(
    command: Option<Commands>,
    data_dir: &Path,
    json: bool,
) -> Result<(), bookmrk::Error> {
    match command {
        Some(Commands::Open { name }) => {
            let result = commands::open_bookmark(data_dir, &name)?;
            output(&result, json);
            commands::launch_file_browser(&result.path);
        }

        Some(Commands::Add { name, path }) => {
            let result = commands::add_bookmark(data_dir, &name, &path)?;
            output(&result, json);
        }

        Some(Commands::List) => {
            let result = commands::list_bookmarks(data_dir)?;
            output(&result, json);
        }

        Some(Commands::Find { name, path }) => {
            let result = commands::find_bookmarks(data_dir, &name, path)?;
            output(&result, json);
        }

        Some(Commands::Update {
            name,
            new_name,
            new_path,
        }) => {
            let result = commands::update_bookmark(
                data_dir,
                &name,
                new_name.as_deref(),
                new_path.as_deref(),
            )?;
            output(&result, json);
        }

        Some(Commands::Remove { name, all }) => match (name, all) {
            (Some(_), true) => {
                return Err(bookmrk::Error::UsageConflict(
                    "You can't use --all and a name at the same time".to_string(),
                ));
            }
            (None, false) => {
                return Err(bookmrk::Error::UsageConflict(
                    "Provide a bookmark name or --all".to_string(),
                ));
            }
            (None, true) => {
                if confirm_remove_all()? {
                    let result = commands::remove_all_bookmarks(data_dir)?;
                    output(&result, json);
                } else if json {
                    println!("{}", serde_json::json!({ "cancelled": true }));
                } else {
                    println!("Cancelled");
                }
            }
            (Some(name), false) => {
                let result = commands::remove_bookmark(data_dir, &name)?;
                output(&result, json);
            }
        },

        None => {
            Cli::command().print_help().ok();
        }
    }

    Ok(())
}

/// Ask before wiping the whole collection. Anything but "y" declines.
fn confirm_remove_all() -> io::Result<bool> {
    print!("Are you sure you want to remove all bookmarks? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim() == "y")
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
