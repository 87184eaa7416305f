// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::{discard_config, get_db_path, init_work_dir, write_gitignore, Config};
use crate::db::Database;
use crate::env;
use crate::error::Result;

pub fn run(path: Option<String>, seed: bool) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let db_path = run_impl(&target_path, seed, env::database_path())?;
    println!("Initialized university services at {}", db_path.display());
    if seed {
        println!("Loaded sample data");
    }
    Ok(())
}

/// Create `.unisvc/`, the database and optionally the sample data.
/// Returns the database path.
///
/// If the database cannot be opened or seeded, the config file is removed
/// again and the directory does not count as initialized.
pub(crate) fn run_impl(
    target_path: &Path,
    seed: bool,
    db_override: Option<PathBuf>,
) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path)?;

    match create_database(&work_dir, seed, db_override) {
        Ok(db_path) => {
            tracing::info!(work_dir = %work_dir.display(), seed, "initialized");
            Ok(db_path)
        }
        Err(e) => {
            if let Err(cleanup) = discard_config(&work_dir) {
                tracing::warn!(error = %cleanup, "failed to roll back init");
            }
            Err(e)
        }
    }
}

fn create_database(work_dir: &Path, seed: bool, db_override: Option<PathBuf>) -> Result<PathBuf> {
    write_gitignore(work_dir)?;

    let config = Config::load(work_dir)?;
    let db_path = get_db_path(work_dir, &config, db_override);
    let db = Database::open(&db_path)?;
    if seed {
        db.seed()?;
    }
    Ok(db_path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
