// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assign;
pub mod init;
pub mod report;
pub mod seed;
pub mod service;
pub mod student;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::db::Database;
use crate::env;
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config, env::database_path());
    tracing::debug!(db_path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, work_dir))
}

/// Write pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write rendered lines, or `empty` when there are none.
pub(crate) fn write_lines(out: &mut dyn Write, lines: &[String], empty: &str) -> Result<()> {
    if lines.is_empty() {
        writeln!(out, "{empty}")?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
