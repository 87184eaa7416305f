// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::db::Database;
use crate::error::Result;

use super::open_db;

pub fn run() -> Result<()> {
    let (db, _) = open_db()?;
    run_impl(&db, &mut std::io::stdout())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, out: &mut dyn Write) -> Result<()> {
    let report = db.seed()?;
    writeln!(
        out,
        "Loaded {} students, {} services and {} service records",
        report.students, report.services, report.usages
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
