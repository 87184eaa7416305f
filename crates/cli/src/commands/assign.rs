// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use std::io::Write;
use unisvc_core::{Cost, NewUsage};

use crate::db::Database;
use crate::error::{Error, Result};

use super::open_db;

pub fn run(
    student_id: &str,
    service_id: i64,
    date: Option<NaiveDate>,
    cost: Option<Cost>,
) -> Result<()> {
    let (db, _) = open_db()?;
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    run_impl(
        &db,
        student_id,
        service_id,
        date,
        cost,
        &mut std::io::stdout(),
    )?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Without an explicit cost the service's base cost is charged. A missing
/// service is a referential integrity failure either way. Returns the new
/// usage ID.
pub(crate) fn run_impl(
    db: &Database,
    student_id: &str,
    service_id: i64,
    date: NaiveDate,
    cost: Option<Cost>,
    out: &mut dyn Write,
) -> Result<i64> {
    let student_id = student_id.trim();
    let cost = match cost {
        Some(cost) => cost,
        None => match db.get_service(service_id) {
            Ok(service) => service.base_cost,
            Err(unisvc_core::Error::ServiceNotFound(id)) => {
                return Err(Error::ReferentialIntegrityViolation(format!(
                    "service {id} does not exist"
                )));
            }
            Err(e) => return Err(e.into()),
        },
    };

    let usage_id = db.record_usage(&NewUsage::new(student_id, service_id, date, cost))?;
    writeln!(
        out,
        "Recorded service [{service_id}] for {student_id} on {date} ({cost})"
    )?;
    Ok(usage_id)
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
