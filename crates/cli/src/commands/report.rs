// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only reports over the service records.
//!
//! Every report supports `--output json`; text output goes through
//! [`crate::display`].

use serde::Serialize;
use std::io::Write;
use unisvc_core::{ServiceUsageCount, StudentName, StudentServiceDetail, StudentTotalCost};

use crate::cli::OutputFormat;
use crate::db::Database;
use crate::display::{
    format_average, format_history, format_student_names, format_summary, format_totals,
    format_usage_counts,
};
use crate::error::Result;

use super::{open_db, write_json, write_lines};

#[derive(Serialize)]
struct UsageJson<'a> {
    services: &'a [ServiceUsageCount],
}

#[derive(Serialize)]
struct UsersJson<'a> {
    service: &'a str,
    students: &'a [StudentName],
}

#[derive(Serialize)]
struct AverageJson {
    average_service_cost: Option<f64>,
}

#[derive(Serialize)]
struct TotalsJson<'a> {
    totals: &'a [StudentTotalCost],
}

#[derive(Serialize)]
struct HistoryJson<'a> {
    records: &'a [StudentServiceDetail],
}

pub fn usage(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    usage_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn usage_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let counts = db.usage_count_per_service()?;
    match output {
        OutputFormat::Text => write_lines(out, &format_usage_counts(&counts), "No service records"),
        OutputFormat::Json => write_json(out, &UsageJson { services: &counts }),
    }
}

pub fn users(service: &str, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    users_impl(&db, service, output, &mut std::io::stdout())
}

pub(crate) fn users_impl(
    db: &Database,
    service: &str,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let names = db.students_using_service(service)?;
    match output {
        OutputFormat::Text => write_lines(
            out,
            &format_student_names(&names),
            &format!("No students used {service}"),
        ),
        OutputFormat::Json => write_json(
            out,
            &UsersJson {
                service,
                students: &names,
            },
        ),
    }
}

pub fn average(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    average_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn average_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let average = db.average_service_cost()?;
    match output {
        OutputFormat::Text => {
            writeln!(out, "{}", format_average(average))?;
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &AverageJson {
                average_service_cost: average.map(|avg| (avg * 100.0).round() / 100.0),
            },
        ),
    }
}

pub fn totals(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    totals_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn totals_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let totals = db.total_cost_per_student()?;
    match output {
        OutputFormat::Text => write_lines(out, &format_totals(&totals), "No service records"),
        OutputFormat::Json => write_json(out, &TotalsJson { totals: &totals }),
    }
}

pub fn history(name: Option<&str>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    history_impl(&db, name, output, &mut std::io::stdout())
}

pub(crate) fn history_impl(
    db: &Database,
    name: Option<&str>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let rows = db.student_service_details(name)?;
    match output {
        OutputFormat::Text => write_lines(out, &format_history(&rows), "No service records"),
        OutputFormat::Json => write_json(out, &HistoryJson { records: &rows }),
    }
}

pub fn summary(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    summary_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn summary_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let summary = db.dashboard_summary()?;
    match output {
        OutputFormat::Text => write_lines(out, &format_summary(&summary), ""),
        OutputFormat::Json => write_json(out, &summary),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
