// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use std::io::Write;
use unisvc_core::{Cost, NewService, Service};

use crate::cli::OutputFormat;
use crate::db::Database;
use crate::display::format_services;
use crate::error::Result;
use crate::validate::validate_service_name;

use super::{open_db, write_json, write_lines};

#[derive(Serialize)]
struct ServiceListJson<'a> {
    services: &'a [Service],
}

pub fn add(name: &str, base_cost: Cost) -> Result<()> {
    let (db, _) = open_db()?;
    add_impl(&db, name, base_cost, &mut std::io::stdout())?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Returns the assigned service ID.
pub(crate) fn add_impl(
    db: &Database,
    name: &str,
    base_cost: Cost,
    out: &mut dyn Write,
) -> Result<i64> {
    let name = name.trim();
    validate_service_name(name)?;
    let service_id = db.add_service(&NewService::new(name, base_cost))?;
    writeln!(out, "Added service [{service_id}] {name} ({base_cost})")?;
    Ok(service_id)
}

pub fn list(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    list_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn list_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let services = db.list_services()?;
    match output {
        OutputFormat::Text => write_lines(out, &format_services(&services), "No services"),
        OutputFormat::Json => write_json(
            out,
            &ServiceListJson {
                services: &services,
            },
        ),
    }
}

pub fn delete(service_id: i64) -> Result<()> {
    let (db, _) = open_db()?;
    delete_impl(&db, service_id, &mut std::io::stdout())
}

pub(crate) fn delete_impl(db: &Database, service_id: i64, out: &mut dyn Write) -> Result<()> {
    db.delete_service(service_id)?;
    writeln!(out, "Deleted service [{service_id}]")?;
    Ok(())
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
