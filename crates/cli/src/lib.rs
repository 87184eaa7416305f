// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! unisvcrs - record and report on student use of university services.
//!
//! This crate provides the command layer for the `unisvc` CLI. Storage,
//! views and reports live in `unisvc-core`; this crate adds project
//! discovery, input validation and text/JSON rendering.
//!
//! # Main Components
//!
//! - [`Database`] - SQLite-backed store for students, services and usage records
//! - [`Config`] - Project configuration (database location)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.unisvc/` directory, then open the database:
//!
//! ```rust,ignore
//! use unisvcrs::{find_work_dir, get_db_path, Config, Database};
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config, None))?;
//! db.seed()?;
//! ```

mod cli;
mod commands;
mod display;
mod validate;

pub mod config;
pub mod db;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, OutputArgs, OutputFormat, ReportCommand, ServiceCommand, StudentCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use db::Database;
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, seed } => commands::init::run(path, seed),
        Command::Seed => commands::seed::run(),
        Command::Student(cmd) => run_student(cmd),
        Command::Service(cmd) => run_service(cmd),
        Command::Assign {
            student_id,
            service_id,
            date,
            cost,
        } => commands::assign::run(&student_id, service_id, date, cost),
        Command::Report(cmd) => run_report(cmd),
    }
}

fn run_student(cmd: StudentCommand) -> Result<()> {
    match cmd {
        StudentCommand::Add {
            student_id,
            first_name,
            last_name,
            email,
        } => commands::student::add(&student_id, &first_name, &last_name, &email),
        StudentCommand::List { output } => commands::student::list(output.output),
        StudentCommand::Delete { student_id } => commands::student::delete(&student_id),
    }
}

fn run_service(cmd: ServiceCommand) -> Result<()> {
    match cmd {
        ServiceCommand::Add { name, base_cost } => commands::service::add(&name, base_cost),
        ServiceCommand::List { output } => commands::service::list(output.output),
        ServiceCommand::Delete { service_id } => commands::service::delete(service_id),
    }
}

fn run_report(cmd: ReportCommand) -> Result<()> {
    match cmd {
        ReportCommand::Usage { output } => commands::report::usage(output.output),
        ReportCommand::Users { service, output } => {
            commands::report::users(&service, output.output)
        }
        ReportCommand::Average { output } => commands::report::average(output.output),
        ReportCommand::Totals { output } => commands::report::totals(output.output),
        ReportCommand::History { name, output } => {
            commands::report::history(name.as_deref(), output.output)
        }
        ReportCommand::Summary { output } => commands::report::summary(output.output),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
