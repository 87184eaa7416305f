// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use unisvc_core::{parse_date, Cost};

pub use args::{OutputArgs, OutputFormat};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn cost_arg(s: &str) -> Result<Cost, String> {
    s.parse().map_err(|e: unisvc_core::Error| e.to_string())
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "unisvc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record which students used which university services, and report on it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a .unisvc directory and an empty database
    #[command(after_help = "\
Examples:
  unisvc init                  Initialize in the current directory
  unisvc init --seed           Initialize and load the sample data
  unisvc init --path ../desk   Initialize in another directory")]
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,

        /// Load the sample data set after creating the database
        #[arg(long)]
        seed: bool,
    },

    /// Load the sample students, services and usage records
    Seed,

    /// Manage students
    #[command(subcommand)]
    Student(StudentCommand),

    /// Manage services
    #[command(subcommand)]
    Service(ServiceCommand),

    /// Record that a student used a service
    #[command(after_help = "\
Examples:
  unisvc assign S101 2                      Today, at the service's base cost
  unisvc assign S101 2 --date 2024-09-03    On a given date
  unisvc assign S101 2 --cost 4.50          At a discounted cost")]
    Assign {
        /// Student ID
        #[arg(value_parser = non_empty_string)]
        student_id: String,

        /// Service ID
        service_id: i64,

        /// Usage date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = date_arg)]
        date: Option<NaiveDate>,

        /// Cost actually charged (defaults to the service's base cost)
        #[arg(long, value_parser = cost_arg, allow_negative_numbers = true)]
        cost: Option<Cost>,
    },

    /// Aggregate reports and view reads
    #[command(subcommand)]
    Report(ReportCommand),
}

/// Student management commands.
#[derive(Subcommand)]
pub enum StudentCommand {
    /// Add a student
    Add {
        /// Student ID (e.g. S104)
        #[arg(value_parser = non_empty_string)]
        student_id: String,
        #[arg(value_parser = non_empty_string)]
        first_name: String,
        #[arg(value_parser = non_empty_string)]
        last_name: String,
        #[arg(value_parser = non_empty_string)]
        email: String,
    },
    /// List all students
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Delete a student with no service records
    Delete {
        student_id: String,
    },
}

/// Service management commands.
#[derive(Subcommand)]
pub enum ServiceCommand {
    /// Add a service
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Base cost (e.g. 12.50)
        #[arg(value_parser = cost_arg, allow_negative_numbers = true)]
        base_cost: Cost,
    },
    /// List all services
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Delete a service with no service records
    Delete {
        service_id: i64,
    },
}

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommand {
    /// Number of service records per service
    Usage {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Students who used the named service
    Users {
        /// Exact service name (e.g. "Counseling")
        service: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Average cost over all service records
    Average {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Total cost per student
    Totals {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Service history, one row per service record
    History {
        /// Only rows whose student name contains this text
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Student count, record count and average cost
    Summary {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
