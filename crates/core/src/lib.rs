// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! unisvc-core: storage and reporting for university service usage
//!
//! This crate provides the record types, the SQLite store with its
//! constraints, indexes and derived views, the aggregate reports, and the
//! sample data set used by the unisvc CLI.

pub mod cost;
pub mod db;
pub mod error;
pub mod models;
pub mod reports;
pub mod seed;
pub mod views;

pub use cost::Cost;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{parse_date, NewService, NewUsage, Service, ServiceUsage, Student};
pub use reports::{DashboardSummary, ServiceUsageCount, StudentName};
pub use seed::SeedReport;
pub use views::{StudentServiceDetail, StudentTotalCost};
