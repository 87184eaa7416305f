// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample data set for a fresh database.

use std::collections::HashMap;

use crate::cost::Cost;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{parse_date, NewService, NewUsage, Student};

/// (student_id, first_name, last_name, email)
pub const SEED_STUDENTS: &[(&str, &str, &str, &str)] = &[
    ("S101", "Omar", "Khalid", "omar.khalid@university.edu"),
    ("S102", "Sara", "Noor", "sara.noor@university.edu"),
    ("S103", "John", "Lee", "john.lee@university.edu"),
];

/// (service_name, base_cost)
pub const SEED_SERVICES: &[(&str, &str)] = &[
    ("Library", "10.00"),
    ("IT Support", "5.00"),
    ("Counseling", "20.00"),
    ("Sports Center", "15.00"),
];

/// (student_id, service_name, service_date, service_cost)
pub const SEED_USAGES: &[(&str, &str, &str, &str)] = &[
    ("S101", "Library", "2024-09-02", "10.00"),
    ("S101", "IT Support", "2024-09-03", "5.00"),
    ("S102", "Counseling", "2024-09-04", "20.00"),
    ("S103", "Sports Center", "2024-09-05", "15.00"),
    ("S103", "IT Support", "2024-09-06", "5.00"),
    ("S103", "Counseling", "2024-09-09", "20.00"),
];

/// Row counts inserted by [`Database::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub students: usize,
    pub services: usize,
    pub usages: usize,
}

impl Database {
    /// Load the sample data set in a single transaction.
    ///
    /// Either every row lands or none does: on any failure (for example a
    /// seed student already exists) the transaction rolls back. A seed
    /// service name that is already taken counts as a duplicate too.
    pub fn seed(&self) -> Result<SeedReport> {
        let tx = self.conn.unchecked_transaction()?;

        for (name, _) in SEED_SERVICES {
            if !self.find_services_by_name(name)?.is_empty() {
                return Err(Error::UniqueConstraintViolation(format!(
                    "seed service '{name}' already exists"
                )));
            }
        }

        for (id, first, last, email) in SEED_STUDENTS {
            self.add_student(&Student::new(*id, *first, *last, *email))?;
        }

        let mut service_ids = HashMap::new();
        for (name, base_cost) in SEED_SERVICES {
            let base_cost: Cost = base_cost.parse()?;
            let service_id = self.add_service(&NewService::new(*name, base_cost))?;
            service_ids.insert(*name, service_id);
        }

        for (student_id, service_name, date, service_cost) in SEED_USAGES {
            let service_id = *service_ids.get(service_name).ok_or_else(|| {
                Error::CorruptedData(format!("seed usage names unknown service '{service_name}'"))
            })?;
            self.record_usage(&NewUsage::new(
                *student_id,
                service_id,
                parse_date(date)?,
                service_cost.parse()?,
            ))?;
        }

        tx.commit()?;

        let report = SeedReport {
            students: SEED_STUDENTS.len(),
            services: SEED_SERVICES.len(),
            usages: SEED_USAGES.len(),
        };
        tracing::info!(
            students = report.students,
            services = report.services,
            usages = report.usages,
            "sample data loaded"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
