// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed aggregate reports over the current table state.
//!
//! Every report is a read-only query: running one twice without writes in
//! between returns the same rows.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::Result;

/// Number of usage rows recorded against a service name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUsageCount {
    pub service_name: String,
    pub usage_count: i64,
}

/// A student's name pair, as returned by [`Database::students_using_service`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentName {
    pub first_name: String,
    pub last_name: String,
}

/// Headline figures for the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_service_records: i64,
    /// Mean usage cost rounded to cents; 0.0 when nothing is recorded.
    pub average_service_cost: f64,
}

impl Database {
    /// Usage count per service name, most used first.
    ///
    /// Services that were never used do not appear.
    pub fn usage_count_per_service(&self) -> Result<Vec<ServiceUsageCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT sv.service_name, COUNT(*) AS usage_count
             FROM student_services ss
             JOIN services sv ON ss.service_id = sv.service_id
             GROUP BY sv.service_name
             ORDER BY usage_count DESC, sv.service_name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ServiceUsageCount {
                    service_name: row.get(0)?,
                    usage_count: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct students who used the service with exactly this name.
    pub fn students_using_service(&self, service_name: &str) -> Result<Vec<StudentName>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT s.first_name, s.last_name
             FROM students s
             JOIN student_services ss ON s.student_id = ss.student_id
             JOIN services sv ON ss.service_id = sv.service_id
             WHERE sv.service_name = ?1
             ORDER BY s.last_name, s.first_name",
        )?;
        let rows = stmt
            .query_map(params![service_name], |row| {
                Ok(StudentName {
                    first_name: row.get(0)?,
                    last_name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Arithmetic mean of all usage costs, or `None` when there are no usages.
    pub fn average_service_cost(&self) -> Result<Option<f64>> {
        let avg_cents: Option<f64> = self.conn.query_row(
            "SELECT AVG(service_cost) FROM student_services",
            [],
            |row| row.get(0),
        )?;
        Ok(avg_cents.map(|cents| cents / 100.0))
    }

    /// Student count, usage count and rounded average cost.
    pub fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let average = self.average_service_cost()?.unwrap_or(0.0);
        Ok(DashboardSummary {
            total_students: self.count_students()?,
            total_service_records: self.count_usages()?,
            average_service_cost: (average * 100.0).round() / 100.0,
        })
    }
}

#[cfg(test)]
#[path = "reports_tests.rs"]
mod tests;
