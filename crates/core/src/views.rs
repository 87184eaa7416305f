// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reads of the two derived views.
//!
//! Views are plain SQL views declared in [`crate::db::SCHEMA`]; they are
//! evaluated on every read, so table changes show up immediately.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::db::{parse_db_date, Database};
use crate::error::Result;
use chrono::NaiveDate;

/// One row of `vw_student_services`: a usage joined with its student and service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentServiceDetail {
    pub student_id: String,
    pub student_name: String,
    pub service_name: String,
    pub service_date: NaiveDate,
    pub service_cost: Cost,
}

/// One row of `vw_total_cost_per_student`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTotalCost {
    pub student_id: String,
    pub total_cost: Cost,
}

/// Escape `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Database {
    /// Read the detail view.
    ///
    /// With `name_filter`, only rows whose student name contains the term
    /// (ASCII case-insensitive) are returned.
    pub fn student_service_details(
        &self,
        name_filter: Option<&str>,
    ) -> Result<Vec<StudentServiceDetail>> {
        let mut sql = String::from(
            "SELECT student_id, student_name, service_name, service_date, service_cost
             FROM vw_student_services",
        );
        let pattern = name_filter.map(|term| format!("%{}%", escape_like(term)));
        if pattern.is_some() {
            sql.push_str(" WHERE student_name LIKE ?1 ESCAPE '\\'");
        }
        sql.push_str(" ORDER BY service_date, student_id, service_name");

        let mut stmt = self.conn.prepare(&sql)?;
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<StudentServiceDetail> {
            let date_str: String = row.get(3)?;
            Ok(StudentServiceDetail {
                student_id: row.get(0)?,
                student_name: row.get(1)?,
                service_name: row.get(2)?,
                service_date: parse_db_date(&date_str, "service_date")?,
                service_cost: row.get(4)?,
            })
        };

        let rows = match &pattern {
            Some(p) => stmt.query_map(params![p], map_row)?,
            None => stmt.query_map([], map_row)?,
        }
        .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Read the per-student total view. Students without usage are absent.
    pub fn total_cost_per_student(&self) -> Result<Vec<StudentTotalCost>> {
        let mut stmt = self.conn.prepare(
            "SELECT student_id, total_cost
             FROM vw_total_cost_per_student
             ORDER BY student_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StudentTotalCost {
                    student_id: row.get(0)?,
                    total_cost: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
