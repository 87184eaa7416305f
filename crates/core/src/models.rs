// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record types for the university services store.
//!
//! Three entities: [`Student`], [`Service`] and the bridge entity
//! [`ServiceUsage`], which records that a student used a service on a given
//! date at a given cost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::error::{Error, Result};

/// Storage format for usage dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// A student, keyed by a short textual code such as `S101`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Student {
    pub fn new(
        student_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Student {
            student_id: student_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// First and last name joined by a single space, as shown in the detail view.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A service offered by the university. `service_id` is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub service_id: i64,
    pub service_name: String,
    pub base_cost: Cost,
}

/// A service that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub service_name: String,
    pub base_cost: Cost,
}

impl NewService {
    pub fn new(service_name: impl Into<String>, base_cost: Cost) -> Self {
        NewService {
            service_name: service_name.into(),
            base_cost,
        }
    }
}

/// One use of a service by a student.
///
/// `service_cost` is what was actually charged. It is independent of the
/// service's `base_cost` and may differ from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUsage {
    pub usage_id: i64,
    pub student_id: String,
    pub service_id: i64,
    pub service_date: NaiveDate,
    pub service_cost: Cost,
}

/// A usage record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsage {
    pub student_id: String,
    pub service_id: i64,
    pub service_date: NaiveDate,
    pub service_cost: Cost,
}

impl NewUsage {
    pub fn new(
        student_id: impl Into<String>,
        service_id: i64,
        service_date: NaiveDate,
        service_cost: Cost,
    ) -> Self {
        NewUsage {
            student_id: student_id.into(),
            service_id,
            service_date,
            service_cost,
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
