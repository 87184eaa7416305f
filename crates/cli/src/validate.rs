// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use unisvc_core::Student;

use crate::error::{Error, Result};

// Declared column widths
pub const MAX_STUDENT_ID_LENGTH: usize = 10;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Validate a required text field: non-empty after trimming and within `max` chars.
pub fn validate_field(field: &'static str, value: &str, max: usize) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(())
}

/// Validate every column of a student before it is written.
pub fn validate_student(student: &Student) -> Result<()> {
    validate_field("Student ID", &student.student_id, MAX_STUDENT_ID_LENGTH)?;
    validate_field("First name", &student.first_name, MAX_NAME_LENGTH)?;
    validate_field("Last name", &student.last_name, MAX_NAME_LENGTH)?;
    validate_field("Email", &student.email, MAX_EMAIL_LENGTH)?;
    Ok(())
}

/// Validate a service name.
pub fn validate_service_name(name: &str) -> Result<()> {
    validate_field("Service name", name, MAX_NAME_LENGTH)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
