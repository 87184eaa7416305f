// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for unisvc-core operations.

use rusqlite::ffi;
use thiserror::Error;

/// All possible errors that can occur in unisvc-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A primary key or unique attribute already exists.
    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    /// A reference points at a missing row, or a deleted row is still referenced.
    #[error("referential integrity violation: {0}\n  hint: the referenced student or service must exist and cannot be deleted while service records point at it")]
    ReferentialIntegrityViolation(String),

    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("service not found: {0}")]
    ServiceNotFound(i64),

    #[error("invalid cost: '{0}'\n  hint: costs have at most 2 decimal places and range from -9999.99 to 9999.99")]
    InvalidCost(String),

    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classifies engine failures into the two constraint kinds the store
/// exposes; everything else stays a generic database error.
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &err {
            let detail = message.clone().unwrap_or_else(|| failure.to_string());
            match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return Error::UniqueConstraintViolation(detail);
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Error::ReferentialIntegrityViolation(detail);
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}

/// A specialized Result type for unisvc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
