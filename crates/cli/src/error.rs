// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the unisvcrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'unisvc init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    #[error("referential integrity violation: {0}\n  hint: the referenced student or service must exist and cannot be deleted while service records point at it")]
    ReferentialIntegrityViolation(String),

    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("service not found: {0}")]
    ServiceNotFound(i64),

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    /// Any other store failure (invalid stored data, engine errors).
    #[error(transparent)]
    Store(unisvc_core::Error),
}

/// A specialized Result type for unisvcrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<unisvc_core::Error> for Error {
    fn from(e: unisvc_core::Error) -> Self {
        match e {
            unisvc_core::Error::UniqueConstraintViolation(s) => Error::UniqueConstraintViolation(s),
            unisvc_core::Error::ReferentialIntegrityViolation(s) => {
                Error::ReferentialIntegrityViolation(s)
            }
            unisvc_core::Error::StudentNotFound(id) => Error::StudentNotFound(id),
            unisvc_core::Error::ServiceNotFound(id) => Error::ServiceNotFound(id),
            unisvc_core::Error::Io(e) => Error::Io(e),
            other => Error::Store(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
