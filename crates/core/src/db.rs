// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed store for students, services and service usage.
//!
//! The [`Database`] struct owns the connection. Table access lives here;
//! the derived views and aggregate reports are implemented in
//! [`crate::views`] and [`crate::reports`].

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{
    NewService, NewUsage, Service, ServiceUsage, Student, DATE_FORMAT,
};

/// SQL schema: tables, supporting indexes and derived views.
///
/// Costs are stored as integer hundredths (`DECIMAL(6,2)` semantics).
/// Declared text limits: ids 10, names 50, email 100 characters.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    student_id TEXT PRIMARY KEY,          -- VARCHAR(10)
    first_name TEXT NOT NULL,             -- VARCHAR(50)
    last_name TEXT NOT NULL,              -- VARCHAR(50)
    email TEXT NOT NULL UNIQUE COLLATE NOCASE  -- VARCHAR(100)
);

CREATE TABLE IF NOT EXISTS services (
    service_id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_name TEXT NOT NULL,           -- VARCHAR(50)
    base_cost INTEGER NOT NULL            -- DECIMAL(6,2) in hundredths
);

-- Bridge entity: one row per use of a service by a student
CREATE TABLE IF NOT EXISTS student_services (
    usage_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id TEXT NOT NULL,
    service_id INTEGER NOT NULL,
    service_date TEXT NOT NULL,           -- YYYY-MM-DD
    service_cost INTEGER NOT NULL,        -- DECIMAL(6,2) in hundredths
    FOREIGN KEY (student_id) REFERENCES students(student_id),
    FOREIGN KEY (service_id) REFERENCES services(service_id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_students_email ON students(email);
CREATE INDEX IF NOT EXISTS idx_services_name ON services(service_name);
CREATE INDEX IF NOT EXISTS idx_student_services_student_service
    ON student_services(student_id, service_id);

-- Views
CREATE VIEW IF NOT EXISTS vw_student_services AS
SELECT s.student_id,
       s.first_name || ' ' || s.last_name AS student_name,
       sv.service_name,
       ss.service_date,
       ss.service_cost
FROM students s
JOIN student_services ss ON s.student_id = ss.student_id
JOIN services sv ON ss.service_id = sv.service_id;

CREATE VIEW IF NOT EXISTS vw_total_cost_per_student AS
SELECT student_id, SUM(service_cost) AS total_cost
FROM student_services
GROUP BY student_id;
"#;

/// Parse a `YYYY-MM-DD` date from the database.
pub(crate) fn parse_db_date(
    value: &str,
    column: &str,
) -> std::result::Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid date '{value}' in column '{column}'"
            ))),
        )
    })
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        student_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
    })
}

fn row_to_service(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        service_id: row.get(0)?,
        service_name: row.get(1)?,
        base_cost: row.get(2)?,
    })
}

fn row_to_usage(row: &Row<'_>) -> rusqlite::Result<ServiceUsage> {
    let date_str: String = row.get(3)?;
    Ok(ServiceUsage {
        usage_id: row.get(0)?,
        student_id: row.get(1)?,
        service_id: row.get(2)?,
        service_date: parse_db_date(&date_str, "service_date")?,
        service_cost: row.get(4)?,
    })
}

/// Create tables, indexes and views on a connection.
///
/// Every statement is `IF NOT EXISTS`, so this runs on each open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with university services operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Referential integrity is off by default in SQLite
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert a student.
    ///
    /// Fails with [`Error::UniqueConstraintViolation`] when the id or email is taken.
    pub fn add_student(&self, student: &Student) -> Result<()> {
        self.conn.execute(
            "INSERT INTO students (student_id, first_name, last_name, email)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                student.student_id,
                student.first_name,
                student.last_name,
                student.email,
            ],
        )?;
        tracing::debug!(student_id = %student.student_id, "student added");
        Ok(())
    }

    /// Get a student by ID.
    pub fn get_student(&self, student_id: &str) -> Result<Student> {
        let student = self
            .conn
            .query_row(
                "SELECT student_id, first_name, last_name, email
                 FROM students WHERE student_id = ?1",
                params![student_id],
                row_to_student,
            )
            .optional()?;

        student.ok_or_else(|| Error::StudentNotFound(student_id.to_string()))
    }

    /// Point lookup by email.
    pub fn find_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(
                "SELECT student_id, first_name, last_name, email
                 FROM students WHERE email = ?1",
                params![email],
                row_to_student,
            )
            .optional()?;
        Ok(student)
    }

    /// All students ordered by ID.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT student_id, first_name, last_name, email
             FROM students ORDER BY student_id",
        )?;
        let students = stmt
            .query_map([], row_to_student)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(students)
    }

    /// Delete a student.
    ///
    /// Blocked with [`Error::ReferentialIntegrityViolation`] while any usage
    /// row still references the student.
    pub fn delete_student(&self, student_id: &str) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM students WHERE student_id = ?1",
            params![student_id],
        )?;
        if deleted == 0 {
            return Err(Error::StudentNotFound(student_id.to_string()));
        }
        tracing::debug!(student_id, "student deleted");
        Ok(())
    }

    /// Insert a service and return its assigned ID.
    pub fn add_service(&self, service: &NewService) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO services (service_name, base_cost) VALUES (?1, ?2)",
            params![service.service_name, service.base_cost],
        )?;
        let service_id = self.conn.last_insert_rowid();
        tracing::debug!(service_id, service_name = %service.service_name, "service added");
        Ok(service_id)
    }

    /// Get a service by ID.
    pub fn get_service(&self, service_id: i64) -> Result<Service> {
        let service = self
            .conn
            .query_row(
                "SELECT service_id, service_name, base_cost
                 FROM services WHERE service_id = ?1",
                params![service_id],
                row_to_service,
            )
            .optional()?;

        service.ok_or(Error::ServiceNotFound(service_id))
    }

    /// Services with exactly this name, in ID order.
    pub fn find_services_by_name(&self, service_name: &str) -> Result<Vec<Service>> {
        let mut stmt = self.conn.prepare(
            "SELECT service_id, service_name, base_cost
             FROM services WHERE service_name = ?1 ORDER BY service_id",
        )?;
        let services = stmt
            .query_map(params![service_name], row_to_service)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(services)
    }

    /// All services ordered by ID.
    pub fn list_services(&self) -> Result<Vec<Service>> {
        let mut stmt = self.conn.prepare(
            "SELECT service_id, service_name, base_cost
             FROM services ORDER BY service_id",
        )?;
        let services = stmt
            .query_map([], row_to_service)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(services)
    }

    /// Delete a service. Blocked while any usage row references it.
    pub fn delete_service(&self, service_id: i64) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM services WHERE service_id = ?1",
            params![service_id],
        )?;
        if deleted == 0 {
            return Err(Error::ServiceNotFound(service_id));
        }
        tracing::debug!(service_id, "service deleted");
        Ok(())
    }

    /// Record a service usage and return its assigned ID.
    ///
    /// Fails with [`Error::ReferentialIntegrityViolation`] when the student or
    /// service does not exist.
    pub fn record_usage(&self, usage: &NewUsage) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO student_services (student_id, service_id, service_date, service_cost)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                usage.student_id,
                usage.service_id,
                usage.service_date.format(DATE_FORMAT).to_string(),
                usage.service_cost,
            ],
        )?;
        let usage_id = self.conn.last_insert_rowid();
        tracing::debug!(
            usage_id,
            student_id = %usage.student_id,
            service_id = usage.service_id,
            "service usage recorded"
        );
        Ok(usage_id)
    }

    /// All usage rows in insertion order.
    pub fn list_usages(&self) -> Result<Vec<ServiceUsage>> {
        let mut stmt = self.conn.prepare(
            "SELECT usage_id, student_id, service_id, service_date, service_cost
             FROM student_services ORDER BY usage_id",
        )?;
        let usages = stmt
            .query_map([], row_to_usage)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(usages)
    }

    pub fn count_students(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_usages(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM student_services", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
