// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use std::io::Write;
use unisvc_core::Student;

use crate::cli::OutputFormat;
use crate::db::Database;
use crate::display::format_students;
use crate::error::Result;
use crate::validate::validate_student;

use super::{open_db, write_json, write_lines};

/// JSON output structure for the student list command.
#[derive(Serialize)]
struct StudentListJson<'a> {
    students: &'a [Student],
}

pub fn add(student_id: &str, first_name: &str, last_name: &str, email: &str) -> Result<()> {
    let (db, _) = open_db()?;
    add_impl(
        &db,
        student_id,
        first_name,
        last_name,
        email,
        &mut std::io::stdout(),
    )
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(
    db: &Database,
    student_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let student = Student::new(
        student_id.trim(),
        first_name.trim(),
        last_name.trim(),
        email.trim(),
    );
    validate_student(&student)?;
    db.add_student(&student)?;
    writeln!(
        out,
        "Added student {}: {}",
        student.student_id,
        student.full_name()
    )?;
    Ok(())
}

pub fn list(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    list_impl(&db, output, &mut std::io::stdout())
}

pub(crate) fn list_impl(db: &Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let students = db.list_students()?;
    match output {
        OutputFormat::Text => write_lines(out, &format_students(&students), "No students"),
        OutputFormat::Json => write_json(
            out,
            &StudentListJson {
                students: &students,
            },
        ),
    }
}

pub fn delete(student_id: &str) -> Result<()> {
    let (db, _) = open_db()?;
    delete_impl(&db, student_id, &mut std::io::stdout())
}

pub(crate) fn delete_impl(db: &Database, student_id: &str, out: &mut dyn Write) -> Result<()> {
    db.delete_student(student_id)?;
    writeln!(out, "Deleted student {student_id}")?;
    Ok(())
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
