// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering for listings and reports.
//!
//! Each function returns one string per output line so commands can print
//! them and tests can compare them directly.

use unisvc_core::{
    DashboardSummary, Service, ServiceUsageCount, Student, StudentName, StudentServiceDetail,
    StudentTotalCost,
};

/// Width of the widest value, for left-aligned columns.
fn column_width<T>(rows: &[T], cell: impl Fn(&T) -> usize) -> usize {
    rows.iter().map(cell).max().unwrap_or(0)
}

/// `S101  Omar Khalid  <omar.khalid@university.edu>`
pub fn format_students(students: &[Student]) -> Vec<String> {
    let id_width = column_width(students, |s| s.student_id.chars().count());
    let name_width = column_width(students, |s| s.full_name().chars().count());
    students
        .iter()
        .map(|s| {
            format!(
                "{:<id_width$}  {:<name_width$}  <{}>",
                s.student_id,
                s.full_name(),
                s.email
            )
        })
        .collect()
}

/// `[1] Library  10.00`
pub fn format_services(services: &[Service]) -> Vec<String> {
    let id_width = column_width(services, |s| s.service_id.to_string().len() + 2);
    let name_width = column_width(services, |s| s.service_name.chars().count());
    services
        .iter()
        .map(|s| {
            format!(
                "{:<id_width$} {:<name_width$}  {:>8}",
                format!("[{}]", s.service_id),
                s.service_name,
                s.base_cost
            )
        })
        .collect()
}

/// `Counseling     2`
pub fn format_usage_counts(counts: &[ServiceUsageCount]) -> Vec<String> {
    let name_width = column_width(counts, |c| c.service_name.chars().count());
    counts
        .iter()
        .map(|c| format!("{:<name_width$}  {}", c.service_name, c.usage_count))
        .collect()
}

pub fn format_student_names(names: &[StudentName]) -> Vec<String> {
    names
        .iter()
        .map(|n| format!("{} {}", n.first_name, n.last_name))
        .collect()
}

pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("Average service cost: {avg:.2}"),
        None => "No service records".to_string(),
    }
}

/// `S103  40.00`
pub fn format_totals(totals: &[StudentTotalCost]) -> Vec<String> {
    let id_width = column_width(totals, |t| t.student_id.chars().count());
    totals
        .iter()
        .map(|t| format!("{:<id_width$}  {:>8}", t.student_id, t.total_cost))
        .collect()
}

/// `2024-09-02  S101  Omar Khalid  Library  10.00`
pub fn format_history(rows: &[StudentServiceDetail]) -> Vec<String> {
    let id_width = column_width(rows, |r| r.student_id.chars().count());
    let name_width = column_width(rows, |r| r.student_name.chars().count());
    let service_width = column_width(rows, |r| r.service_name.chars().count());
    rows.iter()
        .map(|r| {
            format!(
                "{}  {:<id_width$}  {:<name_width$}  {:<service_width$}  {:>8}",
                r.service_date, r.student_id, r.student_name, r.service_name, r.service_cost
            )
        })
        .collect()
}

pub fn format_summary(summary: &DashboardSummary) -> Vec<String> {
    vec![
        format!("Total students:        {}", summary.total_students),
        format!("Total service records: {}", summary.total_service_records),
        format!(
            "Average service cost:  {:.2}",
            summary.average_service_cost
        ),
    ]
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
