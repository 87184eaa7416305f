// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use yare::parameterized;

#[test]
fn test_usage_text() {
    let mut ctx = TestContext::seeded();
    usage_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(
        ctx.output(),
        "Counseling     2\nIT Support     2\nLibrary        1\nSports Center  1\n"
    );
}

#[test]
fn test_usage_json() {
    let mut ctx = TestContext::seeded();
    usage_impl(&ctx.db, OutputFormat::Json, &mut ctx.out).unwrap();

    let json = ctx.json();
    let services = json["services"].as_array().unwrap();
    assert_eq!(services.len(), 4);
    assert_eq!(services[0]["service_name"], "Counseling");
    assert_eq!(services[0]["usage_count"], 2);
}

#[test]
fn test_users_of_counseling() {
    let mut ctx = TestContext::seeded();
    users_impl(&ctx.db, "Counseling", OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), "John Lee\nSara Noor\n");
}

#[test]
fn test_users_of_unused_service() {
    let mut ctx = TestContext::seeded();
    users_impl(&ctx.db, "Parking", OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), "No students used Parking\n");
}

#[test]
fn test_users_json() {
    let mut ctx = TestContext::seeded();
    users_impl(&ctx.db, "IT Support", OutputFormat::Json, &mut ctx.out).unwrap();

    let json = ctx.json();
    assert_eq!(json["service"], "IT Support");
    let students = json["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["last_name"], "Khalid");
    assert_eq!(students[1]["last_name"], "Lee");
}

#[test]
fn test_average_text() {
    let mut ctx = TestContext::seeded();
    average_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), "Average service cost: 12.50\n");
}

#[test]
fn test_average_empty() {
    let mut ctx = TestContext::new();
    average_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), "No service records\n");

    ctx.clear();
    average_impl(&ctx.db, OutputFormat::Json, &mut ctx.out).unwrap();
    assert!(ctx.json()["average_service_cost"].is_null());
}

#[test]
fn test_average_json() {
    let mut ctx = TestContext::seeded();
    average_impl(&ctx.db, OutputFormat::Json, &mut ctx.out).unwrap();
    assert_eq!(ctx.json()["average_service_cost"], 12.5);
}

#[test]
fn test_totals_text() {
    let mut ctx = TestContext::seeded();
    totals_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(
        ctx.output(),
        "S101     15.00\nS102     20.00\nS103     40.00\n"
    );
}

#[test]
fn test_totals_json() {
    let mut ctx = TestContext::seeded();
    totals_impl(&ctx.db, OutputFormat::Json, &mut ctx.out).unwrap();

    let json = ctx.json();
    let totals = json["totals"].as_array().unwrap();
    assert_eq!(totals[2]["student_id"], "S103");
    assert_eq!(totals[2]["total_cost"], "40.00");
}

#[test]
fn test_history_all() {
    let mut ctx = TestContext::seeded();
    history_impl(&ctx.db, None, OutputFormat::Text, &mut ctx.out).unwrap();

    let output = ctx.output();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("2024-09-02  S101  Omar Khalid"));
    assert!(lines[5].starts_with("2024-09-09  S103  John Lee"));
}

#[parameterized(
    exact_last_name = { "Lee", 3 },
    lowercase = { "omar", 2 },
    partial = { "a", 3 },
    no_match = { "Zed", 0 },
)]
fn test_history_name_filter(term: &str, expected: usize) {
    let mut ctx = TestContext::seeded();
    history_impl(&ctx.db, Some(term), OutputFormat::Json, &mut ctx.out).unwrap();
    assert_eq!(ctx.json()["records"].as_array().unwrap().len(), expected);
}

#[test]
fn test_history_empty() {
    let mut ctx = TestContext::new();
    history_impl(&ctx.db, None, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), "No service records\n");
}

#[test]
fn test_summary_text() {
    let mut ctx = TestContext::seeded();
    summary_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(
        ctx.output(),
        "Total students:        3\nTotal service records: 6\nAverage service cost:  12.50\n"
    );
}

#[test]
fn test_summary_json_empty() {
    let mut ctx = TestContext::new();
    summary_impl(&ctx.db, OutputFormat::Json, &mut ctx.out).unwrap();

    let json = ctx.json();
    assert_eq!(json["total_students"], 0);
    assert_eq!(json["total_service_records"], 0);
    assert_eq!(json["average_service_cost"], 0.0);
}

#[test]
fn test_reports_are_repeatable() {
    let mut ctx = TestContext::seeded();
    usage_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    totals_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    let first = ctx.output();

    ctx.clear();
    usage_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    totals_impl(&ctx.db, OutputFormat::Text, &mut ctx.out).unwrap();
    assert_eq!(ctx.output(), first);
}
