// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::cost::Cost;
use crate::models::parse_date;
use tempfile::TempDir;

fn cost(s: &str) -> Cost {
    s.parse().unwrap()
}

fn sara() -> Student {
    Student::new("S102", "Sara", "Noor", "sara.noor@university.edu")
}

fn setup() -> (Database, i64) {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();
    let service_id = db
        .add_service(&NewService::new("Counseling", cost("20.00")))
        .unwrap();
    (db, service_id)
}

#[test]
fn add_and_get_student() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    let retrieved = db.get_student("S102").unwrap();
    assert_eq!(retrieved, sara());
}

#[test]
fn student_not_found() {
    let db = Database::open_in_memory().unwrap();
    let result = db.get_student("S999");
    assert!(matches!(result, Err(Error::StudentNotFound(_))));
}

#[test]
fn duplicate_student_id_is_unique_violation() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    let clash = Student::new("S102", "Other", "Person", "other@university.edu");
    let result = db.add_student(&clash);
    assert!(matches!(result, Err(Error::UniqueConstraintViolation(_))));
    assert_eq!(db.count_students().unwrap(), 1);
}

#[test]
fn duplicate_email_is_unique_violation() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    let clash = Student::new("S200", "Sarah", "Noor", "sara.noor@university.edu");
    let result = db.add_student(&clash);
    assert!(matches!(result, Err(Error::UniqueConstraintViolation(_))));
}

#[test]
fn email_uniqueness_ignores_case() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    let clash = Student::new("S200", "Sarah", "Noor", "Sara.Noor@University.edu");
    let result = db.add_student(&clash);
    assert!(matches!(result, Err(Error::UniqueConstraintViolation(_))));
}

#[test]
fn find_student_by_email() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    let found = db.find_student_by_email("sara.noor@university.edu").unwrap();
    assert_eq!(found.map(|s| s.student_id), Some("S102".to_string()));
    assert!(db.find_student_by_email("nobody@university.edu").unwrap().is_none());
}

#[test]
fn list_students_ordered_by_id() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&Student::new("S103", "John", "Lee", "john.lee@university.edu"))
        .unwrap();
    db.add_student(&sara()).unwrap();

    let ids: Vec<String> = db
        .list_students()
        .unwrap()
        .into_iter()
        .map(|s| s.student_id)
        .collect();
    assert_eq!(ids, vec!["S102", "S103"]);
}

#[test]
fn service_ids_are_sequential() {
    let db = Database::open_in_memory().unwrap();
    let first = db
        .add_service(&NewService::new("Library", cost("10")))
        .unwrap();
    let second = db
        .add_service(&NewService::new("IT Support", cost("5")))
        .unwrap();
    assert_eq!(second, first + 1);

    let service = db.get_service(second).unwrap();
    assert_eq!(service.service_name, "IT Support");
    assert_eq!(service.base_cost, cost("5.00"));
}

#[test]
fn service_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(db.get_service(7), Err(Error::ServiceNotFound(7))));
}

#[test]
fn find_services_by_name_is_exact() {
    let db = Database::open_in_memory().unwrap();
    db.add_service(&NewService::new("Counseling", cost("20")))
        .unwrap();
    db.add_service(&NewService::new("Career Counseling", cost("25")))
        .unwrap();

    let found = db.find_services_by_name("Counseling").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].service_name, "Counseling");
}

#[test]
fn record_and_list_usage() {
    let (db, service_id) = setup();
    let date = parse_date("2024-09-05").unwrap();

    let usage_id = db
        .record_usage(&NewUsage::new("S102", service_id, date, cost("18.50")))
        .unwrap();

    let usages = db.list_usages().unwrap();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].usage_id, usage_id);
    assert_eq!(usages[0].service_date, date);
    assert_eq!(usages[0].service_cost, cost("18.50"));
}

#[test]
fn same_service_same_day_is_allowed() {
    let (db, service_id) = setup();
    let date = parse_date("2024-09-05").unwrap();
    let usage = NewUsage::new("S102", service_id, date, cost("20"));

    db.record_usage(&usage).unwrap();
    db.record_usage(&usage).unwrap();
    assert_eq!(db.count_usages().unwrap(), 2);
}

#[test]
fn usage_with_unknown_student_is_referential_violation() {
    let (db, service_id) = setup();
    let usage = NewUsage::new(
        "S999",
        service_id,
        parse_date("2024-09-05").unwrap(),
        cost("20"),
    );

    let result = db.record_usage(&usage);
    assert!(matches!(result, Err(Error::ReferentialIntegrityViolation(_))));
    assert_eq!(db.count_usages().unwrap(), 0);
}

#[test]
fn usage_with_unknown_service_is_referential_violation() {
    let (db, service_id) = setup();
    let usage = NewUsage::new(
        "S102",
        service_id + 100,
        parse_date("2024-09-05").unwrap(),
        cost("20"),
    );

    let result = db.record_usage(&usage);
    assert!(matches!(result, Err(Error::ReferentialIntegrityViolation(_))));
}

#[test]
fn delete_unreferenced_student() {
    let db = Database::open_in_memory().unwrap();
    db.add_student(&sara()).unwrap();

    db.delete_student("S102").unwrap();
    assert!(matches!(
        db.get_student("S102"),
        Err(Error::StudentNotFound(_))
    ));
}

#[test]
fn delete_missing_student() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.delete_student("S999"),
        Err(Error::StudentNotFound(_))
    ));
}

#[test]
fn delete_referenced_student_is_blocked() {
    let (db, service_id) = setup();
    db.record_usage(&NewUsage::new(
        "S102",
        service_id,
        parse_date("2024-09-05").unwrap(),
        cost("20"),
    ))
    .unwrap();

    let result = db.delete_student("S102");
    assert!(matches!(result, Err(Error::ReferentialIntegrityViolation(_))));
    assert!(db.get_student("S102").is_ok());
}

#[test]
fn delete_referenced_service_is_blocked() {
    let (db, service_id) = setup();
    db.record_usage(&NewUsage::new(
        "S102",
        service_id,
        parse_date("2024-09-05").unwrap(),
        cost("20"),
    ))
    .unwrap();

    let result = db.delete_service(service_id);
    assert!(matches!(result, Err(Error::ReferentialIntegrityViolation(_))));
}

#[test]
fn delete_missing_service() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.delete_service(3),
        Err(Error::ServiceNotFound(3))
    ));
}

#[test]
fn schema_declares_indexes() {
    let db = Database::open_in_memory().unwrap();
    let mut stmt = db
        .conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name")
        .unwrap();
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<std::result::Result<_, _>>()
        .unwrap();
    assert_eq!(
        names,
        vec![
            "idx_services_name",
            "idx_student_services_student_service",
            "idx_students_email",
        ]
    );
}

#[test]
fn open_file_database_twice() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("services.db");

    {
        let db = Database::open(&path).unwrap();
        db.add_student(&sara()).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.count_students().unwrap(), 1);
}

#[test]
fn corrupted_date_is_reported() {
    let (db, service_id) = setup();
    db.conn
        .execute(
            "INSERT INTO student_services (student_id, service_id, service_date, service_cost)
             VALUES ('S102', ?1, 'not-a-date', 100)",
            params![service_id],
        )
        .unwrap();

    assert!(db.list_usages().is_err());
}
