// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    unisvc()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized university services"));

    assert!(temp.path().join(".unisvc").exists());
    assert!(temp.path().join(".unisvc/config.toml").exists());
    assert!(temp.path().join(".unisvc/services.db").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    unisvc()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_with_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("desk");
    std::fs::create_dir(&target).unwrap();

    unisvc()
        .args(["init", "--path"])
        .arg(&target)
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(target.join(".unisvc/services.db").exists());
    assert!(!temp.path().join(".unisvc").exists());
}

#[test]
fn init_with_seed_loads_sample_data() {
    let temp = TempDir::new().unwrap();

    unisvc()
        .args(["init", "--seed"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded sample data"));

    let json = json_of(&temp, &["report", "summary", "-o", "json"]);
    assert_eq!(json["total_students"], 3);
    assert_eq!(json["total_service_records"], 6);
}

#[test]
fn commands_fail_outside_project() {
    let temp = TempDir::new().unwrap();

    unisvc()
        .args(["student", "list"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn subdirectories_find_the_project() {
    let temp = init_seeded();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    unisvc()
        .args(["student", "list"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("S101"));
}

#[test]
fn database_env_override() {
    let temp = init_temp();
    let db_path = temp.path().join("elsewhere/other.db");

    unisvc()
        .arg("seed")
        .env("UNISVC_DB", &db_path)
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(db_path.exists());
    // The default database was left empty.
    unisvc()
        .args(["student", "list"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("No students\n");
}

#[test]
fn seeding_twice_fails_without_partial_writes() {
    let temp = init_seeded();

    unisvc()
        .arg("seed")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unique constraint violation"));

    let json = json_of(&temp, &["report", "summary", "-o", "json"]);
    assert_eq!(json["total_students"], 3);
    assert_eq!(json["total_service_records"], 6);
}
