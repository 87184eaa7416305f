// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with database and log overrides cleared.
pub fn unisvc() -> Command {
    let mut cmd = cargo_bin_cmd!("unisvc");
    cmd.env_remove("UNISVC_DB").env_remove("UNISVC_LOG");
    cmd
}

/// Helper to create an initialized temp directory with no data
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    unisvc()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an initialized temp directory holding the sample data
pub fn init_seeded() -> TempDir {
    let temp = TempDir::new().unwrap();
    unisvc()
        .args(["init", "--seed"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run a command in `temp` and return its stdout.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = unisvc()
        .args(args)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "unisvc {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Run a command in `temp` and parse its stdout as JSON.
pub fn json_of(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout_of(temp, args)).unwrap()
}
