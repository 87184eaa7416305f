// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Database access for the CLI.
//!
//! The store itself lives in `unisvc-core`; commands reach it through this
//! module so they name a single `Database` type.

pub use unisvc_core::Database;
