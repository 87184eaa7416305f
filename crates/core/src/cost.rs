// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-point money amounts with two fractional digits.
//!
//! [`Cost`] mirrors a `DECIMAL(6,2)` column: it holds a whole number of
//! hundredths and never goes through floating point on the way in or out of
//! the database.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest magnitude representable with six digits, two after the point.
pub const MAX_CENTS: i64 = 999_999;

/// A cost in hundredths of a currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// Builds a cost from hundredths, rejecting values outside `DECIMAL(6,2)`.
    pub fn from_cents(cents: i64) -> Result<Self> {
        if cents.unsigned_abs() > MAX_CENTS.unsigned_abs() {
            return Err(Error::InvalidCost(format_cents(cents)));
        }
        Ok(Cost(cents))
    }

    /// Builds a cost from whole units.
    pub fn from_units(units: i64) -> Result<Self> {
        units
            .checked_mul(100)
            .ok_or_else(|| Error::InvalidCost(units.to_string()))
            .and_then(Cost::from_cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Value as a float, for averages and other derived figures only.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_cents(self.0))
    }
}

impl FromStr for Cost {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCost(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        // Six significant digits at most; longer inputs would overflow i64 parsing
        if whole.trim_start_matches('0').len() > 4 {
            return Err(invalid());
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().map_err(|_| invalid())? * 100
        };
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid())?,
        };

        let cents = whole_cents + frac_cents;
        Cost::from_cents(if negative { -cents } else { cents }).map_err(|_| invalid())
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl ToSql for Cost {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Cost {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // Sums are not range checked: a total may exceed a single DECIMAL(6,2) value
        i64::column_result(value).map(Cost)
    }
}

#[cfg(test)]
#[path = "cost_tests.rs"]
mod tests;
