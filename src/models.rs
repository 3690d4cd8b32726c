// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Placeholder shown wherever a figure has no data behind it.
pub const NO_DATA: &str = "—";

pub const FALLBACK_CATEGORY: &str = "Other";
pub const FALLBACK_METHOD: &str = "Cash";

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Health",
    "Entertainment",
    "Education",
    "Donation",
    "Other",
];

pub const DEFAULT_METHODS: &[&str] = &["Cash", "E-Wallet", "Transfer", "Card"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: i64, // whole currency units
    pub method: String,
}

/// Reporting granularity: one week of a month, or all months of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Weekly,
    Yearly,
}

#[derive(Debug, Error)]
#[error("Invalid mode '{0}', expected weekly or yearly")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Mode::Weekly),
            "yearly" => Ok(Mode::Yearly),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Criteria {
    pub mode: Mode,
    pub year: i32,
    pub month: u32, // 1-based; only constrains weekly mode
    pub week_index: usize,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// One Monday-anchored window clipped to its month's boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate, // inclusive
    pub label: String,  // "Week N (DD-DD)"
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub total: i64,
    pub average: Decimal,
    pub average_label: String,
    pub peak_value: i64,
    pub peak_label: String,
    pub top_category: String,
    pub top_category_value: i64,
    pub period_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: i64,
}
