// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::{Record, DEFAULT_CATEGORIES, DEFAULT_METHODS};
use crate::store;
use crate::utils::parse_month;

const FOOD_DESCS: &[&str] = &["Lunch", "Coffee", "Dinner", "Snack"];
const TRANSPORT_DESCS: &[&str] = &["Fuel", "Parking", "Ride share", "Toll"];
const BILLS_DESCS: &[&str] = &["Electricity", "Internet", "Water", "Installment"];
const GENERAL_DESCS: &[&str] = &["Groceries", "Household", "Subscription", "Misc"];

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let (year, month) = match m.get_one::<String>("month") {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = chrono::Utc::now().date_naive();
            (today.year(), today.month())
        }
    };
    let count = *m.get_one::<usize>("count").unwrap();

    let records = sample_records(year, month, count)?;
    store::replace_all(conn, &records)?;
    println!(
        "Seeded {} sample records for {}-{:02}",
        records.len(),
        year,
        month
    );
    Ok(())
}

/// Stand-in spending for a month. The generator is seeded from the month
/// itself, so repeat runs produce identical rows.
pub fn sample_records(year: i32, month: u32, count: usize) -> Result<Vec<Record>> {
    let mut state = ((year as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ u64::from(month)) | 1;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let day = 1 + (next(&mut state) % 28) as u32;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .with_context(|| format!("Invalid sample date {}-{:02}-{:02}", year, month, day))?;

        let category = DEFAULT_CATEGORIES[(next(&mut state) as usize) % DEFAULT_CATEGORIES.len()];
        let method = DEFAULT_METHODS[(next(&mut state) as usize) % DEFAULT_METHODS.len()];
        let amount = match category {
            "Bills" => 150_000 + (next(&mut state) % 600_000) as i64,
            "Food" => 15_000 + (next(&mut state) % 120_000) as i64,
            "Transport" => 10_000 + (next(&mut state) % 200_000) as i64,
            _ => 20_000 + (next(&mut state) % 250_000) as i64,
        };
        let descs = match category {
            "Food" => FOOD_DESCS,
            "Transport" => TRANSPORT_DESCS,
            "Bills" => BILLS_DESCS,
            _ => GENERAL_DESCS,
        };
        let description = descs[(next(&mut state) as usize) % descs.len()];

        records.push(Record {
            id: Uuid::new_v4().to_string(),
            date,
            category: category.to_string(),
            description: description.to_string(),
            amount,
            method: method.to_string(),
        });
    }
    Ok(records)
}

// xorshift64; repeatability matters more than quality here.
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}
