// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::store;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    use chrono::Datelike;
    Ok((date.year(), date.month()))
}

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static pattern"));

/// Accepts amounts as typed by users: "35000", "35.000", "Rp 35.000".
/// Everything but digits is stripped before parsing.
pub fn parse_amount(s: &str) -> Result<i64> {
    let digits = NON_DIGITS.replace_all(s, "");
    if digits.is_empty() {
        anyhow::bail!("Invalid amount '{}', expected digits like 35000 or 35.000", s);
    }
    digits
        .parse::<i64>()
        .with_context(|| format!("Amount '{}' out of range", s))
}

pub fn fmt_money(n: i64) -> String {
    format!("Rp {}", group_thousands(&n.to_string()))
}

/// Fractional figures (the KPI average) render with at most two decimals.
pub fn fmt_money_dec(d: &Decimal) -> String {
    let rounded = d.round_dp(2).normalize();
    let s = rounded.to_string();
    match s.split_once('.') {
        Some((int, frac)) => format!("Rp {},{}", group_thousands(int), frac),
        None => format!("Rp {}", group_thousands(&s)),
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

pub fn clamp_str(s: &str, max: usize) -> String {
    let s = s.trim();
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Loads the snapshot the engine computes over, warning about rows the
/// store boundary had to drop.
pub fn load_records(conn: &Connection) -> Result<Vec<crate::models::Record>> {
    let outcome = store::load_all(conn)?;
    if outcome.dropped > 0 {
        eprintln!(
            "Warning: skipped {} stored records with invalid dates",
            outcome.dropped
        );
    }
    Ok(outcome.records)
}
