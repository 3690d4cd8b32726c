// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use uuid::Uuid;

use crate::cli;
use crate::engine::filter::filter_records;
use crate::models::{Record, FALLBACK_CATEGORY, FALLBACK_METHOD};
use crate::store;
use crate::utils::{
    clamp_str, fmt_money, load_records, maybe_print_json, parse_amount, parse_date, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    if amount <= 0 {
        anyhow::bail!("Amount must be positive");
    }
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
    let method = sub
        .get_one::<String>("method")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_METHOD.to_string());
    let description = sub
        .get_one::<String>("desc")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let record = Record {
        id: Uuid::new_v4().to_string(),
        date,
        category,
        description,
        amount,
        method,
    };
    store::insert(conn, &record)?;
    println!(
        "Recorded {} on {} for {} ({})",
        fmt_money(amount),
        date,
        record.category,
        record.method
    );
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store::delete(conn, id)? {
        println!("Removed record {}", id);
        Ok(())
    } else {
        Err(anyhow::anyhow!("Record '{}' not found", id))
    }
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (criteria, weeks) = cli::criteria_from_matches(sub)?;

    let records = load_records(conn)?;
    let filtered = filter_records(&records, &criteria, &weeks);

    if !maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        let rows: Vec<Vec<String>> = filtered
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.category.clone(),
                    clamp_str(
                        if r.description.is_empty() {
                            "-"
                        } else {
                            r.description.as_str()
                        },
                        80,
                    ),
                    r.method.clone(),
                    fmt_money(r.amount),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Method", "Amount", "Id"],
                rows,
            )
        );
        if filtered.is_empty() {
            println!("No data matches the current filter.");
        } else {
            println!("{} records (matching filter)", filtered.len());
        }
    }
    Ok(())
}
