// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::{Record, FALLBACK_CATEGORY, FALLBACK_METHOD};
use crate::store;
use crate::utils::parse_date;

/// Reads the export schema back in: Date,Category,Description,Method,Amount.
/// Rows with unparseable dates are dropped and counted; amounts that do not
/// parse coerce to zero. Imported rows get fresh ids.
pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let replace = m.get_flag("replace");

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let row = result?;
        let Ok(date) = parse_date(row.get(0).unwrap_or("").trim()) else {
            skipped += 1;
            continue;
        };
        let category = row.get(1).unwrap_or("").trim();
        let description = row.get(2).unwrap_or("").trim().to_string();
        let method = row.get(3).unwrap_or("").trim();
        let amount = row.get(4).unwrap_or("").trim().parse::<i64>().unwrap_or(0);

        records.push(Record {
            id: Uuid::new_v4().to_string(),
            date,
            category: if category.is_empty() {
                FALLBACK_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            description,
            amount,
            method: if method.is_empty() {
                FALLBACK_METHOD.to_string()
            } else {
                method.to_string()
            },
        });
    }

    if replace {
        store::replace_all(conn, &records)?;
    } else {
        let tx = conn.transaction()?;
        for record in &records {
            store::insert(&tx, record)?;
        }
        tx.commit()?;
    }

    if skipped > 0 {
        eprintln!("Warning: skipped {} rows with invalid dates", skipped);
    }
    println!("Imported {} records from {}", records.len(), path);
    Ok(())
}
