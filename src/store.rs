// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use std::fs;
use std::path::PathBuf;

use crate::models::{Record, FALLBACK_CATEGORY, FALLBACK_METHOD};
use crate::utils::parse_date;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Outlay", "outlay"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("outlay.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn = Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS records(
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        category TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        amount TEXT NOT NULL DEFAULT '0',
        method TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
    "#,
    )?;
    Ok(())
}

/// Snapshot of the store, classified at the boundary: rows whose date does
/// not parse are dropped and counted instead of reaching the engine.
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub dropped: usize,
}

pub fn load_all(conn: &Connection) -> Result<LoadOutcome> {
    let mut stmt = conn.prepare(
        "SELECT id, date, category, description, amount, method
         FROM records ORDER BY date, created_at",
    )?;
    let mut rows = stmt.query([])?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let date_raw: String = r.get(1)?;
        let category: String = r.get(2)?;
        let description: String = r.get(3)?;
        let amount_raw: String = r.get(4)?;
        let method: String = r.get(5)?;

        let Ok(date) = parse_date(date_raw.trim()) else {
            dropped += 1;
            continue;
        };
        records.push(Record {
            id,
            date,
            category: default_if_empty(category, FALLBACK_CATEGORY),
            description,
            amount: amount_raw.trim().parse::<i64>().unwrap_or(0),
            method: default_if_empty(method, FALLBACK_METHOD),
        });
    }
    Ok(LoadOutcome { records, dropped })
}

fn default_if_empty(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

pub fn insert(conn: &Connection, record: &Record) -> Result<()> {
    conn.execute(
        "INSERT INTO records(id, date, category, description, amount, method)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id,
            record.date.to_string(),
            record.category,
            record.description,
            record.amount.to_string(),
            record.method
        ],
    )?;
    Ok(())
}

/// Returns false when no record carries the id.
pub fn delete(conn: &Connection, id: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM records WHERE id=?1", params![id])?;
    Ok(n > 0)
}

pub fn replace_all(conn: &mut Connection, records: &[Record]) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM records", [])?;
    for record in records {
        tx.execute(
            "INSERT INTO records(id, date, category, description, amount, method)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.date.to_string(),
                record.category,
                record.description,
                record.amount.to_string(),
                record.method
            ],
        )?;
    }
    tx.commit()?;
    Ok(())
}

pub fn clear(conn: &Connection) -> Result<usize> {
    let n = conn.execute("DELETE FROM records", [])?;
    Ok(n)
}
