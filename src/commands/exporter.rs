// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::cli;
use crate::engine::export::to_csv;
use crate::engine::filter::filter_records;
use crate::utils::load_records;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let (criteria, weeks) = cli::criteria_from_matches(m)?;
    let records = load_records(conn)?;
    let filtered = filter_records(&records, &criteria, &weeks);
    let text = to_csv(&filtered);

    match m.get_one::<String>("out") {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("Write {}", path))?;
            println!("Exported {} records to {}", filtered.len(), path);
        }
        None => println!("{}", text),
    }
    Ok(())
}
