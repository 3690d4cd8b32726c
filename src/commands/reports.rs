// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;

use crate::cli;
use crate::engine::calendar::weeks_in_month;
use crate::engine::filter::filter_records;
use crate::engine::{kpi, series};
use crate::models::{Mode, NO_DATA};
use crate::utils::{
    fmt_money, fmt_money_dec, load_records, maybe_print_json, parse_month, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("weeks", sub)) => weeks(sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (criteria, weeks) = cli::criteria_from_matches(sub)?;

    let records = load_records(conn)?;
    let filtered = filter_records(&records, &criteria, &weeks);
    let period = kpi::period_label(&criteria, &weeks);
    let k = kpi::compute_kpi(&filtered, &criteria, &weeks, period);

    if !maybe_print_json(json_flag, jsonl_flag, &k)? {
        let top_detail = if k.top_category_value > 0 {
            format!("{} (largest)", fmt_money(k.top_category_value))
        } else {
            NO_DATA.to_string()
        };
        let rows = vec![
            vec![
                "Total".to_string(),
                fmt_money(k.total),
                format!("Period: {}", k.period_label),
            ],
            vec![
                "Average".to_string(),
                fmt_money_dec(&k.average),
                k.average_label.clone(),
            ],
            vec![
                "Peak".to_string(),
                fmt_money(k.peak_value),
                k.peak_label.clone(),
            ],
            vec!["Top category".to_string(), k.top_category.clone(), top_detail],
        ];
        println!("{}", pretty_table(&["Figure", "Value", "Detail"], rows));
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (criteria, weeks) = cli::criteria_from_matches(sub)?;

    let records = load_records(conn)?;
    let filtered = filter_records(&records, &criteria, &weeks);
    let points = series::trend_series(&filtered, &criteria, &weeks);

    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let label_header = match criteria.mode {
            Mode::Weekly => "Day",
            Mode::Yearly => "Month",
        };
        let rows: Vec<Vec<String>> = points
            .iter()
            .map(|p| vec![p.label.clone(), fmt_money(p.value)])
            .collect();
        println!("{}", pretty_table(&[label_header, "Amount"], rows));

        let total: i64 = points.iter().map(|p| p.value).sum();
        match criteria.mode {
            Mode::Weekly => println!("Week total: {}", fmt_money(total)),
            Mode::Yearly => println!("Year {} total: {}", criteria.year, fmt_money(total)),
        }
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (criteria, weeks) = cli::criteria_from_matches(sub)?;

    let records = load_records(conn)?;
    let filtered = filter_records(&records, &criteria, &weeks);
    let points = series::category_series(&filtered);

    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let rows: Vec<Vec<String>> = points
            .iter()
            .map(|p| vec![p.label.clone(), fmt_money(p.value)])
            .collect();
        println!("{}", pretty_table(&["Category", "Amount"], rows));

        let total: i64 = points.iter().map(|p| p.value).sum();
        if total > 0 {
            println!("Total: {}", fmt_money(total));
        } else {
            println!("{}", NO_DATA);
        }
    }
    Ok(())
}

fn weeks(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = match sub.get_one::<String>("month") {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = chrono::Utc::now().date_naive();
            (today.year(), today.month())
        }
    };
    let weeks = weeks_in_month(year, month)?;

    if !maybe_print_json(json_flag, jsonl_flag, &weeks)? {
        let rows: Vec<Vec<String>> = weeks
            .iter()
            .map(|w| vec![w.label.clone(), w.start.to_string(), w.end.to_string()])
            .collect();
        println!("{}", pretty_table(&["Week", "From", "To"], rows));
    }
    Ok(())
}
