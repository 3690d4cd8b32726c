// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::engine::calendar::weeks_in_month;
use crate::models::{Criteria, Mode, Week};
use crate::utils::parse_month;

pub fn build_cli() -> Command {
    Command::new("outlay")
        .version(crate_version!())
        .about("Personal expense tracking with weekly and yearly period dashboards")
        .subcommand(Command::new("init").about("Create the database if missing and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Record, remove, and list expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .required(true)
                                .help("Whole currency units; separators like 35.000 are accepted"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .help("Defaults to 'Other'"),
                        )
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .value_name("NAME")
                                .help("Payment method, defaults to 'Cash'"),
                        )
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .value_name("TEXT")
                                .help("Free-form description"),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Remove an expense by id")
                        .arg(Arg::new("id").value_name("ID").required(true)),
                )
                .subcommand(json_flags(criteria_args(
                    Command::new("list").about("List expenses matching the active filter"),
                ))),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard views over the active filter")
                .subcommand(json_flags(criteria_args(
                    Command::new("summary")
                        .about("Headline figures: total, average, peak day/month, top category"),
                )))
                .subcommand(json_flags(criteria_args(
                    Command::new("trend")
                        .about("Spending trend: per day (weekly) or per month (yearly)"),
                )))
                .subcommand(json_flags(criteria_args(
                    Command::new("categories").about("Spending split by category, largest first"),
                )))
                .subcommand(json_flags(
                    Command::new("weeks")
                        .about("Week partition of the anchor month")
                        .arg(month_arg()),
                )),
        )
        .subcommand(criteria_args(
            Command::new("export")
                .about("Write the filtered expenses as CSV")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .help("Output path; stdout when omitted"),
                ),
        ))
        .subcommand(
            Command::new("import")
                .about("Restore expenses from an exported CSV")
                .arg(Arg::new("path").value_name("FILE").required(true))
                .arg(
                    Arg::new("replace")
                        .long("replace")
                        .action(ArgAction::SetTrue)
                        .help("Replace the store instead of appending"),
                ),
        )
        .subcommand(
            Command::new("seed")
                .about("Fill a month with repeatable sample expenses")
                .arg(month_arg())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .default_value("35"),
                ),
        )
        .subcommand(Command::new("reset").about("Delete every stored expense"))
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Anchor month, defaults to the current month")
}

fn criteria_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("mode")
            .long("mode")
            .value_name("MODE")
            .default_value("weekly")
            .help("weekly (one week of a month) or yearly (all months of a year)"),
    )
    .arg(month_arg())
    .arg(
        Arg::new("week")
            .long("week")
            .value_name("N")
            .value_parser(value_parser!(usize))
            .help("Week number inside the month, 1-based; defaults to the week containing today"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .value_name("NAME")
            .help("Keep only this exact category"),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .value_name("TEXT")
            .help("Case-insensitive match on description, method, and category"),
    )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines instead of a table"),
    )
}

/// Resolves the shared filter flags into engine criteria plus the week
/// partition of the anchor month. Without --week the week containing today
/// is picked when the anchor month is current, else the first week.
pub fn criteria_from_matches(m: &ArgMatches) -> Result<(Criteria, Vec<Week>)> {
    let mode: Mode = m.get_one::<String>("mode").unwrap().parse()?;
    let (year, month) = match m.get_one::<String>("month") {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };
    let weeks = weeks_in_month(year, month)?;
    let week_index = match m.get_one::<usize>("week") {
        Some(n) => n.saturating_sub(1),
        None => {
            let today = Utc::now().date_naive();
            weeks
                .iter()
                .position(|w| today >= w.start && today <= w.end)
                .unwrap_or(0)
        }
    };

    let criteria = Criteria {
        mode,
        year,
        month,
        week_index,
        category: m.get_one::<String>("category").cloned(),
        search: m.get_one::<String>("search").cloned(),
    };
    Ok((criteria, weeks))
}
