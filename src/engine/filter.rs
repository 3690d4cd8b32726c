// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;

use crate::models::{Criteria, Mode, Record, Week};

/// Week addressed by the criteria; an out-of-range index degrades to the
/// first week rather than failing.
pub fn active_week<'a>(weeks: &'a [Week], criteria: &Criteria) -> Option<&'a Week> {
    weeks.get(criteria.week_index).or_else(|| weeks.first())
}

/// Applies the period, category, and search criteria to a snapshot and
/// returns the matches sorted by date descending. No match is an empty
/// vector, never an error.
pub fn filter_records(records: &[Record], criteria: &Criteria, weeks: &[Week]) -> Vec<Record> {
    let category = criteria
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let needle = criteria
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut out: Vec<Record> = records
        .iter()
        .filter(|r| match criteria.mode {
            Mode::Weekly => {
                let Some(week) = active_week(weeks, criteria) else {
                    return false;
                };
                r.date.year() == criteria.year
                    && r.date.month() == criteria.month
                    && r.date >= week.start
                    && r.date <= week.end
            }
            Mode::Yearly => r.date.year() == criteria.year,
        })
        .filter(|r| category.is_none_or(|c| r.category == c))
        .filter(|r| needle.as_deref().is_none_or(|q| matches_search(r, q)))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

fn matches_search(record: &Record, needle: &str) -> bool {
    format!(
        "{} {} {}",
        record.description, record.method, record.category
    )
    .to_lowercase()
    .contains(needle)
}
