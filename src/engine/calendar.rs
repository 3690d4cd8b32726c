// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Week;

pub fn month_start(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", year, month))
}

pub fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let last_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow::anyhow!("Invalid month number {}", month)),
    };
    NaiveDate::from_ymd_opt(year, month, last_day)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", year, month))
}

/// Partitions a month into Monday-anchored weeks clipped to its boundaries.
/// Every day of the month lands in exactly one descriptor; a month opening
/// on a Sunday gets a single-day first week.
pub fn weeks_in_month(year: i32, month: u32) -> Result<Vec<Week>> {
    let first = month_start(year, month)?;
    let last = month_end(year, month)?;

    // Monday on or before the 1st.
    let offset = first.weekday().num_days_from_monday() as i64;
    let mut cur = first - Duration::days(offset);

    let mut weeks = Vec::new();
    let mut idx = 1u32;
    while cur <= last {
        let start = cur.max(first);
        let end = (cur + Duration::days(6)).min(last);
        weeks.push(Week {
            start,
            end,
            label: format!("Week {} ({:02}-{:02})", idx, start.day(), end.day()),
        });
        idx += 1;
        cur += Duration::days(7);
    }
    Ok(weeks)
}
