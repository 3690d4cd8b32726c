// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration};

use crate::engine::aggregate::sum_by;
use crate::engine::filter::active_week;
use crate::models::{Criteria, Mode, Record, SeriesPoint, Week};

/// Categories beyond this many collapse into one combined point.
const TOP_CATEGORIES: usize = 7;

pub const COMBINED_LABEL: &str = "Other (combined)";

/// Trend points for the active period. The series is always dense: one
/// zero-filled point per day of the active week, or exactly twelve monthly
/// points, whatever the data holds.
pub fn trend_series(filtered: &[Record], criteria: &Criteria, weeks: &[Week]) -> Vec<SeriesPoint> {
    match criteria.mode {
        Mode::Weekly => {
            let Some(week) = active_week(weeks, criteria) else {
                return Vec::new();
            };
            let by_day = sum_by(filtered, |r| r.date);
            let mut points = Vec::new();
            let mut cur = week.start;
            while cur <= week.end {
                let value = by_day
                    .iter()
                    .find(|(day, _)| *day == cur)
                    .map_or(0, |(_, v)| *v);
                points.push(SeriesPoint {
                    label: cur.format("%m-%d").to_string(),
                    value,
                });
                cur += Duration::days(1);
            }
            points
        }
        Mode::Yearly => {
            let by_month = sum_by(filtered, |r| r.date.month());
            (1..=12u32)
                .map(|month| SeriesPoint {
                    label: format!("{:02}", month),
                    value: by_month
                        .iter()
                        .find(|(m, _)| *m == month)
                        .map_or(0, |(_, v)| *v),
                })
                .collect()
        }
    }
}

/// Category distribution, largest first. The stable sort keeps encounter
/// order among equal sums; past the top seven the remainder merges into a
/// single combined point.
pub fn category_series(filtered: &[Record]) -> Vec<SeriesPoint> {
    let mut groups = sum_by(filtered, |r| r.category.clone());
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let mut points: Vec<SeriesPoint> = groups
        .iter()
        .take(TOP_CATEGORIES)
        .map(|(name, value)| SeriesPoint {
            label: name.clone(),
            value: *value,
        })
        .collect();
    if groups.len() > TOP_CATEGORIES {
        let rest: i64 = groups[TOP_CATEGORIES..].iter().map(|(_, v)| *v).sum();
        points.push(SeriesPoint {
            label: COMBINED_LABEL.to_string(),
            value: rest,
        });
    }
    points
}
