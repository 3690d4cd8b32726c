// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::engine::aggregate::{max_entry, sum_by};
use crate::engine::filter::active_week;
use crate::models::{Criteria, Kpi, Mode, Record, Week, NO_DATA};

/// Caller-side resolution of the active period into words; `compute_kpi`
/// passes it through unchanged.
pub fn period_label(criteria: &Criteria, weeks: &[Week]) -> String {
    match criteria.mode {
        Mode::Weekly => match active_week(weeks, criteria) {
            Some(w) => format!("Week ({} to {})", w.start, w.end),
            None => NO_DATA.to_string(),
        },
        Mode::Yearly => format!("Year {} (monthly totals)", criteria.year),
    }
}

/// Headline figures over an already-filtered snapshot. Denominators are
/// floored at 1, so an empty set yields zeros and sentinels, never an error.
pub fn compute_kpi(
    filtered: &[Record],
    criteria: &Criteria,
    weeks: &[Week],
    period_label: String,
) -> Kpi {
    let total: i64 = filtered.iter().map(|r| r.amount).sum();

    let by_category = sum_by(filtered, |r| r.category.clone());
    let (top_category, top_category_value) = match max_entry(&by_category) {
        Some((name, value)) => (name.clone(), *value),
        None => (NO_DATA.to_string(), 0),
    };

    let (average, average_label, peak_value, peak_label) = match criteria.mode {
        Mode::Weekly => {
            let days = active_week(weeks, criteria)
                .map(|w| (w.end - w.start).num_days() + 1)
                .unwrap_or(1)
                .max(1);
            let average = Decimal::from(total) / Decimal::from(days);
            let average_label = format!("Per day (≈ {} days)", days);

            let by_day = sum_by(filtered, |r| r.date);
            match max_entry(&by_day) {
                Some((date, value)) => (average, average_label, *value, format!("Date {}", date)),
                None => (average, average_label, 0, NO_DATA.to_string()),
            }
        }
        Mode::Yearly => {
            let months: BTreeSet<u32> = filtered.iter().map(|r| r.date.month()).collect();
            let denom = months.len().max(1);
            let average = Decimal::from(total) / Decimal::from(denom as i64);
            let average_label = format!("Per month (year {})", criteria.year);

            let by_month = sum_by(filtered, |r| {
                format!("{}-{:02}", r.date.year(), r.date.month())
            });
            match max_entry(&by_month) {
                Some((month, value)) => {
                    (average, average_label, *value, format!("Month {}", month))
                }
                None => (average, average_label, 0, NO_DATA.to_string()),
            }
        }
    };

    Kpi {
        total,
        average,
        average_label,
        peak_value,
        peak_label,
        top_category,
        top_category_value,
        period_label,
    }
}
