// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use outlay::engine::calendar::weeks_in_month;
use outlay::engine::filter::filter_records;
use outlay::engine::kpi::{compute_kpi, period_label};
use outlay::models::{Criteria, Mode, Record};
use rust_decimal::Decimal;

fn rec(date: &str, category: &str, amount: i64) -> Record {
    Record {
        id: format!("{}-{}-{}", date, category, amount),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.to_string(),
        description: String::new(),
        amount,
        method: "Cash".to_string(),
    }
}

fn weekly(year: i32, month: u32, week_index: usize) -> Criteria {
    Criteria {
        mode: Mode::Weekly,
        year,
        month,
        week_index,
        category: None,
        search: None,
    }
}

fn yearly(year: i32) -> Criteria {
    Criteria {
        mode: Mode::Yearly,
        year,
        month: 1,
        week_index: 0,
        category: None,
        search: None,
    }
}

#[test]
fn single_record_weekly_scenario() {
    let weeks = weeks_in_month(2024, 3).unwrap();
    let criteria = weekly(2024, 3, 1); // 2024-03-04 .. 2024-03-10
    let records = vec![rec("2024-03-06", "Food", 50_000)];

    let filtered = filter_records(&records, &criteria, &weeks);
    let label = period_label(&criteria, &weeks);
    assert_eq!(label, "Week (2024-03-04 to 2024-03-10)");

    let k = compute_kpi(&filtered, &criteria, &weeks, label.clone());
    assert_eq!(k.total, 50_000);
    assert_eq!(k.average, Decimal::from(50_000) / Decimal::from(7));
    assert_eq!(k.average_label, "Per day (≈ 7 days)");
    assert_eq!(k.peak_value, 50_000);
    assert_eq!(k.peak_label, "Date 2024-03-06");
    assert_eq!(k.top_category, "Food");
    assert_eq!(k.top_category_value, 50_000);
    assert_eq!(k.period_label, label);
}

#[test]
fn empty_set_resolves_to_zeros_and_sentinels() {
    let weeks = weeks_in_month(2024, 3).unwrap();
    for criteria in [weekly(2024, 3, 1), yearly(2024)] {
        let k = compute_kpi(&[], &criteria, &weeks, period_label(&criteria, &weeks));
        assert_eq!(k.total, 0);
        assert_eq!(k.average, Decimal::ZERO);
        assert_eq!(k.peak_value, 0);
        assert_eq!(k.peak_label, "—");
        assert_eq!(k.top_category, "—");
        assert_eq!(k.top_category_value, 0);
    }
}

#[test]
fn truncated_first_week_divides_by_its_real_day_span() {
    // 2024-09 opens on a Sunday, so week 1 is a single day
    let weeks = weeks_in_month(2024, 9).unwrap();
    let criteria = weekly(2024, 9, 0);
    let records = vec![rec("2024-09-01", "Food", 21_000)];

    let filtered = filter_records(&records, &criteria, &weeks);
    let k = compute_kpi(&filtered, &criteria, &weeks, String::new());
    assert_eq!(k.average, Decimal::from(21_000));
    assert_eq!(k.average_label, "Per day (≈ 1 days)");
}

#[test]
fn yearly_average_divides_by_distinct_months_present() {
    let weeks = weeks_in_month(2024, 1).unwrap();
    let criteria = yearly(2024);
    let records = vec![
        rec("2024-01-05", "Food", 10_000),
        rec("2024-01-20", "Food", 20_000),
        rec("2024-03-02", "Bills", 30_000),
    ];
    let k = compute_kpi(&records, &criteria, &weeks, String::new());
    assert_eq!(k.total, 60_000);
    assert_eq!(k.average, Decimal::from(30_000));
    assert_eq!(k.average_label, "Per month (year 2024)");
    assert_eq!(k.peak_value, 30_000);
    assert_eq!(k.peak_label, "Month 2024-01");
}

#[test]
fn equal_maxima_keep_the_first_encountered_group() {
    let weeks = weeks_in_month(2024, 1).unwrap();
    let criteria = yearly(2024);
    // scan order is the given order: May before March, category A before B
    let records = vec![
        rec("2024-05-02", "A", 100),
        rec("2024-03-02", "B", 100),
    ];
    let k = compute_kpi(&records, &criteria, &weeks, String::new());
    assert_eq!(k.peak_label, "Month 2024-05");
    assert_eq!(k.top_category, "A");
    assert_eq!(k.top_category_value, 100);
}

#[test]
fn peak_scan_runs_over_the_date_descending_filter_output() {
    let weeks = weeks_in_month(2024, 3).unwrap();
    let criteria = weekly(2024, 3, 1);
    let records = vec![
        rec("2024-03-05", "Food", 30_000),
        rec("2024-03-06", "Food", 30_000),
    ];
    // the filter sorts date descending, so the later day is encountered first
    let filtered = filter_records(&records, &criteria, &weeks);
    let k = compute_kpi(&filtered, &criteria, &weeks, String::new());
    assert_eq!(k.peak_label, "Date 2024-03-06");
}

#[test]
fn all_zero_amounts_report_the_no_data_sentinel() {
    let weeks = weeks_in_month(2024, 3).unwrap();
    let criteria = weekly(2024, 3, 1);
    let records = vec![rec("2024-03-06", "Food", 0)];
    let k = compute_kpi(&records, &criteria, &weeks, String::new());
    assert_eq!(k.total, 0);
    assert_eq!(k.peak_label, "—");
    assert_eq!(k.top_category, "—");
}

#[test]
fn yearly_period_label_names_the_year() {
    let weeks = weeks_in_month(2024, 1).unwrap();
    assert_eq!(
        period_label(&yearly(2024), &weeks),
        "Year 2024 (monthly totals)"
    );
}
