// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use outlay::commands::seed::sample_records;
use std::collections::HashSet;

#[test]
fn reruns_produce_the_same_rows() {
    let a = sample_records(2024, 5, 35).unwrap();
    let b = sample_records(2024, 5, 35).unwrap();

    assert_eq!(a.len(), 35);
    let strip =
        |rs: &[outlay::models::Record]| -> Vec<(String, String, String, i64, String)> {
            rs.iter()
                .map(|r| {
                    (
                        r.date.to_string(),
                        r.category.clone(),
                        r.description.clone(),
                        r.amount,
                        r.method.clone(),
                    )
                })
                .collect()
        };
    assert_eq!(strip(&a), strip(&b));
}

#[test]
fn ids_are_unique_even_across_identical_rows() {
    let records = sample_records(2024, 5, 35).unwrap();
    let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn rows_stay_inside_the_requested_month() {
    let records = sample_records(2023, 11, 50).unwrap();
    for r in &records {
        assert_eq!(r.date.year(), 2023);
        assert_eq!(r.date.month(), 11);
        assert!(r.amount > 0);
        assert!(!r.category.is_empty());
        assert!(!r.method.is_empty());
    }
}

#[test]
fn different_months_differ() {
    let may = sample_records(2024, 5, 35).unwrap();
    let june = sample_records(2024, 6, 35).unwrap();
    let amounts = |rs: &[outlay::models::Record]| -> Vec<i64> {
        rs.iter().map(|r| r.amount).collect()
    };
    assert_ne!(amounts(&may), amounts(&june));
}
