// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::utils::{clamp_str, fmt_money, fmt_money_dec, parse_amount, parse_date, parse_month};
use rust_decimal::Decimal;

#[test]
fn parse_amount_strips_grouping_separators() {
    assert_eq!(parse_amount("35000").unwrap(), 35_000);
    assert_eq!(parse_amount("35.000").unwrap(), 35_000);
    assert_eq!(parse_amount("Rp 1.234.567").unwrap(), 1_234_567);
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("").is_err());
}

#[test]
fn parse_month_splits_year_and_month() {
    assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
    assert!(parse_month("2024-13").is_err());
    assert!(parse_month("March 2024").is_err());
}

#[test]
fn parse_date_requires_iso_form() {
    assert_eq!(
        parse_date("2024-03-06").unwrap().to_string(),
        "2024-03-06"
    );
    assert!(parse_date("06/03/2024").is_err());
}

#[test]
fn fmt_money_groups_thousands_with_dots() {
    assert_eq!(fmt_money(0), "Rp 0");
    assert_eq!(fmt_money(35_000), "Rp 35.000");
    assert_eq!(fmt_money(1_234_567), "Rp 1.234.567");
}

#[test]
fn fmt_money_dec_rounds_to_two_decimals() {
    let avg = Decimal::from(50_000) / Decimal::from(7);
    assert_eq!(fmt_money_dec(&avg), "Rp 7.142,86");
    assert_eq!(fmt_money_dec(&Decimal::from(45_000)), "Rp 45.000");
}

#[test]
fn clamp_str_trims_and_truncates_with_an_ellipsis() {
    assert_eq!(clamp_str("  lunch  ", 10), "lunch");
    let clamped = clamp_str("a very long description that keeps going", 10);
    assert_eq!(clamped.chars().count(), 10);
    assert!(clamped.ends_with('…'));
}
