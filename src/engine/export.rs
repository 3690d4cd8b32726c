// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Record;

pub const EXPORT_HEADER: &str = "Date,Category,Description,Method,Amount";

/// Renders the filtered set as delimited text in a fixed schema: dates and
/// amounts bare, text columns double-quoted with internal quotes doubled.
/// Rows keep the input order; no trailing newline.
pub fn to_csv(records: &[Record]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(EXPORT_HEADER.to_string());
    for r in records {
        rows.push(format!(
            "{},\"{}\",\"{}\",\"{}\",{}",
            r.date,
            quote(&r.category),
            quote(&r.description),
            quote(&r.method),
            r.amount
        ));
    }
    rows.join("\n")
}

fn quote(field: &str) -> String {
    field.replace('"', "\"\"")
}
