// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Record;

/// Groups records by key and sums their amounts. The vector keeps first-seen
/// key order, which downstream maxima rely on for tie-breaks.
pub fn sum_by<K, F>(records: &[Record], key: F) -> Vec<(K, i64)>
where
    K: PartialEq,
    F: Fn(&Record) -> K,
{
    let mut groups: Vec<(K, i64)> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, sum)) => *sum += record.amount,
            None => groups.push((k, record.amount)),
        }
    }
    groups
}

/// Single left-to-right scan with strict `>` against a zero floor: ties keep
/// the earliest group, and groups that never rise above zero count as no data.
pub fn max_entry<K>(groups: &[(K, i64)]) -> Option<&(K, i64)> {
    let mut best: Option<&(K, i64)> = None;
    for entry in groups {
        if entry.1 > best.map_or(0, |b| b.1) {
            best = Some(entry);
        }
    }
    best
}
