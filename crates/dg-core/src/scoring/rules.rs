//! Pattern checks over a sorted roll.
//!
//! Every check expects its input sorted ascending. They are evaluated in
//! priority order by [`super::score`], so each one may assume the earlier
//! checks did not match.

use std::collections::BTreeMap;

/// Every face shows the same value. Vacuously true for an empty roll.
pub fn all_same(sorted: &[i32]) -> bool {
    sorted.windows(2).all(|w| w[0] == w[1])
}

/// Exactly two distinct values, and the value at the first sorted position
/// appears either once or `N - 1` times.
///
/// Only the first sorted value's count is inspected. With two distinct
/// values this is equivalent to checking the other value too, since the two
/// counts add up to `N`.
pub fn n_minus_one(sorted: &[i32]) -> bool {
    let len = sorted.len();
    if len < 2 {
        return false;
    }

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &face in sorted {
        let entry = counts.entry(face).or_insert(0);
        *entry += 1;
        if counts.len() > 2 {
            return false;
        }
    }

    let first = counts.get(&sorted[0]).copied().unwrap_or(0);
    first == 1 || first == len - 1
}

/// Each adjacent pair differs by exactly one.
pub fn is_run(sorted: &[i32]) -> bool {
    sorted.windows(2).all(|w| w[0].checked_add(1) == Some(w[1]))
}

/// No two faces share a value.
pub fn all_different(sorted: &[i32]) -> bool {
    sorted.windows(2).all(|w| w[0] != w[1])
}
