//! Kernels defined for every column kind: null-testing and uniqueness
//! counting.

use std::collections::HashSet;
use std::hash::Hash;

use crate::utils::hasher::Xxh3Builder;

use super::TernarySeq;

/// `true` where the row holds a value, `false` where it's null. Unlike every
/// other kernel, this one never itself produces `None` — a row being null is
/// exactly the thing being tested, not an unknown to propagate.
pub fn not_null(is_null: &[bool]) -> TernarySeq {
    TernarySeq(is_null.iter().map(|n| Some(!n)).collect())
}

/// Counts distinct and repeated values among an iterator of canonical,
/// already-null-filtered keys (row order doesn't matter). `duplicates` is the
/// number of occurrences beyond each value's first: a value appearing 3 times
/// contributes 2 to `duplicates`, not 3.
pub fn count_unique_and_duplicates<T>(keys: impl Iterator<Item = T>) -> (usize, usize)
where
    T: Eq + Hash,
{
    let mut seen: HashSet<T, Xxh3Builder> = HashSet::with_hasher(Xxh3Builder::default());
    let mut total = 0usize;
    for key in keys {
        total += 1;
        seen.insert(key);
    }
    let unique = seen.len();
    (unique, total - unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_never_produces_unknown() {
        let mask = [false, true, false];
        assert_eq!(
            not_null(&mask),
            TernarySeq(vec![Some(true), Some(false), Some(true)])
        );
    }

    #[test]
    fn counts_unique_and_duplicates() {
        let keys = [1i64, 2, 2, 3, 3, 3].into_iter();
        let (unique, duplicates) = count_unique_and_duplicates(keys);
        assert_eq!(unique, 3);
        assert_eq!(duplicates, 3);
    }

    #[test]
    fn empty_input_has_no_duplicates() {
        let keys: std::iter::Empty<i64> = std::iter::empty();
        assert_eq!(count_unique_and_duplicates(keys), (0, 0));
    }
}
