//! `is_in` membership kernels.
//!
//! Uses plain IEEE equality for the numeric variant, not the NaN-canonicalized
//! equality [`super::generic::count_unique_and_duplicates`] relies on: a NaN
//! value never matches anything, including another NaN in the member list,
//! matching `f64`'s own `PartialEq`.

use std::collections::HashSet;

use crate::utils::hasher::Xxh3Builder;

use super::TernarySeq;

pub fn is_in_integer(values: &[Option<i64>], members: &[i64]) -> TernarySeq {
    let set: HashSet<i64, Xxh3Builder> = members.iter().copied().collect();
    TernarySeq(values.iter().map(|v| v.map(|v| set.contains(&v))).collect())
}

pub fn is_in_floating(values: &[Option<f64>], members: &[f64]) -> TernarySeq {
    let bits: HashSet<u64, Xxh3Builder> =
        members.iter().filter(|m| !m.is_nan()).map(|m| m.to_bits()).collect();
    TernarySeq(
        values
            .iter()
            .map(|v| v.map(|v| !v.is_nan() && bits.contains(&v.to_bits())))
            .collect(),
    )
}

pub fn is_in_string(values: &[Option<&str>], members: &[&str]) -> TernarySeq {
    let set: HashSet<&str, Xxh3Builder> = members.iter().copied().collect();
    TernarySeq(values.iter().map(|v| v.map(|v| set.contains(v))).collect())
}
