//! Numeric comparison and reduction kernels.
//!
//! Operate over an already-widened `&[Option<f64>]` view of a column
//! (see [`crate::column::Column::numeric_values`]) — both `Integer` and
//! `Floating` columns share these kernels once widened to `f64`.

use super::{Ternary, TernarySeq};

fn compare(values: &[Option<f64>], f: impl Fn(f64) -> bool) -> TernarySeq {
    TernarySeq(values.iter().map(|v| v.map(f)).collect())
}

pub fn gt(values: &[Option<f64>], x: f64) -> TernarySeq {
    compare(values, |v| v > x)
}

pub fn ge(values: &[Option<f64>], x: f64) -> TernarySeq {
    compare(values, |v| v >= x)
}

pub fn lt(values: &[Option<f64>], x: f64) -> TernarySeq {
    compare(values, |v| v < x)
}

pub fn le(values: &[Option<f64>], x: f64) -> TernarySeq {
    compare(values, |v| v <= x)
}

pub fn equal(values: &[Option<f64>], x: f64) -> TernarySeq {
    compare(values, |v| v == x)
}

/// Inclusive on both ends.
pub fn between(values: &[Option<f64>], lo: f64, hi: f64) -> TernarySeq {
    compare(values, |v| v >= lo && v <= hi)
}

fn non_null(values: &[Option<f64>]) -> impl Iterator<Item = f64> + '_ {
    values.iter().filter_map(|v| *v)
}

pub fn sum(values: &[Option<f64>]) -> Option<f64> {
    let mut any = false;
    let mut total = 0.0;
    for v in non_null(values) {
        any = true;
        total += v;
    }
    any.then_some(total)
}

pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let mut count = 0usize;
    let mut total = 0.0;
    for v in non_null(values) {
        count += 1;
        total += v;
    }
    (count > 0).then(|| total / count as f64)
}

pub fn min(values: &[Option<f64>]) -> Option<f64> {
    non_null(values).fold(None, |acc, v| match acc {
        Some(m) if m <= v => Some(m),
        _ => Some(v),
    })
}

pub fn max(values: &[Option<f64>]) -> Option<f64> {
    non_null(values).fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

/// Sample standard deviation (divisor `n - 1`); `None` when fewer than two
/// non-null values are present.
pub fn std(values: &[Option<f64>]) -> Option<f64> {
    let data: Vec<f64> = non_null(values).collect();
    if data.len() < 2 {
        return None;
    }
    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let variance =
        data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Linear interpolation between the two middle values when `n` is even.
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut data: Vec<f64> = non_null(values).collect();
    if data.is_empty() {
        return None;
    }
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = data.len();
    if n % 2 == 1 {
        Some(data[n / 2])
    } else {
        Some((data[n / 2 - 1] + data[n / 2]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[Ternary]) -> TernarySeq {
        TernarySeq(values.to_vec())
    }

    #[test]
    fn gt_propagates_null() {
        let values = [Some(1.0), None, Some(3.0)];
        assert_eq!(gt(&values, 0.0), seq(&[Some(true), None, Some(true)]));
    }

    #[test]
    fn between_is_inclusive() {
        let values = [Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
        assert_eq!(
            between(&values, 2.0, 3.0),
            seq(&[Some(false), Some(true), Some(true), Some(false)])
        );
    }

    #[test]
    fn reductions_skip_nulls() {
        let values = [Some(1.5), None, Some(3.5), None];
        assert_eq!(sum(&values), Some(5.0));
        assert_eq!(mean(&values), Some(2.5));
    }

    #[test]
    fn reductions_on_all_null_return_none() {
        let values = [None, None];
        assert_eq!(sum(&values), None);
        assert_eq!(mean(&values), None);
        assert_eq!(min(&values), None);
        assert_eq!(max(&values), None);
        assert_eq!(std(&values), None);
        assert_eq!(median(&values), None);
    }

    #[test]
    fn std_requires_at_least_two_values() {
        let values = [Some(5.0)];
        assert_eq!(std(&values), None);
    }

    #[test]
    fn median_even_interpolates() {
        let values = [Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
        assert_eq!(median(&values), Some(2.5));
    }

    #[test]
    fn median_odd_picks_middle() {
        let values = [Some(1.0), Some(5.0), Some(3.0)];
        assert_eq!(median(&values), Some(3.0));
    }
}
