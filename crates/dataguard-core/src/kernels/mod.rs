//! Element-wise kernels and reductions shared by [`crate::column::Column`] and
//! [`crate::validator`].
//!
//! Every element-wise kernel returns a [`Ternary`] sequence: `true`, `false`,
//! or `null` ("undefined because the input was null") per row. Reductions
//! return `Option<f64>`/`Option<i64>`, `None` meaning "no value" (all-null
//! input).

pub mod generic;
pub mod membership;
pub mod numeric;
pub mod string;

/// A row's outcome under a three-valued predicate.
pub type Ternary = Option<bool>;

/// A column-length sequence of [`Ternary`] values — the uniform output shape
/// of every element-wise kernel (comparisons, string predicates, membership).
#[derive(Debug, Clone, PartialEq)]
pub struct TernarySeq(pub Vec<Ternary>);

impl TernarySeq {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of positions whose value is exactly `false` — nulls are not
    /// failures, per the Validator's null-skipping policy.
    pub fn false_count(&self) -> usize {
        self.0.iter().filter(|v| **v == Some(false)).count()
    }
}

impl std::ops::Deref for TernarySeq {
    type Target = [Ternary];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for TernarySeq {
    type Item = Ternary;
    type IntoIter = std::vec::IntoIter<Ternary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
