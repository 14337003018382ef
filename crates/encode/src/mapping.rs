//! Request-scoped bidirectional label mapping.

use caddie_shot::{Bend, Category, Lie, ShotShape};

/// Bidirectional mapping between category values and integer codes.
///
/// Codes are assigned to the distinct values seen, ordered by their
/// canonical label, so `"Fairway" < "Rough" < "Sand" < "Tee Box"`. A mapping
/// is built for one recommendation cycle and dropped with it: category sets
/// differ between users and requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMapping<T> {
    /// `values[code]` is the value assigned that code.
    values: Vec<T>,
}

impl<T: Category> LabelMapping<T> {
    /// Builds a mapping over the distinct values in `seen`.
    pub fn fit(seen: impl IntoIterator<Item = T>) -> Self {
        let mut values: Vec<T> = seen.into_iter().collect();
        values.sort_by_key(|v| v.label());
        values.dedup();
        Self { values }
    }

    /// Code assigned to `value`, if it was seen when the mapping was built.
    pub fn code(&self, value: T) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// Value assigned `code`, if any.
    pub fn value(&self, code: usize) -> Option<T> {
        self.values.get(code).copied()
    }

    /// Values in code order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The three categorical mappings used within one recommendation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMappings {
    pub lie: LabelMapping<Lie>,
    pub bend: LabelMapping<Bend>,
    pub shot_shape: LabelMapping<ShotShape>,
}
