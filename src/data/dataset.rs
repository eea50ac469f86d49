//! Validated integer dataset.

/// An ordered, immutable sequence of integers.
///
/// Values keep the order in which they appeared in the input. Once built the
/// sequence is only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Number of values in the dataset.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values in original order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}
