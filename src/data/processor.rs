//! Data Processor Module
//! Handles outlier removal using Tukey fences (1.5 × IQR).

use log::{debug, info};
use serde::Serialize;

/// Quartiles and the inclusive range of accepted values.
///
/// The public fields are for reporting. Membership is decided on exact
/// integer fences kept in quarter units, so values beyond 2^53 are compared
/// without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
    #[serde(skip)]
    lower_x4: i128,
    #[serde(skip)]
    upper_x4: i128,
}

impl OutlierBounds {
    /// Build fences from doubled quartiles (`2·Q1`, `2·Q3`).
    ///
    /// `4·lower = 4·Q1 - 6·IQR` and `4·upper = 4·Q3 + 6·IQR`.
    fn from_doubled_quartiles(q1_x2: i128, q3_x2: i128) -> Self {
        let lower_x4 = 5 * q1_x2 - 3 * q3_x2;
        let upper_x4 = 5 * q3_x2 - 3 * q1_x2;

        Self {
            q1: q1_x2 as f64 / 2.0,
            q3: q3_x2 as f64 / 2.0,
            iqr: (q3_x2 - q1_x2) as f64 / 2.0,
            lower: lower_x4 as f64 / 4.0,
            upper: upper_x4 as f64 / 4.0,
            lower_x4,
            upper_x4,
        }
    }

    /// Whether `value` lies within `[lower, upper]`.
    pub fn contains(&self, value: i64) -> bool {
        let v_x4 = 4 * value as i128;
        self.lower_x4 <= v_x4 && v_x4 <= self.upper_x4
    }
}

/// Result of a single filtering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Values kept, in original order.
    pub cleaned: Vec<i64>,
    /// Values dropped as outliers, in original order.
    pub removed: Vec<i64>,
    /// `None` when the dataset was too small to have quartiles.
    pub bounds: Option<OutlierBounds>,
}

/// Handles outlier detection and removal.
pub struct OutlierFilter;

impl OutlierFilter {
    /// Compute the quartile fences for a dataset.
    ///
    /// The sorted values are split at `len / 2`; for odd lengths the middle
    /// element belongs to neither half. Q1 and Q3 are the medians of the halves.
    pub fn compute_bounds(values: &[i64]) -> Option<OutlierBounds> {
        if values.len() < 2 {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let mid = n / 2;
        let q1_x2 = Self::doubled_median(&sorted[..mid]);
        let q3_x2 = Self::doubled_median(&sorted[mid + n % 2..]);

        Some(OutlierBounds::from_doubled_quartiles(q1_x2, q3_x2))
    }

    /// Twice the median of a sorted, non-empty slice.
    fn doubled_median(sorted: &[i64]) -> i128 {
        let n = sorted.len();
        if n % 2 == 0 {
            sorted[n / 2 - 1] as i128 + sorted[n / 2] as i128
        } else {
            2 * sorted[n / 2] as i128
        }
    }

    /// Split a dataset into kept values and outliers.
    ///
    /// Pure and single-pass: the input is never modified and the result is
    /// not re-filtered against its own quartiles.
    pub fn filter(values: &[i64]) -> FilterOutcome {
        let Some(bounds) = Self::compute_bounds(values) else {
            return FilterOutcome {
                cleaned: values.to_vec(),
                removed: Vec::new(),
                bounds: None,
            };
        };

        debug!(
            "quartiles q1={} q3={} iqr={}, accepting [{}, {}]",
            bounds.q1, bounds.q3, bounds.iqr, bounds.lower, bounds.upper
        );

        let (cleaned, removed): (Vec<i64>, Vec<i64>) =
            values.iter().partition(|&&v| bounds.contains(v));

        if !removed.is_empty() {
            info!("removed {} outlier(s): {:?}", removed.len(), removed);
        }

        FilterOutcome {
            cleaned,
            removed,
            bounds: Some(bounds),
        }
    }
}
