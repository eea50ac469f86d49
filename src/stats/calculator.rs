//! Statistics Calculator Module
//! Handles descriptive statistics: mean, median, mode and sample standard deviation.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot compute statistics of an empty dataset")]
    EmptyDataset,
}

/// Descriptive statistics for one dataset.
///
/// `mean`, `median` and `std_dev` are already rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub mean: f64,
    pub median: f64,
    pub mode: i64,
    pub std_dev: f64,
}

/// Round to two decimal places, ties to even.
///
/// Negative zero is folded into positive zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0 + 0.0
}

/// Handles statistical calculations over integer datasets.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute the four descriptive statistics for a non-empty sequence.
    pub fn compute_metrics(values: &[i64]) -> Result<Metrics, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyDataset);
        }

        let floats: Vec<f64> = values.iter().map(|&v| v as f64).collect();

        let metrics = Metrics {
            mean: round2(Self::mean(values)),
            median: round2(Self::median(&floats)),
            mode: Self::mode(values),
            std_dev: round2(Self::sample_std_dev(&floats)),
        };

        debug!("metrics over {} values: {:?}", values.len(), metrics);
        Ok(metrics)
    }

    /// Arithmetic mean. The sum is exact in `i128` so only the final division rounds.
    fn mean(values: &[i64]) -> f64 {
        let sum: i128 = values.iter().map(|&v| v as i128).sum();
        sum as f64 / values.len() as f64
    }

    /// Median of an unsorted slice: middle element, or mean of the two middle
    /// elements for even lengths. NaN when empty.
    pub fn median(values: &[f64]) -> f64 {
        Data::new(values.to_vec()).median()
    }

    /// Most frequent value; among equally frequent values the smallest wins.
    fn mode(values: &[i64]) -> i64 {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }

        // BTreeMap iterates ascending, so keeping only strictly larger counts
        // leaves the smallest value among the ties.
        let mut best = (values[0], 0usize);
        for (&value, &count) in &counts {
            if count > best.1 {
                best = (value, count);
            }
        }
        best.0
    }

    /// Bessel-corrected standard deviation; 0 for a single value.
    fn sample_std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        values.std_dev()
    }
}
