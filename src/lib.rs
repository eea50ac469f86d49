//! Statclean - descriptive statistics and IQR outlier filtering
//!
//! Pipeline: parse the input, compute metrics over the full dataset, drop
//! values outside the 1.5 × IQR fences, then render the report.

pub mod data;
pub mod report;
pub mod stats;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use data::{Dataset, InputParser, LoaderError, OutlierBounds, OutlierFilter};
use stats::{Metrics, StatsCalculator, StatsError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] LoaderError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Everything produced by a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub metrics: Metrics,
    pub cleaned: Vec<i64>,
    pub removed: Vec<i64>,
    pub bounds: Option<OutlierBounds>,
}

/// Run the whole pipeline over raw input text.
pub fn process(raw: &str) -> Result<Report, ProcessError> {
    let dataset = InputParser::parse(raw).inspect_err(|e| warn!("rejected input: {e}"))?;
    analyze(&dataset)
}

/// Compute metrics and filter outliers for an already validated dataset.
pub fn analyze(dataset: &Dataset) -> Result<Report, ProcessError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset.into());
    }
    debug!("analyzing {} values", dataset.len());

    let metrics = StatsCalculator::compute_metrics(dataset.values())?;
    let outcome = OutlierFilter::filter(dataset.values());

    Ok(Report {
        metrics,
        cleaned: outcome.cleaned,
        removed: outcome.removed,
        bounds: outcome.bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_rejects_empty_dataset() {
        let empty = Dataset::from(Vec::new());
        assert_eq!(
            analyze(&empty),
            Err(ProcessError::Stats(StatsError::EmptyDataset))
        );
    }

    #[test]
    fn process_wraps_loader_errors() {
        assert!(matches!(
            process("3\n1 2"),
            Err(ProcessError::InvalidInput(LoaderError::CountMismatch { .. }))
        ));
    }
}
