//! Data module - input parsing and outlier filtering

mod dataset;
mod loader;
mod processor;

pub use dataset::Dataset;
pub use loader::{InputParser, LoaderError};
pub use processor::{FilterOutcome, OutlierBounds, OutlierFilter};
