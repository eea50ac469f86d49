//! Stats module - descriptive statistics

mod calculator;

pub use calculator::{round2, Metrics, StatsCalculator, StatsError};
