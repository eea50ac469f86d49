//! Report module - output formatting

mod renderer;

pub use renderer::{OutputFormat, Reporter, INVALID_INPUT_MESSAGE, NO_OUTLIERS_MESSAGE};
