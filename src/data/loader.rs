//! Input Loader Module
//! Validates raw text input and extracts the declared count and integer values.
//!
//! Expected layout:
//! ```text
//! <N>
//! <v1> <v2> ... <vN>
//! ```
//! Whitespace around the whole input is ignored, as is anything after the
//! second line.

use log::debug;
use thiserror::Error;

use super::Dataset;

/// Reasons an input is rejected.
///
/// Every variant is reported to the user the same way (`Invalid input`); the
/// detail only reaches the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("input is empty")]
    Empty,
    #[error("expected at least 2 lines, found {0}")]
    MissingLines(usize),
    #[error("count line {0:?} is not an unsigned decimal number")]
    InvalidCount(String),
    #[error("count must be at least 1")]
    ZeroCount,
    #[error("declared {expected} values but found {found}")]
    CountMismatch { expected: usize, found: usize },
    #[error("value {0:?} is not a base-10 integer")]
    InvalidValue(String),
}

/// Parses raw input text into a [`Dataset`].
pub struct InputParser;

impl InputParser {
    /// Parse the whole input.
    ///
    /// On success the returned dataset holds exactly as many values as the
    /// first line declares.
    pub fn parse(raw: &str) -> Result<Dataset, LoaderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoaderError::Empty);
        }

        let lines: Vec<&str> = trimmed.split('\n').collect();
        if lines.len() < 2 {
            return Err(LoaderError::MissingLines(lines.len()));
        }

        let expected = Self::parse_count(lines[0])?;
        let values = Self::parse_values(lines[1])?;

        if values.len() != expected {
            return Err(LoaderError::CountMismatch {
                expected,
                found: values.len(),
            });
        }

        debug!(
            "parsed {} values ({} trailing lines ignored)",
            values.len(),
            lines.len() - 2
        );
        Ok(Dataset::from(values))
    }

    /// The count line must be ASCII digits only: no sign, no whitespace.
    fn parse_count(line: &str) -> Result<usize, LoaderError> {
        if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LoaderError::InvalidCount(line.to_string()));
        }

        let count = line
            .parse::<usize>()
            .map_err(|_| LoaderError::InvalidCount(line.to_string()))?;

        if count == 0 {
            return Err(LoaderError::ZeroCount);
        }
        Ok(count)
    }

    fn parse_values(line: &str) -> Result<Vec<i64>, LoaderError> {
        line.split_whitespace()
            .map(|tok| {
                tok.parse::<i64>()
                    .map_err(|_| LoaderError::InvalidValue(tok.to_string()))
            })
            .collect()
    }
}
