//! Report Renderer
//! Formats a processing result for standard output.
//!
//! Text layout (success):
//! 1. `Mean: <2dp>`
//! 2. `Median: <2dp>`
//! 3. `Mode: <integer>`
//! 4. `Standard Deviation: <2dp>`
//! 5. `Cleaned Dataset: <values>` or `No outliers found` when nothing is left
//!
//! A rejected input renders as the single line `Invalid input`.

use std::str::FromStr;

use serde_json::json;

use crate::{ProcessError, Report};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const NO_OUTLIERS_MESSAGE: &str = "No outliers found";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
        }
    }
}

/// Renders reports. Output is built in full before anything is written.
pub struct Reporter;

impl Reporter {
    pub fn render(
        result: &Result<Report, ProcessError>,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match (result, format) {
            (Ok(report), OutputFormat::Text) => Ok(Self::render_text(report)),
            (Ok(report), OutputFormat::Json) => Self::render_json(report),
            (Err(_), OutputFormat::Text) => Ok(format!("{INVALID_INPUT_MESSAGE}\n")),
            (Err(_), OutputFormat::Json) => {
                Ok(format!("{}\n", json!({ "error": INVALID_INPUT_MESSAGE })))
            }
        }
    }

    pub fn render_text(report: &Report) -> String {
        let m = &report.metrics;
        let mut out = format!(
            "Mean: {:.2}\nMedian: {:.2}\nMode: {}\nStandard Deviation: {:.2}\n",
            m.mean, m.median, m.mode, m.std_dev
        );

        if report.cleaned.is_empty() {
            out.push_str(NO_OUTLIERS_MESSAGE);
        } else {
            let values: Vec<String> = report.cleaned.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("Cleaned Dataset: {}", values.join(" ")));
        }
        out.push('\n');

        out
    }

    pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string(report)?;
        out.push('\n');
        Ok(out)
    }
}
