//! Statclean - descriptive statistics with IQR outlier removal
//!
//! Reads `<N>` followed by a line of N integers and prints mean, median, mode,
//! sample standard deviation and the dataset with outliers removed.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use argh::FromArgs;
use log::debug;

use statclean::report::{OutputFormat, Reporter};

/// Exit status used with `--strict-exit` when the input is rejected.
const REJECTED_EXIT_CODE: u8 = 2;

#[derive(FromArgs, Debug)]
/// Descriptive statistics and 1.5 x IQR outlier filtering for a list of integers
struct Args {
    /// output format: text (default) or json
    #[argh(option, short = 'f', default = "OutputFormat::Text")]
    format: OutputFormat,

    /// read input from this file instead of standard input
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// exit with a non-zero status when the input is rejected
    #[argh(switch)]
    strict_exit: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read standard input")?;
            buf
        }
    };

    // Invalid UTF-8 simply fails token validation later on.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args: Args = argh::from_env();
    debug!("{args:?}");

    let raw = read_input(args.input.as_ref())?;
    let result = statclean::process(&raw);
    let output = Reporter::render(&result, args.format).context("Failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to standard output")?;

    if result.is_err() && args.strict_exit {
        return Ok(ExitCode::from(REJECTED_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}
