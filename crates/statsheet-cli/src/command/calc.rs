use std::path::PathBuf;

use anyhow::Context;
use statsheet_stats::calculation;

use crate::{report, util};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CalcArg {
    /// Values to analyze, separated by commas or whitespace
    values: Vec<String>,

    /// Read values from a file instead of the command line
    #[arg(long, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Number of decimal places in the text report
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CalcArg) -> anyhow::Result<()> {
    let input = read_input(arg)?;
    let calculation =
        calculation::calculate(&input).context("Failed to calculate statistics")?;
    tracing::info!(
        count = calculation.summary.count(),
        "calculated statistics"
    );

    let mut output = util::Output::create(arg.output.clone())?;
    match arg.format {
        OutputFormat::Text => output.write_with("report", |writer| {
            report::write_report(writer, &calculation, arg.precision)
        })?,
        OutputFormat::Json => output.write_json(&calculation)?,
    }
    tracing::debug!(output = %output.target(), "wrote result");

    Ok(())
}

fn read_input(arg: &CalcArg) -> anyhow::Result<String> {
    if !arg.values.is_empty() {
        return Ok(arg.values.join(" "));
    }
    match &arg.file {
        Some(path) => util::read_text_file("values", path),
        None => util::read_stdin(),
    }
}
