use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use bdf2csv_bodyfile::{ConversionSummary, ConvertOptions, TimestampMode, convert_file};
use clap::Args;
use log::debug;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input bodyfile path
    #[arg(short = 'i', long = "input", value_name = "BODYFILE")]
    pub input: PathBuf,

    /// Output CSV file path
    #[arg(short = 'o', long = "output", value_name = "CSVFILE")]
    pub output: PathBuf,

    /// Keep timestamps in epoch format (default is human-readable UTC)
    #[arg(short = 'e', long = "epoch")]
    pub epoch: bool,
}

impl ConvertArgs {
    pub fn options(&self) -> ConvertOptions {
        let timestamp_mode = if self.epoch {
            TimestampMode::Epoch
        } else {
            TimestampMode::Human
        };

        ConvertOptions { timestamp_mode }
    }
}

pub fn run(args: ConvertArgs) -> ExitCode {
    match execute(&args) {
        Ok(summary) => {
            debug!("[convert] {summary:?}");
            println!(
                "Successfully converted {} to {}",
                args.input.display(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: &ConvertArgs) -> Result<ConversionSummary> {
    convert_file(&args.input, &args.output, &args.options())
        .context("Error converting bodyfile")
}
