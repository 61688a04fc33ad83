use std::process::ExitCode;

use clap::{ArgAction, Parser};

mod commands;

use bdf2csv_runtime::{PROGRAM_VERSION, logging};
use commands::ConvertArgs;

const EXAMPLES: &str = "\
Examples:
  bdf2csv -i bodyfile.txt -o bodyfile.csv
  bdf2csv -i bodyfile.txt -o bodyfile.csv -e";

#[derive(Debug, Parser)]
#[command(
    name = "bdf2csv",
    version = PROGRAM_VERSION,
    about = "Linux Bodyfile to CSV Converter",
    disable_version_flag = true,
    arg_required_else_help = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Show version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return exit_for_parse_error(&e),
    };

    commands::convert::run(cli.convert)
}

/// Help and version requests exit 0; missing or bad flags exit 1.
fn exit_for_parse_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
