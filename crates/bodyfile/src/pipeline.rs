use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, info, warn};

use crate::{
    emitter::{CsvEmitter, TimestampMode},
    error::ConvertError,
    record::BodyfileRecord,
    source::LineSource,
};

/// Run configuration, built by the CLI from its flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub timestamp_mode: TimestampMode,
}

/// Line accounting for a finished conversion.
///
/// `lines_read == rows_written + lines_skipped_empty + lines_malformed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines_read: usize,
    pub rows_written: usize,
    pub lines_skipped_empty: usize,
    pub lines_malformed: usize,
}

/// Stream a bodyfile from `input` to CSV on `output`.
///
/// Malformed lines are logged and skipped. Read and write failures stop the
/// conversion; rows already written stay written. The output is flushed
/// before returning success.
pub fn convert<R, W>(
    input: R,
    output: W,
    opts: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError>
where
    R: BufRead,
    W: Write,
{
    let mut source = LineSource::new(input);
    let mut emitter = CsvEmitter::new(output, opts.timestamp_mode);
    let mut summary = ConversionSummary::default();

    debug!("[convert] timestamp mode: {:?}", opts.timestamp_mode);

    emitter
        .write_header()
        .map_err(|source| ConvertError::Write { line: None, source })?;

    loop {
        let line = match source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                return Err(ConvertError::Read {
                    line: source.line_number() + 1,
                    source: e,
                });
            }
        };

        let record = match BodyfileRecord::parse(line.text) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to parse line {}: {e}", line.number);
                summary.lines_malformed += 1;
                continue;
            }
        };

        emitter
            .write_record(&record)
            .map_err(|source| ConvertError::Write {
                line: Some(line.number),
                source,
            })?;
        summary.rows_written += 1;
    }

    emitter
        .flush()
        .map_err(|source| ConvertError::Flush { source })?;

    summary.lines_read = source.line_number();
    summary.lines_skipped_empty = source.skipped_empty();

    info!(
        "[convert] {} lines read: {} rows written, {} malformed, {} blank",
        summary.lines_read,
        summary.rows_written,
        summary.lines_malformed,
        summary.lines_skipped_empty
    );

    Ok(summary)
}

/// Convert the bodyfile at `input` into a new CSV file at `output`,
/// truncating any existing file there.
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError> {
    let reader = File::open(input).map_err(|source| ConvertError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;

    // csv::Writer buffers internally, so the file goes in bare.
    let writer = File::create(output).map_err(|source| ConvertError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        "[convert_file] {} -> {}",
        input.display(),
        output.display()
    );

    convert(BufReader::new(reader), writer, opts)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
