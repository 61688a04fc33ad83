use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::record::BodyfileRecord;

/// Fixed output schema. The first column header is literally `0`, after
/// the bodyfile's legacy MD5 slot.
pub const CSV_HEADER: [&str; 11] = [
    "0", "Name", "Inode", "Mode", "UID", "GID", "Size", "ATime", "MTime", "CTime", "CrTime",
];

/// Which flavour of the four timestamp columns to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    /// `YYYY-MM-DD HH:MM:SS UTC`, with `N/A` and `Invalid` sentinels.
    #[default]
    Human,
    /// The raw epoch strings from the input.
    Epoch,
}

/// Buffered CSV writer for bodyfile records.
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
    mode: TimestampMode,
}

impl<W: Write> CsvEmitter<W> {
    pub fn new(out: W, mode: TimestampMode) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(out);

        Self { writer, mode }
    }

    pub fn write_header(&mut self) -> csv::Result<()> {
        self.writer.write_record(CSV_HEADER)
    }

    /// Write one row: the seven passthrough columns, then the timestamp
    /// quartet in the configured mode.
    pub fn write_record(&mut self, record: &BodyfileRecord<'_>) -> csv::Result<()> {
        for field in record.passthrough() {
            self.writer.write_field(field)?;
        }

        match self.mode {
            TimestampMode::Human => {
                for field in record.display_times() {
                    self.writer.write_field(field)?;
                }
            }
            TimestampMode::Epoch => {
                for field in record.epoch_times() {
                    self.writer.write_field(field)?;
                }
            }
        }

        self.writer.write_record(None::<&[u8]>)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
