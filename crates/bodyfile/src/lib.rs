//! Bodyfile to CSV conversion.
//!
//! A bodyfile is the pipe-delimited filesystem metadata dump produced by
//! Sleuth Kit style walkers. Each line is read by [`LineSource`], split into
//! a [`BodyfileRecord`], and written as one CSV row by [`CsvEmitter`].
//! [`convert`] wires the three together.

mod emitter;
mod error;
mod pipeline;
mod record;
mod source;
mod timestamp;

pub use emitter::{CSV_HEADER, CsvEmitter, TimestampMode};
pub use error::{ConvertError, ParseError};
pub use pipeline::{ConversionSummary, ConvertOptions, convert, convert_file};
pub use record::{BodyfileRecord, DELIMITER, MISSING_CRTIME};
pub use source::{LineSource, SourceLine};
pub use timestamp::{INVALID, NOT_APPLICABLE, format_epoch};
