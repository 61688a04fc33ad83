use std::io::{BufRead, Result};

/// One candidate bodyfile line: trimmed, non-empty, with its 1-based
/// physical line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a [u8],
}

/// Forward-only reader of bodyfile lines.
///
/// Lines are handled as raw bytes so non-UTF-8 names survive untouched.
/// The internal buffer grows to fit the longest line seen and is reused
/// for every read.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    skipped_empty: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line_no: 0,
            skipped_empty: 0,
        }
    }

    /// Read the next non-empty line.
    ///
    /// Blank (whitespace-only) lines are consumed and counted but never
    /// returned. `Ok(None)` marks end of input.
    pub fn next_line(&mut self) -> Result<Option<SourceLine<'_>>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let (start, end) = trim_bounds(&self.buf);
            if start == end {
                self.skipped_empty += 1;
                continue;
            }

            return Ok(Some(SourceLine {
                number: self.line_no,
                text: &self.buf[start..end],
            }));
        }
    }

    /// Physical lines consumed so far, blank ones included.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    pub fn skipped_empty(&self) -> usize {
        self.skipped_empty
    }
}

/// Byte range of `buf` with leading and trailing whitespace removed,
/// including the CR of a CRLF terminator. UTF-8 lines lose any Unicode
/// whitespace (NBSP, NEL, VT); other lines fall back to ASCII whitespace
/// plus VT. Blank input yields an empty range.
fn trim_bounds(buf: &[u8]) -> (usize, usize) {
    if let Ok(text) = std::str::from_utf8(buf) {
        let start = text.len() - text.trim_start().len();
        let end = start + text[start..].trim_end().len();
        return (start, end);
    }

    let start = buf
        .iter()
        .position(|&b| !is_space_byte(b))
        .unwrap_or(buf.len());
    let end = buf
        .iter()
        .rposition(|&b| !is_space_byte(b))
        .map_or(start, |i| i + 1);
    (start, end)
}

fn is_space_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
