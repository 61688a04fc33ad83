use crate::{error::ParseError, timestamp::format_epoch};

/// Field separator. No escaping exists, so a name containing `|` cannot be
/// represented and such lines are rejected as malformed.
pub const DELIMITER: u8 = b'|';

/// crtime stand-in for ten-field lines; formats as "N/A".
pub const MISSING_CRTIME: &[u8] = b"0";

const FIELDS_WITHOUT_CRTIME: usize = 10;
const FIELDS_WITH_CRTIME: usize = 11;
const EXPECTED_FIELDS: &str = "10 or 11";

/// One filesystem object from a bodyfile line.
///
/// Fields borrow from the source line and are kept as raw bytes; nothing is
/// validated beyond the field count. Numeric-looking columns stay opaque
/// because walker variants disagree on mode notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyfileRecord<'a> {
    /// Legacy MD5 slot, usually `0`.
    pub marker: &'a [u8],
    pub name: &'a [u8],
    pub inode: &'a [u8],
    pub mode: &'a [u8],
    pub uid: &'a [u8],
    pub gid: &'a [u8],
    pub size: &'a [u8],
    pub atime: &'a [u8],
    pub mtime: &'a [u8],
    pub ctime: &'a [u8],
    /// [`MISSING_CRTIME`] when the line carried only ten fields.
    pub crtime: &'a [u8],
}

impl<'a> BodyfileRecord<'a> {
    /// Split a trimmed bodyfile line into its columns.
    pub fn parse(line: &'a [u8]) -> Result<Self, ParseError> {
        let mut fields: [&'a [u8]; FIELDS_WITH_CRTIME] = [MISSING_CRTIME; FIELDS_WITH_CRTIME];
        let mut got = 0;

        for field in line.split(|&b| b == DELIMITER) {
            if got < FIELDS_WITH_CRTIME {
                fields[got] = field;
            }
            got += 1;
        }

        if !(FIELDS_WITHOUT_CRTIME..=FIELDS_WITH_CRTIME).contains(&got) {
            return Err(ParseError::MalformedLine {
                expected: EXPECTED_FIELDS,
                got,
            });
        }

        let [
            marker,
            name,
            inode,
            mode,
            uid,
            gid,
            size,
            atime,
            mtime,
            ctime,
            crtime,
        ] = fields;

        Ok(Self {
            marker,
            name,
            inode,
            mode,
            uid,
            gid,
            size,
            atime,
            mtime,
            ctime,
            crtime,
        })
    }

    /// Columns copied to the output unchanged, in output order.
    pub fn passthrough(&self) -> [&'a [u8]; 7] {
        [
            self.marker,
            self.name,
            self.inode,
            self.mode,
            self.uid,
            self.gid,
            self.size,
        ]
    }

    /// atime, mtime, ctime, crtime exactly as they appeared on the line.
    pub fn epoch_times(&self) -> [&'a [u8]; 4] {
        [self.atime, self.mtime, self.ctime, self.crtime]
    }

    /// The four timestamps rendered for people; see [`format_epoch`].
    pub fn display_times(&self) -> [String; 4] {
        self.epoch_times().map(format_epoch)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
