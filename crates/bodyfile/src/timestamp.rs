use chrono::DateTime;

/// Display value for an empty or `0` timestamp: the bodyfile convention for
/// "not recorded on this filesystem".
pub const NOT_APPLICABLE: &str = "N/A";

/// Display value for a timestamp that is not a usable epoch second count.
pub const INVALID: &str = "Invalid";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render a raw epoch-seconds column as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Total and pure: never fails and never consults the local timezone.
/// `""` and `"0"` become [`NOT_APPLICABLE`]; anything that is not a signed
/// 64-bit decimal (or lies outside the calendar range chrono can represent)
/// becomes [`INVALID`].
pub fn format_epoch(raw: impl AsRef<[u8]>) -> String {
    let raw = raw.as_ref();
    if raw.is_empty() || raw == b"0" {
        return NOT_APPLICABLE.to_string();
    }

    parse_epoch(raw)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| {
            let shown = dt.format(DISPLAY_FORMAT).to_string();
            // chrono signs years past 9999; the year is printed bare instead.
            if shown.starts_with('+') {
                shown[1..].to_string()
            } else {
                shown
            }
        })
        .unwrap_or_else(|| INVALID.to_string())
}

fn parse_epoch(raw: &[u8]) -> Option<i64> {
    std::str::from_utf8(raw).ok()?.parse::<i64>().ok()
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
