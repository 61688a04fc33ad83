use std::sync::OnceLock;

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

enum Sink {
    Stderr,
    #[cfg(test)]
    Memory(std::sync::Mutex<Vec<String>>),
}

/// Diagnostics for a conversion run: malformed-line warnings, the run
/// summary and fatal errors. Lines look like
/// `2024-01-02T03:04:05.678Z bdf2csv WARN  [pipeline] Failed to parse line 7: ...`
/// and are stamped in UTC so they line up with the converted timestamps.
pub struct Logger {
    level: Level,
    sink: Sink,
}

impl Logger {
    fn render(record: &Record<'_>) -> String {
        format!(
            "{} {PROGRAM_NAME} {:<5} [{}] {}",
            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            record.level(),
            component(record.target()),
            record.args()
        )
    }
}

/// Last path segment of a log target: `bdf2csv_bodyfile::pipeline` -> `pipeline`.
fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::render(record);
        match &self.sink {
            Sink::Stderr => eprintln!("{line}"),
            #[cfg(test)]
            Sink::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Threshold from `BDF2CSV_LOG_LEVEL`. Warnings stay on unless the user
/// asks for `error`; `off` is not honoured so skipped lines are never silent.
fn level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

/// Install the stderr logger at the level named by `BDF2CSV_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

/// Install the stderr logger once; later calls keep the first level.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger {
        level,
        sink: Sink::Stderr,
    });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
