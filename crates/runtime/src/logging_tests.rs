use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

fn memory_logger(level: Level) -> Logger {
    Logger {
        level,
        sink: Sink::Memory(std::sync::Mutex::new(Vec::new())),
    }
}

fn captured(logger: &Logger) -> Vec<String> {
    match &logger.sink {
        Sink::Memory(lines) => lines.lock().unwrap().clone(),
        Sink::Stderr => Vec::new(),
    }
}

#[test]
#[serial]
fn level_from_env_cases() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some(" info "), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some(""), Level::Warn),
        (Some("garbage"), Level::Warn),
        (Some("off"), Level::Warn),
    ];

    for (value, expected) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, v) },
            None => unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) },
        }

        let lvl = level_from_env();
        assert_eq!(
            lvl, *expected,
            "env {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
}

#[test]
fn component_strips_crate_path() {
    let cases = [
        ("bdf2csv_bodyfile::pipeline", "pipeline"),
        ("bdf2csv", "bdf2csv"),
        ("a::b::c", "c"),
        ("", ""),
    ];

    for (target, expected) in cases {
        assert_eq!(component(target), expected, "target {target:?}");
    }
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = memory_logger(logger_level);

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("bdf2csv_bodyfile::pipeline")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn malformed_line_warning_is_rendered_with_program_and_component() {
    let logger = memory_logger(Level::Warn);

    logger.log(
        &Record::builder()
            .level(Level::Warn)
            .target("bdf2csv_bodyfile::pipeline")
            .args(format_args!("Failed to parse line 3: bad"))
            .build(),
    );

    let lines = captured(&logger);
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].ends_with("Z bdf2csv WARN  [pipeline] Failed to parse line 3: bad"),
        "unexpected log line: {}",
        lines[0]
    );
}

#[test]
fn records_below_threshold_are_dropped() {
    let logger = memory_logger(Level::Warn);

    for (lvl, msg) in [
        (Level::Debug, "timestamp mode: Human"),
        (Level::Info, "3 lines read"),
        (Level::Error, "disk full"),
    ] {
        logger.log(
            &Record::builder()
                .level(lvl)
                .target("bdf2csv_bodyfile::pipeline")
                .args(format_args!("{msg}"))
                .build(),
        );
    }

    let lines = captured(&logger);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].ends_with("ERROR [pipeline] disk full"));
}

#[test]
#[serial]
fn init_is_idempotent() {
    assert!(init_with_level(Level::Warn).is_ok());
    assert!(init_with_level(Level::Trace).is_ok());
    assert!(init().is_ok());
}
