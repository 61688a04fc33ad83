use super::*;

#[test]
fn format_epoch_cases() {
    let cases: &[(&str, &str)] = &[
        ("", "N/A"),
        ("0", "N/A"),
        ("1700000000", "2023-11-14 22:13:20 UTC"),
        ("1700000100", "2023-11-14 22:15:00 UTC"),
        ("1700000200", "2023-11-14 22:16:40 UTC"),
        ("1700000300", "2023-11-14 22:18:20 UTC"),
        ("1", "1970-01-01 00:00:01 UTC"),
        ("-1", "1969-12-31 23:59:59 UTC"),
        ("-0", "1970-01-01 00:00:00 UTC"),
        ("951782400", "2000-02-29 00:00:00 UTC"),
        ("4102444800", "2100-01-01 00:00:00 UTC"),
        ("not-a-number", "Invalid"),
        ("12.5", "Invalid"),
        ("1e9", "Invalid"),
        (" 100", "Invalid"),
        ("00", "1970-01-01 00:00:00 UTC"),
        ("9223372036854775808", "Invalid"),
        ("9223372036854775807", "Invalid"),
    ];

    for (input, expected) in cases {
        let got = format_epoch(input);
        assert_eq!(
            got, *expected,
            "format_epoch({:?}) should be {:?}, got {:?}",
            input, expected, got
        );
    }
}

#[test]
fn five_digit_years_are_unsigned() {
    let cases: &[(&str, &str)] = &[
        ("253402300799", "9999-12-31 23:59:59 UTC"),
        ("253402300800", "10000-01-01 00:00:00 UTC"),
        ("253433923200", "10001-01-01 00:00:00 UTC"),
    ];

    for (input, expected) in cases {
        assert_eq!(format_epoch(input), *expected, "format_epoch({input:?})");
    }
}

#[test]
fn sentinels_are_distinct() {
    assert_eq!(format_epoch("0"), format_epoch(""));
    assert_eq!(format_epoch("0"), NOT_APPLICABLE);
    assert_eq!(format_epoch("not-a-number"), INVALID);
    assert_ne!(NOT_APPLICABLE, INVALID);
}

#[test]
fn non_utf8_bytes_are_invalid() {
    assert_eq!(format_epoch(b"17\xff00".as_slice()), INVALID);
}

#[test]
fn output_ignores_process_timezone() {
    // SAFETY: test-local; the formatter never reads TZ.
    let previous = std::env::var_os("TZ");
    unsafe { std::env::set_var("TZ", "America/New_York") };
    let shifted = format_epoch("1700000000");
    match previous {
        Some(v) => unsafe { std::env::set_var("TZ", v) },
        None => unsafe { std::env::remove_var("TZ") },
    }

    assert_eq!(shifted, "2023-11-14 22:13:20 UTC");
    assert_eq!(shifted, format_epoch("1700000000"));
}
