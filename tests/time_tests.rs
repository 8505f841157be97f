use routeboard::shared::time::{
    EndTime, actual_end, duration_minutes, format_minutes, parse_punctuality, parse_time,
};

#[test]
fn valid_time_test_1() {
    assert_eq!(parse_time(Some("Shift 08:30")), Some(510));
}

#[test]
fn valid_time_test_2() {
    assert_eq!(parse_time(Some("08:30")), Some(510));
}

#[test]
fn valid_time_test_3() {
    assert_eq!(parse_time(Some("Late shift 23:59")), Some(1439));
}

#[test]
fn valid_time_test_4() {
    assert_eq!(parse_time(Some("00:00")), Some(0));
}

#[test]
fn invalid_time_test_1() {
    assert!(parse_time(Some("")).is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(parse_time(Some("abc")).is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(parse_time(None).is_none())
}

#[test]
fn invalid_time_test_4() {
    assert!(parse_time(Some("Shift ab:30")).is_none())
}

#[test]
fn invalid_time_test_5() {
    assert!(parse_time(Some("Shift 99999999:00")).is_none())
}

#[test]
fn invalid_time_test_6() {
    assert!(parse_time(Some("08:60")).is_none())
}

#[test]
fn duration_with_oversized_start_is_none() {
    assert_eq!(
        duration_minutes(
            Some("Shift 99999999:00"),
            Some("2024-01-01 10:00"),
            None,
            EndTime::Scheduled
        ),
        None
    );
}

#[test]
fn punctuality_accepts_signs_and_fractions() {
    assert_eq!(parse_punctuality(Some("+15")), Some(15));
    assert_eq!(parse_punctuality(Some(" -10 ")), Some(-10));
    assert_eq!(parse_punctuality(Some("4.6")), Some(5));
    assert_eq!(parse_punctuality(Some("late")), None);
    assert_eq!(parse_punctuality(None), None);
}

#[test]
fn actual_end_adds_punctuality() {
    assert_eq!(actual_end(Some("2024-01-01T10:00"), Some("15")), "10:15");
    assert_eq!(actual_end(Some("2024-01-01T10:00"), Some("+15")), "10:15");
}

#[test]
fn actual_end_subtracts_early_finish() {
    assert_eq!(actual_end(Some("2024-01-01 10:00"), Some("-10")), "09:50");
}

#[test]
fn actual_end_missing_punctuality_is_on_time() {
    assert_eq!(actual_end(Some("2024-01-01T10:00"), None), "10:00");
    assert_eq!(actual_end(Some("2024-01-01T10:00"), Some("n/a")), "10:00");
}

#[test]
fn actual_end_crosses_midnight() {
    assert_eq!(actual_end(Some("2024-01-01T23:50:00"), Some("20")), "00:10");
}

#[test]
fn actual_end_other_formats() {
    assert_eq!(actual_end(Some("01/02/2024 07:05"), Some("5")), "07:10");
    assert_eq!(actual_end(Some("2024-01-01T10:00:00.000"), None), "10:00");
}

#[test]
fn actual_end_unparseable_is_empty() {
    assert_eq!(actual_end(Some("Shift 10:00"), Some("5")), "");
    assert_eq!(actual_end(None, Some("5")), "");
}

#[test]
fn duration_left_uses_actual_end() {
    let duration = duration_minutes(
        Some("08:00"),
        Some("2024-01-01T10:00"),
        Some("-10"),
        EndTime::Actual,
    );
    assert_eq!(duration, Some(110));
    assert_eq!(format_minutes(duration), "01:50");
}

#[test]
fn duration_right_uses_scheduled_end() {
    let duration = duration_minutes(
        Some("Shift 08:00"),
        Some("2024-01-01 10:00"),
        Some("-10"),
        EndTime::Scheduled,
    );
    assert_eq!(duration, Some(120));
}

#[test]
fn duration_parse_failure_is_none() {
    let duration = duration_minutes(Some("soon"), Some("2024-01-01T10:00"), None, EndTime::Actual);
    assert_eq!(duration, None);
    assert_eq!(format_minutes(duration), "--:--");
}

#[test]
fn duration_negative_keeps_sign() {
    let duration = duration_minutes(
        Some("22:00"),
        Some("2024-01-02 01:30"),
        None,
        EndTime::Scheduled,
    );
    assert_eq!(duration, Some(-1230));
    assert_eq!(format_minutes(duration), "-20:30");
}
