use chrono::{DateTime, Local, NaiveDateTime, TimeDelta};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Which end time a duration is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTime {
    /// Scheduled end shifted by the punctuality offset.
    Actual,
    Scheduled,
}

/// Parses a free text time of day into minutes since midnight.
///
/// Everything up to and including the first space is treated as a label and
/// dropped, so `"Shift 08:30"` and `"08:30"` both give 510. Anything that is
/// not `HH:MM` (a trailing `:SS` is ignored) gives `None`, as do minutes
/// outside 0-59 and hour counts too large to fit.
pub fn parse_time(value: Option<&str>) -> Option<i32> {
    let value = value?;
    let clock = match value.split_once(' ') {
        Some((_, rest)) => rest,
        None => value,
    };
    let mut split = clock.split(':');
    let hours: i32 = split.next()?.trim().parse().ok()?;
    let minutes: i32 = split.next()?.trim().parse().ok()?;
    if !(0..60).contains(&minutes) {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Signed punctuality in minutes. Fractions are rounded.
pub fn parse_punctuality(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    if let Ok(minutes) = value.parse::<i32>() {
        return Some(minutes);
    }
    let minutes = value.parse::<f64>().ok().filter(|val| val.is_finite())?;
    Some(minutes.round() as i32)
}

/// Parses a scheduled date and time. Offsets are converted to local time.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Local).naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// The time the driver really finished, formatted `HH:MM`.
///
/// Missing or unparseable punctuality counts as on time. An unparseable end
/// gives an empty string.
pub fn actual_end(end: Option<&str>, punctuality: Option<&str>) -> String {
    let Some(end) = end.and_then(parse_date_time) else {
        return String::new();
    };
    let offset = parse_punctuality(punctuality).unwrap_or(0);
    end.checked_add_signed(TimeDelta::minutes(offset as i64))
        .map(|actual| actual.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Minutes between start and end. Negative when the end precedes the start.
pub fn duration_minutes(
    start: Option<&str>,
    end: Option<&str>,
    punctuality: Option<&str>,
    end_time: EndTime,
) -> Option<i32> {
    let start = parse_time(start)?;
    let end = match end_time {
        EndTime::Actual => parse_time(Some(&actual_end(end, punctuality)))?,
        EndTime::Scheduled => parse_time(end)?,
    };
    Some(end - start)
}

/// Renders a raw minute count as `HH:MM`. Hours are not wrapped at 24 and a
/// negative count keeps its sign in front, `None` renders as `--:--`.
pub fn format_minutes(minutes: Option<i32>) -> String {
    match minutes {
        None => "--:--".to_string(),
        Some(minutes) => {
            let sign = if minutes < 0 { "-" } else { "" };
            let minutes = minutes.unsigned_abs();
            format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
        }
    }
}

#[test]
fn parse_label_and_clock() {
    assert_eq!(parse_time(Some("Shift 08:30")), Some(510));
}

#[test]
fn parse_bare_clock() {
    assert_eq!(parse_time(Some("08:30")), Some(510));
}

#[test]
fn parse_ignores_seconds() {
    assert_eq!(parse_time(Some("2024-01-01 08:30:59")), Some(510));
}

#[test]
fn parse_invalid_1() {
    assert!(parse_time(Some("")).is_none())
}

#[test]
fn parse_invalid_2() {
    assert!(parse_time(Some("abc")).is_none())
}

#[test]
fn parse_invalid_3() {
    assert!(parse_time(None).is_none())
}

#[test]
fn parse_invalid_4() {
    assert!(parse_time(Some("Shift 08")).is_none())
}

#[test]
fn parse_invalid_5() {
    assert!(parse_time(Some("08:75")).is_none())
}

#[test]
fn format_unparse_1() {
    assert_eq!(format_minutes(Some(110)), "01:50");
}

#[test]
fn format_unparse_2() {
    assert_eq!(format_minutes(Some(26 * 60 + 5)), "26:05");
}

#[test]
fn format_negative() {
    assert_eq!(format_minutes(Some(-90)), "-01:30");
}

#[test]
fn format_missing() {
    assert_eq!(format_minutes(None), "--:--");
}
