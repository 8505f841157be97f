pub mod color;
pub mod time;

pub use color::*;
pub use time::*;

/// Uppercases a route and collapses every run of whitespace and `+` into a
/// single `+`. Leading and trailing separators are dropped.
pub fn normalize_route(route: &str) -> String {
    let mut normalized = String::with_capacity(route.len());
    let mut pending_separator = false;
    for c in route.trim().chars() {
        if c.is_whitespace() || c == '+' {
            pending_separator = true;
            continue;
        }
        if pending_separator && !normalized.is_empty() {
            normalized.push('+');
        }
        pending_separator = false;
        normalized.extend(c.to_uppercase());
    }
    normalized
}

/// Lenient decimal parse used for every numeric column.
pub fn parse_number(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|val| val.is_finite())
}

#[test]
fn normalize_collapses_separators() {
    assert_eq!(normalize_route(" ex  + tr "), "EX+TR");
    assert_eq!(normalize_route("tq pl"), "TQ+PL");
    assert_eq!(normalize_route("++wd++"), "WD");
    assert_eq!(normalize_route(""), "");
}

#[test]
fn parse_number_rejects_blank() {
    assert_eq!(parse_number(Some("  ")), None);
    assert_eq!(parse_number(Some("12.5")), Some(12.5));
    assert_eq!(parse_number(Some("NaN")), None);
    assert_eq!(parse_number(None), None);
}
