//! Decoding of the free text `Calendar_Name` column.
//!
//! The column looks like `"<prefix>-<vh>-<...>: <route> (<tasks>)"` but is typed
//! by hand, so every field is extracted on its own from the raw text and a
//! missing delimiter yields an empty field.

mod category;
pub use category::*;

use serde::Serialize;

use crate::shared::normalize_route;

/// Regions served on a two day turnaround. Matched against the normalized
/// route.
pub const TWO_DAY_REGIONS: [&str; 6] = [
    "EDINBURGH",
    "GLASGOW",
    "ABERDEEN",
    "EX+TR",
    "INVERNESS",
    "TQ+PL",
];
pub const TWO_DAY_CODE: &str = "2DT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub route: String,
    pub tasks: String,
    pub region_code: String,
}

pub fn decode(calendar_name: Option<&str>) -> CalendarFields {
    CalendarFields {
        route: route(calendar_name),
        tasks: tasks(calendar_name),
        region_code: region_code(calendar_name),
    }
}

/// Text after the first `:` up to the next `(`, or to the end.
///
/// Whitespace right after the colon is skipped, whitespace before the `(` is
/// kept: `"X: LONDON (5)"` gives `"LONDON "`.
pub fn route(calendar_name: Option<&str>) -> String {
    let Some((_, after_colon)) = calendar_name.and_then(|name| name.split_once(':')) else {
        return String::new();
    };
    let route = match after_colon.split_once('(') {
        Some((route, _)) => route,
        None => after_colon,
    };
    route.trim_start().to_string()
}

/// Text inside the first pair of parentheses. An unclosed `(` runs to the end.
pub fn tasks(calendar_name: Option<&str>) -> String {
    let Some((_, after_paren)) = calendar_name.and_then(|name| name.split_once('(')) else {
        return String::new();
    };
    match after_paren.split_once(')') {
        Some((tasks, _)) => tasks.to_string(),
        None => after_paren.to_string(),
    }
}

/// Region or vehicle code: `2DT` for two day turnaround routes, otherwise the
/// text between the first and second `-`.
pub fn region_code(calendar_name: Option<&str>) -> String {
    let normalized = normalize_route(&route(calendar_name));
    if TWO_DAY_REGIONS
        .iter()
        .any(|region| normalized.contains(region))
    {
        return TWO_DAY_CODE.to_string();
    }
    let Some((_, after_dash)) = calendar_name.and_then(|name| name.split_once('-')) else {
        return String::new();
    };
    match after_dash.split_once('-') {
        Some((code, _)) => code.to_string(),
        None => after_dash.to_string(),
    }
}
