use serde::{Deserialize, Serialize};

use super::route;
use crate::shared::normalize_route;

pub const OTHER: &str = "Other";
pub const DEFAULT_COLOR: &str = "gray";

/// Postcode areas that need extra planning attention.
pub const SPECIAL_CODES: [&str; 9] = ["LA", "EX", "CA", "TQ", "NE", "ME", "CT", "SA", "NR"];
/// Combined code that is never special even though `EX` is.
const SPECIAL_EXEMPT: &str = "EX+TR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroup {
    pub name: String,
    pub codes: Vec<String>,
    #[serde(default)]
    pub full_match: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl RouteGroup {
    pub fn new<I, S>(name: impl Into<String>, codes: I, full_match: bool, color: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            codes: codes
                .into_iter()
                .map(|code| normalize_route(code.as_ref()))
                .filter(|code| !code.is_empty())
                .collect(),
            full_match,
            color: color.to_string(),
        }
    }

    /// `route` must already be normalized.
    pub fn matches(&self, route: &str) -> bool {
        if route.is_empty() {
            return false;
        }
        if self.full_match {
            return self.has_code(route);
        }
        route
            .split('+')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .any(|token| self.has_code(token))
    }

    fn has_code(&self, value: &str) -> bool {
        // Persisted groups may carry codes typed before normalization existed.
        self.codes.iter().any(|code| normalize_route(code) == value)
    }
}

/// The groups a fresh install starts with.
pub fn default_groups() -> Vec<RouteGroup> {
    vec![
        RouteGroup::new("Two Day", ["EX+TR", "TQ+PL"], true, "indigo"),
        RouteGroup::new(
            "London",
            [
                "E", "EC", "N", "NW", "SE", "SW", "W", "WC", "WD", "HA", "UB", "EN", "IG", "RM",
                "BR", "CR", "SM", "KT", "TW", "DA",
            ],
            false,
            "blue",
        ),
        RouteGroup::new(
            "South East",
            ["CT", "ME", "TN", "RH", "GU", "BN", "PO", "SO"],
            false,
            "green",
        ),
        RouteGroup::new(
            "South West",
            ["EX", "TQ", "PL", "TR", "TA", "BA", "BS", "BH", "DT"],
            false,
            "teal",
        ),
        RouteGroup::new(
            "Midlands",
            ["B", "CV", "DE", "NG", "LE", "WS", "WV", "DY", "ST"],
            false,
            "orange",
        ),
        RouteGroup::new(
            "North",
            ["M", "L", "LS", "S", "NE", "YO", "HU", "BD", "LA", "CA", "DH", "SR"],
            false,
            "purple",
        ),
        RouteGroup::new(
            "Scotland",
            ["EDINBURGH", "GLASGOW", "ABERDEEN", "INVERNESS", "EH", "G", "AB", "IV"],
            false,
            "red",
        ),
        RouteGroup::new(
            "East",
            ["NR", "IP", "CB", "CO", "PE", "CM", "SS", "LN"],
            false,
            "yellow",
        ),
    ]
}

/// First group in list order that matches the route.
pub fn find_group<'a>(route: &str, groups: &'a [RouteGroup]) -> Option<&'a RouteGroup> {
    let normalized = normalize_route(route);
    groups.iter().find(|group| group.matches(&normalized))
}

pub fn categorize<'a>(route: &str, groups: &'a [RouteGroup]) -> &'a str {
    find_group(route, groups)
        .map(|group| group.name.as_str())
        .unwrap_or(OTHER)
}

pub fn route_color<'a>(route: &str, groups: &'a [RouteGroup]) -> &'a str {
    find_group(route, groups)
        .map(|group| group.color.as_str())
        .unwrap_or(DEFAULT_COLOR)
}

pub fn has_special_code(calendar_name: Option<&str>) -> bool {
    let normalized = normalize_route(&route(calendar_name));
    if normalized.contains(SPECIAL_EXEMPT) {
        return false;
    }
    normalized
        .split('+')
        .any(|token| SPECIAL_CODES.contains(&token))
}
