use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::shared::{self, time::EndTime};

/// Which working set a trip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Planned trips, durations use the actual end.
    Left,
    /// Trips pulled across from the left set, durations use the scheduled end.
    Right,
}

impl Side {
    pub fn end_time(&self) -> EndTime {
        match self {
            Side::Left => EndTime::Actual,
            Side::Right => EndTime::Scheduled,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A column the upstream store sends as either a JSON string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(Number),
    Text(String),
}

impl TextOrNumber {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            TextOrNumber::Number(number) => Cow::Owned(number.to_string()),
            TextOrNumber::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for TextOrNumber {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// One upstream row. Text columns also accept numbers and `originIndex`
/// also accepts a numeric string, so a loosely typed column does not fail
/// the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(
        rename = "Start_Time",
        deserialize_with = "text_from_any",
        alias = "startTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<String>,
    #[serde(
        rename = "End_Time",
        deserialize_with = "text_from_any",
        alias = "endTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<String>,
    #[serde(
        rename = "Driver",
        deserialize_with = "text_from_any",
        alias = "driver",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub driver: Option<String>,
    #[serde(
        rename = "Contractor",
        deserialize_with = "text_from_any",
        alias = "contractor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contractor: Option<String>,
    #[serde(
        rename = "Punctuality",
        alias = "punctuality",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub punctuality: Option<TextOrNumber>,
    #[serde(
        rename = "Calendar_Name",
        deserialize_with = "text_from_any",
        alias = "calendarName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calendar_name: Option<String>,
    #[serde(
        rename = "Order_Value",
        alias = "orderValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_value: Option<TextOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned: Option<bool>,
    #[serde(
        rename = "originIndex",
        deserialize_with = "index_from_any",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_index: Option<usize>,
    /// Columns this crate does not interpret. Kept so whole list writes do
    /// not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trip {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn punctuality_text(&self) -> Option<Cow<'_, str>> {
        self.punctuality.as_ref().map(TextOrNumber::text)
    }

    pub fn punctuality_minutes(&self) -> Option<i32> {
        shared::time::parse_punctuality(self.punctuality_text().as_deref())
    }

    pub fn order_value(&self) -> Option<f64> {
        let value = self.order_value.as_ref().map(TextOrNumber::text);
        shared::parse_number(value.as_deref())
    }

    /// Trimmed driver name, `None` when blank.
    pub fn driver_name(&self) -> Option<&str> {
        self.driver
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn start_minutes(&self) -> Option<i32> {
        shared::time::parse_time(self.start.as_deref())
    }

    /// End as shown for `side`: the reconstructed finish on the left, the
    /// scheduled end on the right.
    pub fn display_end(&self, side: Side) -> String {
        match side {
            Side::Left => shared::time::actual_end(
                self.end.as_deref(),
                self.punctuality_text().as_deref(),
            ),
            Side::Right => self.end.clone().unwrap_or_default(),
        }
    }

    pub fn end_minutes(&self, side: Side) -> Option<i32> {
        shared::time::parse_time(Some(&self.display_end(side)))
    }

    pub fn duration_minutes(&self, side: Side) -> Option<i32> {
        shared::time::duration_minutes(
            self.start.as_deref(),
            self.end.as_deref(),
            self.punctuality_text().as_deref(),
            side.end_time(),
        )
    }
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(id) => id.text().into_owned(),
        None => String::new(),
    })
}

fn text_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| value.text().into_owned()))
}

/// Unparseable indices are dropped rather than failing the row.
fn index_from_any<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let index = match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Number(number)) => {
            number.as_u64().and_then(|index| usize::try_from(index).ok())
        }
        Some(TextOrNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    };
    Ok(index)
}
