//! Unwrapping of list responses. Older deployments of the schedule endpoint
//! wrapped the list under different keys; newer ones send `trips` or a bare
//! array. Keys are probed in priority order.

use serde_json::{Map, Value};

use super::Trip;

type Extractor = fn(&mut Map<String, Value>) -> Option<Vec<Value>>;

const EXTRACTORS: [Extractor; 5] = [
    |map| take_array(map, "trips"),
    |map| take_array(map, "items"),
    |map| take_array(map, "data"),
    |map| take_array(map, "rows"),
    |map| take_array(map, "records"),
];

fn take_array(map: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match map.remove(key)? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

pub(crate) fn list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => EXTRACTORS
            .iter()
            .find_map(|extract| extract(&mut map))
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

pub(crate) fn trips(body: Value) -> Result<Vec<Trip>, serde_json::Error> {
    list(body).into_iter().map(serde_json::from_value).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_array() {
        assert_eq!(list(json!([{ "id": "a" }])).len(), 1);
    }

    #[test]
    fn trips_key_wins_over_legacy_keys() {
        let body = json!({ "items": [{ "id": "a" }], "trips": [{ "id": "b" }, { "id": "c" }] });
        assert_eq!(list(body).len(), 2);
    }

    #[test]
    fn legacy_key() {
        let body = json!({ "records": [{ "id": "a" }] });
        assert_eq!(list(body).len(), 1);
    }

    #[test]
    fn non_array_key_is_skipped() {
        let body = json!({ "trips": "oops", "data": [{ "id": "a" }] });
        assert_eq!(list(body).len(), 1);
    }

    #[test]
    fn unknown_shape_is_empty() {
        assert!(list(json!({ "other": [] })).is_empty());
        assert!(list(json!(42)).is_empty());
    }

    #[test]
    fn numeric_id_and_columns() {
        let trips = trips(json!([{
            "id": 7,
            "Start_Time": "Shift 08:00",
            "Punctuality": -10,
            "Order_Value": "120.50",
            "Note": "gate code 1234"
        }]))
        .unwrap();
        assert_eq!(trips[0].id, "7");
        assert_eq!(trips[0].punctuality_minutes(), Some(-10));
        assert_eq!(trips[0].order_value(), Some(120.5));
        assert_eq!(trips[0].extra.get("Note"), Some(&json!("gate code 1234")));
    }

    #[test]
    fn loosely_typed_columns() {
        let trips = trips(json!([{
            "id": "a",
            "Driver": 42,
            "Calendar_Name": null,
            "Start_Time": "08:00",
            "originIndex": "3"
        }, {
            "id": "b",
            "originIndex": "first"
        }]))
        .unwrap();
        assert_eq!(trips[0].driver.as_deref(), Some("42"));
        assert_eq!(trips[0].calendar_name, None);
        assert_eq!(trips[0].start_minutes(), Some(480));
        assert_eq!(trips[0].origin_index, Some(3));
        assert_eq!(trips[1].origin_index, None);
    }
}
