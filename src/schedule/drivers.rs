use serde::Serialize;

use crate::{
    calendar::{self, RouteGroup},
    store::{Side, Trip},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverTrip {
    /// Position in the working set.
    pub index: usize,
    pub id: String,
    pub route: String,
    pub category: String,
    pub tasks: String,
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub duration: Option<i32>,
    /// Minutes between the previous trip's end and this trip's start.
    pub rest: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRoutes {
    pub driver: String,
    pub trips: Vec<DriverTrip>,
    pub total_duration: i32,
    pub shortest_rest: Option<i32>,
}

/// Distinct driver names in the working set, sorted. Names that only differ
/// in case or surrounding whitespace are listed once.
pub fn drivers(trips: &[Trip]) -> Vec<String> {
    let mut names: Vec<&str> = trips.iter().filter_map(Trip::driver_name).collect();
    names.sort_by_key(|name| name.to_lowercase());
    names.dedup_by_key(|name| name.to_lowercase());
    names.into_iter().map(str::to_string).collect()
}

/// The driver's trips ordered by start with the rest period before each one.
/// Trips without a parseable start sort last.
pub fn driver_routes(
    trips: &[Trip],
    driver: &str,
    groups: &[RouteGroup],
    side: Side,
) -> DriverRoutes {
    let wanted = driver.trim().to_lowercase();
    let mut owned: Vec<(usize, &Trip)> = trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| {
            trip.driver_name().map(str::to_lowercase).as_deref() == Some(wanted.as_str())
        })
        .collect();
    owned.sort_by_key(|(_, trip)| {
        let start = trip.start_minutes();
        (start.is_none(), start)
    });

    let mut previous_end: Option<i32> = None;
    let driver_trips: Vec<DriverTrip> = owned
        .into_iter()
        .map(|(index, trip)| {
            let route = calendar::route(trip.calendar_name.as_deref());
            let start = trip.start_minutes();
            let end = trip.end_minutes(side);
            let rest = previous_end.zip(start).map(|(end, start)| start - end);
            previous_end = end;
            DriverTrip {
                index,
                id: trip.id.clone(),
                category: calendar::categorize(&route, groups).to_string(),
                tasks: calendar::tasks(trip.calendar_name.as_deref()),
                route,
                start,
                end,
                duration: trip.duration_minutes(side),
                rest,
            }
        })
        .collect();

    DriverRoutes {
        driver: driver.trim().to_string(),
        total_duration: driver_trips.iter().filter_map(|trip| trip.duration).sum(),
        shortest_rest: driver_trips.iter().filter_map(|trip| trip.rest).min(),
        trips: driver_trips,
    }
}
