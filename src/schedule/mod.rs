pub mod drivers;
mod selection;
mod summary;

pub use selection::*;
pub use summary::*;

pub use crate::store::Side;

use serde::Serialize;

use crate::{
    calendar,
    settings::Settings,
    shared::{
        color::{self, Bounds, PunctualityStyle, Range},
        time::format_minutes,
    },
    store::Trip,
};

/// Durations outside this window are flagged rather than colour scaled.
pub const DURATION_BOUNDS: Bounds = Bounds {
    lower: 0.0,
    upper: 16.0 * 60.0,
};

/// One table row with every derived column worked out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub index: usize,
    pub id: String,
    pub driver: Option<String>,
    pub contractor: Option<String>,
    pub start: Option<String>,
    pub end: String,
    pub route: String,
    pub tasks: String,
    pub region_code: String,
    pub category: String,
    pub category_color: String,
    pub special: bool,
    pub ignored: bool,
    pub punctuality: Option<i32>,
    pub punctuality_style: PunctualityStyle,
    pub punctuality_color: String,
    pub order_value: Option<f64>,
    pub price_color: Option<String>,
    pub duration: Option<i32>,
    pub duration_text: String,
    pub duration_color: Option<String>,
    pub start_color: Option<String>,
    pub warnings: Vec<String>,
    pub late_start: bool,
    pub short_day: bool,
    pub assigned: Option<bool>,
    pub origin_index: Option<usize>,
}

impl RowView {
    /// Builds the row on its own. Colours that depend on the other rows are
    /// left empty, see [`rows`].
    pub fn new(index: usize, trip: &Trip, settings: &Settings, side: Side) -> Self {
        let fields = calendar::decode(trip.calendar_name.as_deref());
        let groups = &settings.route_groups;
        let punctuality = trip.punctuality_minutes();
        let order_value = trip.order_value();
        let duration = trip.duration_minutes(side);
        let start_minutes = trip.start_minutes();
        let end_minutes = trip.end_minutes(side);
        let time_settings = &settings.time_settings;
        let punctuality_style = color::punctuality_style(punctuality);

        Self {
            index,
            id: trip.id.clone(),
            driver: trip.driver_name().map(str::to_string),
            contractor: trip.contractor.clone(),
            start: trip.start.clone(),
            end: trip.display_end(side),
            category: calendar::categorize(&fields.route, groups).to_string(),
            category_color: calendar::route_color(&fields.route, groups).to_string(),
            special: calendar::has_special_code(trip.calendar_name.as_deref()),
            ignored: settings.is_ignored(trip.calendar_name.as_deref()),
            route: fields.route,
            tasks: fields.tasks,
            region_code: fields.region_code,
            punctuality,
            punctuality_style,
            punctuality_color: punctuality_style.color().to_string(),
            order_value,
            price_color: order_value.map(color::price_color),
            duration,
            duration_text: format_minutes(duration),
            duration_color: None,
            start_color: None,
            warnings: time_settings.warnings(start_minutes, end_minutes),
            late_start: time_settings.is_late_start(start_minutes),
            short_day: time_settings.is_short_day(end_minutes),
            assigned: trip.assigned,
            origin_index: trip.origin_index,
        }
    }
}

/// The table for one working set in display order. Row indices always refer
/// to the position in `trips`, also when ignored trips are hidden.
pub fn rows(trips: &[Trip], settings: &Settings, side: Side, hide_ignored: bool) -> Vec<RowView> {
    let mut rows: Vec<RowView> = trips
        .iter()
        .enumerate()
        .map(|(index, trip)| RowView::new(index, trip, settings, side))
        .filter(|row| !(hide_ignored && row.ignored))
        .collect();

    let start_range = Range::from_values(
        rows.iter()
            .filter_map(|row| trips[row.index].start_minutes())
            .map(f64::from),
    );
    let duration_range = Range::from_values(
        rows.iter()
            .filter_map(|row| row.duration)
            .map(f64::from)
            .filter(|duration| DURATION_BOUNDS.contains(*duration)),
    );

    for row in rows.iter_mut() {
        if let (Some(range), Some(start)) = (start_range, trips[row.index].start_minutes()) {
            row.start_color = Some(color::range_color(f64::from(start), range));
        }
        if let Some(duration) = row.duration {
            row.duration_color = Some(match duration_range {
                Some(range) => color::amount_color(f64::from(duration), range, DURATION_BOUNDS),
                None => color::NEUTRAL_DARK.to_string(),
            });
        }
    }
    rows
}
