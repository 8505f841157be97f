pub mod calendar;
pub mod schedule;
pub mod settings;
pub mod shared;
pub mod store;

pub mod prelude {
    pub use crate::calendar::{
        CalendarFields, RouteGroup, categorize, decode, has_special_code, region_code, route,
        route_color, tasks,
    };
    pub use crate::schedule::{
        RowView, Selection, Side, Summary,
        drivers::{DriverRoutes, driver_routes, drivers},
        rows, summarize,
    };
    pub use crate::settings::{
        FileStore, KeyValueStore, MemoryStore, Settings, SettingsStore, TimeSettings,
    };
    pub use crate::shared::{
        color::{Bounds, PunctualityStyle, Range},
        time::{EndTime, actual_end, duration_minutes, format_minutes, parse_time},
    };
    pub use crate::store::{Config, Fetcher, PersistHandle, ScheduleStore, Trip};
}
