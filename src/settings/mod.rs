mod storage;
pub use storage::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    calendar::{self, RouteGroup},
    shared::time::format_minutes,
};

/// Key the settings bundle is stored under.
pub const SETTINGS_KEY: &str = "schedule-settings";

pub const DEFAULT_IGNORED_PATTERNS: [&str; 5] =
    ["holiday", "annual leave", "training", "sick", "cancelled"];

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("No route group at index {0}")]
    GroupIndex(usize),
    #[error("Hour {0} is outside 0-23")]
    InvalidHour(u32),
}

/// Thresholds for the start and end time warnings. Hours are 0-23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSettings {
    pub late_end_hour: u32,
    pub early_start_hour: u32,
    pub early_end_hour: u32,
    pub late_start_hour: u32,
    /// `{time}` and `{hour}` are substituted.
    pub late_end_message: String,
    pub early_start_message: String,
    pub late_end_enabled: bool,
    pub early_start_enabled: bool,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            late_end_hour: 20,
            early_start_hour: 6,
            early_end_hour: 12,
            late_start_hour: 10,
            late_end_message: "Finishes at {time}, after {hour}:00".into(),
            early_start_message: "Starts at {time}, before {hour}:00".into(),
            late_end_enabled: true,
            early_start_enabled: true,
        }
    }
}

impl TimeSettings {
    /// Rejects any threshold hour outside 0-23.
    pub fn validate(&self) -> Result<(), self::Error> {
        [
            self.late_end_hour,
            self.early_start_hour,
            self.early_end_hour,
            self.late_start_hour,
        ]
        .into_iter()
        .find(|hour| *hour > 23)
        .map_or(Ok(()), |hour| Err(Error::InvalidHour(hour)))
    }

    pub fn is_early_start(&self, start: Option<i32>) -> bool {
        start.is_some_and(|start| start < hour_to_minutes(self.early_start_hour))
    }

    pub fn is_late_start(&self, start: Option<i32>) -> bool {
        start.is_some_and(|start| start >= hour_to_minutes(self.late_start_hour))
    }

    pub fn is_late_end(&self, end: Option<i32>) -> bool {
        end.is_some_and(|end| end >= hour_to_minutes(self.late_end_hour))
    }

    /// A day that wraps up before the early end hour.
    pub fn is_short_day(&self, end: Option<i32>) -> bool {
        end.is_some_and(|end| end < hour_to_minutes(self.early_end_hour))
    }

    /// Rendered warning messages for a start and end, both in minutes since
    /// midnight.
    pub fn warnings(&self, start: Option<i32>, end: Option<i32>) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.early_start_enabled && self.is_early_start(start) {
            warnings.push(render(
                &self.early_start_message,
                start,
                self.early_start_hour,
            ));
        }
        if self.late_end_enabled && self.is_late_end(end) {
            warnings.push(render(&self.late_end_message, end, self.late_end_hour));
        }
        warnings
    }
}

// Stored blobs are not validated, so out of range hours saturate.
fn hour_to_minutes(hour: u32) -> i32 {
    i32::try_from(hour)
        .ok()
        .and_then(|hour| hour.checked_mul(60))
        .unwrap_or(i32::MAX)
}

fn render(template: &str, minutes: Option<i32>, hour: u32) -> String {
    template
        .replace("{time}", &format_minutes(minutes))
        .replace("{hour}", &format!("{hour:02}"))
}

/// Everything the user can configure, persisted as one blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub route_groups: Vec<RouteGroup>,
    pub ignored_patterns: Vec<String>,
    pub time_settings: TimeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            route_groups: calendar::default_groups(),
            ignored_patterns: DEFAULT_IGNORED_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            time_settings: TimeSettings::default(),
        }
    }
}

impl Settings {
    /// Whether the calendar name contains any ignored pattern, ignoring case.
    pub fn is_ignored(&self, calendar_name: Option<&str>) -> bool {
        let Some(calendar_name) = calendar_name else {
            return false;
        };
        let calendar_name = calendar_name.to_lowercase();
        self.ignored_patterns
            .iter()
            .map(|pattern| pattern.trim().to_lowercase())
            .filter(|pattern| !pattern.is_empty())
            .any(|pattern| calendar_name.contains(&pattern))
    }
}

/// In-memory settings mirrored to a [`KeyValueStore`].
///
/// The store is read once in [`SettingsStore::load`]. Every mutation writes
/// the whole bundle back; a failed write is logged and otherwise ignored, the
/// in-memory copy stays authoritative for the session.
pub struct SettingsStore<S: KeyValueStore> {
    storage: S,
    settings: Settings,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Reads the persisted bundle and merges it over the defaults. Unreadable
    /// or malformed data falls back to the defaults.
    pub fn load(storage: S) -> Self {
        let settings = match storage.get(SETTINGS_KEY) {
            Ok(Some(blob)) => serde_json::from_str::<Settings>(&blob).unwrap_or_else(|err| {
                warn!("Malformed settings, using defaults: {err}");
                Settings::default()
            }),
            Ok(None) => {
                debug!("No stored settings, using defaults");
                Settings::default()
            }
            Err(err) => {
                warn!("Failed to read settings, using defaults: {err}");
                Settings::default()
            }
        };
        Self { storage, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn route_groups(&self) -> &[RouteGroup] {
        &self.settings.route_groups
    }

    pub fn ignored_patterns(&self) -> &[String] {
        &self.settings.ignored_patterns
    }

    pub fn time_settings(&self) -> &TimeSettings {
        &self.settings.time_settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn update_group(&mut self, index: usize, group: RouteGroup) -> Result<(), self::Error> {
        let slot = self
            .settings
            .route_groups
            .get_mut(index)
            .ok_or(Error::GroupIndex(index))?;
        *slot = group;
        self.commit();
        Ok(())
    }

    pub fn add_group(&mut self, group: RouteGroup) {
        self.settings.route_groups.push(group);
        self.commit();
    }

    pub fn remove_group(&mut self, index: usize) -> Result<RouteGroup, self::Error> {
        if index >= self.settings.route_groups.len() {
            return Err(Error::GroupIndex(index));
        }
        let group = self.settings.route_groups.remove(index);
        self.commit();
        Ok(group)
    }

    pub fn set_ignored_patterns(&mut self, patterns: Vec<String>) {
        self.settings.ignored_patterns = patterns;
        self.commit();
    }

    pub fn set_time_settings(&mut self, time_settings: TimeSettings) -> Result<(), self::Error> {
        time_settings.validate()?;
        self.settings.time_settings = time_settings;
        self.commit();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.settings = Settings::default();
        self.commit();
    }

    /// Writes the current bundle and reports the outcome.
    pub fn try_save(&mut self) -> Result<(), self::Error> {
        let blob = serde_json::to_string(&self.settings)?;
        self.storage.set(SETTINGS_KEY, &blob)?;
        Ok(())
    }

    fn commit(&mut self) {
        if let Err(err) = self.try_save() {
            warn!("Failed to persist settings: {err}");
        }
    }
}
