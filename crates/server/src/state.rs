use routeboard::{
    settings::{FileStore, SettingsStore},
    store::ScheduleStore,
};
use tokio::sync::RwLock;

pub struct AppState {
    pub settings: RwLock<SettingsStore<FileStore>>,
    pub schedule: RwLock<ScheduleStore>,
}

impl AppState {
    pub fn new(settings: SettingsStore<FileStore>, schedule: ScheduleStore) -> Self {
        Self {
            settings: RwLock::new(settings),
            schedule: RwLock::new(schedule),
        }
    }
}
