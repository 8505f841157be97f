mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post, put};
use routeboard::{
    settings::{FileStore, SettingsStore},
    store::{self, ScheduleStore},
};
use std::{env, sync::Arc, time::Instant};
use tracing::{error, info, warn};

const DEFAULT_PORT: u32 = 3001;
const DEFAULT_SETTINGS_DIR: &str = ".routeboard";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let mut config = store::Config::default();
    if let Ok(url) = env::var("ROUTEBOARD_LEFT_URL") {
        config.left_url = url;
    }
    if let Ok(url) = env::var("ROUTEBOARD_RIGHT_URL") {
        config.right_url = url;
    }
    let settings_dir =
        env::var("ROUTEBOARD_SETTINGS_DIR").unwrap_or_else(|_| DEFAULT_SETTINGS_DIR.into());
    let port: u32 = match env::var("ROUTEBOARD_PORT") {
        Ok(value) => match value.parse() {
            Ok(port) => port,
            Err(err) => {
                error!("Invalid ROUTEBOARD_PORT {value}: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    let settings = SettingsStore::load(FileStore::new(settings_dir));
    let mut schedule = match ScheduleStore::new(config) {
        Ok(schedule) => schedule,
        Err(err) => {
            error!("Failed to build schedule client: {err}");
            std::process::exit(1);
        }
    };

    info!("Loading schedule data...");
    let now = Instant::now();
    if let Err(err) = schedule.load().await {
        warn!("Initial schedule load failed: {err}");
    }
    info!("Loading schedule data took {:?}", now.elapsed());

    let state = Arc::new(AppState::new(settings, schedule));
    let app = axum::Router::new()
        .route("/schedule/reload", post(api::reload))
        .route("/schedule/{side}", get(api::rows))
        .route("/schedule/{side}/summary", post(api::summary))
        .route("/schedule/{side}/assign", post(api::assign))
        .route("/drivers", get(api::drivers))
        .route("/drivers/{name}", get(api::driver_routes))
        .route("/settings", get(api::settings))
        .route("/settings/groups", post(api::add_group))
        .route(
            "/settings/groups/{index}",
            put(api::update_group).delete(api::remove_group),
        )
        .route("/settings/ignored", put(api::set_ignored))
        .route("/settings/time", put(api::set_time))
        .route("/settings/reset", post(api::reset))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
