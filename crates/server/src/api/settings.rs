use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use routeboard::{calendar::RouteGroup, settings::TimeSettings};
use std::sync::Arc;
use tracing::error;

pub async fn settings(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let settings = state.settings.read().await;
    Ok(Json(settings.settings().clone()).into_response())
}

pub async fn add_group(
    State(state): State<Arc<AppState>>,
    Json(group): Json<RouteGroup>,
) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings.add_group(normalized(group));
    Ok(Json(settings.route_groups()).into_response())
}

pub async fn update_group(
    Path(index): Path<usize>,
    State(state): State<Arc<AppState>>,
    Json(group): Json<RouteGroup>,
) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings
        .update_group(index, normalized(group))
        .map_err(|err| {
            error!("Failed to update route group: {err}");
            StatusCode::NOT_FOUND
        })?;
    Ok(Json(settings.route_groups()).into_response())
}

pub async fn remove_group(
    Path(index): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings.remove_group(index).map_err(|err| {
        error!("Failed to remove route group: {err}");
        StatusCode::NOT_FOUND
    })?;
    Ok(Json(settings.route_groups()).into_response())
}

pub async fn set_ignored(
    State(state): State<Arc<AppState>>,
    Json(patterns): Json<Vec<String>>,
) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings.set_ignored_patterns(patterns);
    Ok(Json(settings.ignored_patterns()).into_response())
}

pub async fn set_time(
    State(state): State<Arc<AppState>>,
    Json(time_settings): Json<TimeSettings>,
) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings.set_time_settings(time_settings).map_err(|err| {
        error!("Failed to update time settings: {err}");
        StatusCode::BAD_REQUEST
    })?;
    Ok(Json(settings.time_settings()).into_response())
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut settings = state.settings.write().await;
    settings.reset();
    Ok(Json(settings.settings().clone()).into_response())
}

fn normalized(group: RouteGroup) -> RouteGroup {
    RouteGroup::new(group.name, group.codes, group.full_match, &group.color)
}
