use crate::{
    dto::{AssignRequest, RowsQuery, SideQuery, SummaryDto, SummaryRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use routeboard::{
    schedule::{self, drivers},
    store::Side,
};
use std::sync::Arc;
use tracing::{error, info};

const LOAD_FAILED: &str = "failed to load schedule data";

pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    // Readers keep going while the upstream requests are in flight.
    let fetcher = state.schedule.read().await.fetcher();
    let (left, right) = match fetcher.fetch().await {
        Ok(sets) => sets,
        Err(err) => {
            error!("Failed to load schedule data: {err}");
            return Ok((StatusCode::BAD_GATEWAY, LOAD_FAILED).into_response());
        }
    };
    info!("Reloaded {} left and {} right trips", left.len(), right.len());
    state.schedule.write().await.replace(left, right);
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn rows(
    Path(side): Path<Side>,
    Query(query): Query<RowsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let settings = state.settings.read().await;
    let schedule = state.schedule.read().await;
    let rows = schedule::rows(
        schedule.trips(side),
        settings.settings(),
        side,
        query.hide_ignored,
    );
    Ok(Json(rows).into_response())
}

pub async fn summary(
    Path(side): Path<Side>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Response, StatusCode> {
    let schedule = state.schedule.read().await;
    let summary = schedule::summarize(schedule.trips(side), request.rows, side);
    Ok(Json(summary.as_ref().map(SummaryDto::from)).into_response())
}

pub async fn assign(
    Path(side): Path<Side>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssignRequest>,
) -> Result<Response, StatusCode> {
    let mut schedule = state.schedule.write().await;
    if request.index >= schedule.trips(side).len() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let driver = request
        .driver
        .map(|driver| driver.trim().to_string())
        .filter(|driver| !driver.is_empty());
    // The write runs in the background, failures are logged by the store.
    let _ = schedule.update(side, |trips| {
        let mut trips = trips.to_vec();
        let trip = &mut trips[request.index];
        match side {
            Side::Left => trip.assigned = Some(driver.is_some()),
            Side::Right => {
                if request.origin_index.is_some() {
                    trip.origin_index = request.origin_index;
                }
            }
        }
        trip.driver = driver;
        trips
    });
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn drivers(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let schedule = state.schedule.read().await;
    Ok(Json(drivers::drivers(schedule.left())).into_response())
}

pub async fn driver_routes(
    Path(name): Path<String>,
    Query(query): Query<SideQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let side = query.side.unwrap_or(Side::Left);
    let settings = state.settings.read().await;
    let schedule = state.schedule.read().await;
    let routes = drivers::driver_routes(
        schedule.trips(side),
        &name,
        settings.route_groups(),
        side,
    );
    if routes.trips.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(routes).into_response())
}
