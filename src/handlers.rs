use crate::errors::AppError;
use crate::models::{Activity, AddActivityRequest, SelectRequest, SessionResponse, TotalsResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(&tracker.totals().date))
}

pub async fn get_activities(State(state): State<AppState>) -> Json<Vec<Activity>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.activities().to_vec())
}

pub async fn add_activity(
    State(state): State<AppState>,
    Json(payload): Json<AddActivityRequest>,
) -> Result<Json<Activity>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let activity = tracker.add_activity(&payload.label, &payload.emoji)?;
    Ok(Json(activity))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.remove_activity(&key)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut tracker = state.tracker.lock().await;
    Json(tracker.tick())
}

pub async fn select_activity(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    Ok(Json(tracker.select(&payload.key)?))
}

pub async fn start_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut tracker = state.tracker.lock().await;
    Json(tracker.start())
}

pub async fn stop_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    Ok(Json(tracker.stop_and_save()?))
}

pub async fn get_totals(State(state): State<AppState>) -> Json<TotalsResponse> {
    let tracker = state.tracker.lock().await;
    Json(tracker.totals())
}

pub async fn reset_totals(
    State(state): State<AppState>,
) -> Result<Json<TotalsResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.reset_today()?;
    Ok(Json(tracker.totals()))
}
