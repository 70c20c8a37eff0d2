use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/activities",
            get(handlers::get_activities).post(handlers::add_activity),
        )
        .route("/api/activities/:key", delete(handlers::delete_activity))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/select", post(handlers::select_activity))
        .route("/api/session/start", post(handlers::start_session))
        .route("/api/session/stop", post(handlers::stop_session))
        .route("/api/totals", get(handlers::get_totals))
        .route("/api/totals/reset", post(handlers::reset_totals))
        .with_state(state)
}
