use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/deliveries/:date", get(handlers::get_day))
        .route("/health", get(handlers::health))
        .with_state(state)
}
