use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/schedule", get(handlers::get_schedule))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/toggle", post(handlers::post_toggle))
        .route("/api/plank", post(handlers::post_mark_plank))
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/timer/start", post(handlers::post_timer_start))
        .route("/api/timer/pause", post(handlers::post_timer_pause))
        .route("/api/timer/reset", post(handlers::post_timer_reset))
        .route("/api/export", get(handlers::get_export))
        .route("/api/import", post(handlers::post_import))
        .with_state(state)
}
