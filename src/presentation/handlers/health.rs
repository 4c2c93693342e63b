use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::ReadinessSnapshot;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(flatten)]
    pub readiness: ReadinessSnapshot,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let readiness = state.capabilities.snapshot();
    let status = if readiness.is_ready() {
        "ready"
    } else {
        "initializing"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            readiness,
        }),
    )
}
