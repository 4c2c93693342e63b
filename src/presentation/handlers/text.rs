use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::infrastructure::observability::sanitize_query;
use crate::presentation::handlers::session_error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Debug path: same response shape as the voice endpoint, no transcription.
#[tracing::instrument(skip(state, request))]
pub async fn text_chat_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %sanitize_query(&request.text), "Processing text request");

    match state.sessions.handle_text(&request.text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => session_error_response(error),
    }
}
