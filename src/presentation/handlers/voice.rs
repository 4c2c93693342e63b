use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::presentation::handlers::{ErrorResponse, session_error_response};
use crate::presentation::state::AppState;

/// Process voice input and return the assistant's structured response.
#[tracing::instrument(skip(state, multipart))]
pub async fn voice_chat_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            tracing::warn!("Voice request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Failed to read multipart body".to_string(),
                }),
            )
                .into_response();
        }
    };

    let filename = match field.file_name() {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!("Uploaded file has no filename");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Uploaded file has no filename".to_string(),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Failed to read uploaded file".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing voice upload");

    match state.sessions.handle_voice(&data, &filename).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => session_error_response(error),
    }
}
