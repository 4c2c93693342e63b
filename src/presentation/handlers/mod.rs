mod health;
mod text;
mod voice;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SessionError;

pub use health::health_handler;
pub use text::text_chat_handler;
pub use voice::voice_chat_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn session_error_response(error: SessionError) -> Response {
    let status = match error {
        SessionError::UnsupportedFormat => StatusCode::BAD_REQUEST,
        SessionError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::UploadFailed
        | SessionError::TranscriptionFailed
        | SessionError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
