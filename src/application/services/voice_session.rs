use std::sync::Arc;

use crate::application::ports::ClipStore;
use crate::application::services::{Capabilities, QueryRouter, RouteError};
use crate::domain::{AudioFormat, VoiceResult};

/// Orchestrates one request: validate, persist, transcribe, route, assemble.
///
/// Failures before an answer is attempted surface as typed errors; failures
/// while generating the answer are masked by the router into a degraded but
/// valid response.
pub struct VoiceSessionService {
    capabilities: Arc<Capabilities>,
    router: QueryRouter,
    clips: Arc<dyn ClipStore>,
}

/// Error taxonomy exposed to the HTTP layer. Display strings are the full
/// client-facing diagnostics; collaborator fault detail stays in the logs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unsupported file format. Supported formats: WAV, MP3, OGG, FLAC")]
    UnsupportedFormat,
    #[error("Models not initialized yet")]
    ServiceUnavailable,
    #[error("File upload failed")]
    UploadFailed,
    #[error("Audio processing failed")]
    TranscriptionFailed,
    #[error("Internal server error")]
    Internal,
}

impl VoiceSessionService {
    pub fn new(capabilities: Arc<Capabilities>, clips: Arc<dyn ClipStore>) -> Self {
        let router = QueryRouter::new(Arc::clone(&capabilities));
        Self {
            capabilities,
            router,
            clips,
        }
    }

    /// Full pipeline for an uploaded clip.
    pub async fn handle_voice(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<VoiceResult, SessionError> {
        let format = AudioFormat::from_filename(filename).ok_or_else(|| {
            tracing::warn!(filename = %filename, "Rejected unsupported upload");
            SessionError::UnsupportedFormat
        })?;

        let clip = self.clips.store(data, format).map_err(|error| {
            tracing::error!(error = %error, "Failed to persist uploaded clip");
            SessionError::UploadFailed
        })?;

        // The clip handle is dropped before the transcript is inspected, so
        // the transient file is removed on both outcomes.
        let outcome = self.transcribe(clip.path()).await;
        drop(clip);
        let transcript = outcome?;
        let transcript = transcript.trim();

        if transcript.is_empty() {
            tracing::info!("Empty transcript, asking for clarification");
            return Ok(VoiceResult::clarification(String::new()));
        }

        let routed = self
            .router
            .route(transcript)
            .await
            .map_err(|_: RouteError| SessionError::ServiceUnavailable)?;

        Ok(VoiceResult::new(
            transcript.to_string(),
            routed.response,
            routed.search_triggered,
        ))
    }

    /// Debug path: same result shape, transcription skipped.
    pub async fn handle_text(&self, text: &str) -> Result<VoiceResult, SessionError> {
        let routed = self
            .router
            .route(text)
            .await
            .map_err(|_: RouteError| SessionError::ServiceUnavailable)?;

        Ok(VoiceResult::new(
            text.to_string(),
            routed.response,
            routed.search_triggered,
        ))
    }

    async fn transcribe(&self, path: &std::path::Path) -> Result<String, SessionError> {
        let engine = self
            .capabilities
            .transcription()
            .ok_or(SessionError::ServiceUnavailable)?;

        engine.transcribe(path).await.map_err(|error| {
            tracing::error!(error = %error, "Transcription failed");
            SessionError::TranscriptionFailed
        })
    }
}
