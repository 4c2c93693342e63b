use std::path::Path;

use async_trait::async_trait;

/// Speech-to-text collaborator. Implementations apply a fixed language hint
/// and trim the result; an empty transcript is a valid outcome, not an error.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio read failed: {0}")]
    AudioReadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
