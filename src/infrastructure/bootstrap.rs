use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::application::services::Capabilities;
use crate::infrastructure::audio::WhisperApiEngine;
use crate::infrastructure::llm::{GroqChatClient, ToolAgent};
use crate::infrastructure::search::SerperSearchTool;
use crate::presentation::config::Settings;

/// Background construction of the collaborator stack: transcription engine,
/// chat model, search tool, then the agent binding the last two together.
///
/// Each capability is installed as soon as its stage completes, so requests
/// are never blocked on initialization — they get "not ready" until their
/// capability lands. A stage failure leaves the remaining capabilities
/// permanently unavailable; no retry.
pub struct InitSupervisor;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),
}

impl InitSupervisor {
    /// Spawns the one-shot initialization task. The returned handle carries
    /// the typed outcome so the caller can observe startup failures instead
    /// of having them silently swallowed.
    pub fn spawn(
        settings: Settings,
        capabilities: Arc<Capabilities>,
    ) -> JoinHandle<Result<(), InitError>> {
        tokio::spawn(async move { initialize(settings, capabilities).await })
    }
}

async fn initialize(
    settings: Settings,
    capabilities: Arc<Capabilities>,
) -> Result<(), InitError> {
    tracing::info!("Initializing transcription engine...");
    if settings.whisper.api_key.is_empty() {
        return Err(InitError::MissingCredential("WHISPER_API_KEY"));
    }
    let engine = WhisperApiEngine::new(
        settings.whisper.api_key,
        settings.whisper.base_url,
        settings.whisper.model,
        settings.whisper.language,
    );
    capabilities.install_transcription(Arc::new(engine));

    tracing::info!("Initializing chat model client...");
    if settings.llm.api_key.is_empty() {
        return Err(InitError::MissingCredential("GROQ_API_KEY"));
    }
    let model = Arc::new(GroqChatClient::new(
        settings.llm.api_key,
        settings.llm.base_url,
        settings.llm.model,
        settings.llm.temperature,
    ));

    tracing::info!("Initializing search tool...");
    if settings.search.api_key.is_empty() {
        return Err(InitError::MissingCredential("SERPER_API_KEY"));
    }
    let search = Arc::new(SerperSearchTool::new(
        settings.search.api_key,
        settings.search.base_url,
    ));

    tracing::info!("Creating tool agent...");
    let agent = ToolAgent::new(model, search);
    capabilities.install_agent(Arc::new(agent));

    tracing::info!("All capabilities initialized");
    Ok(())
}
