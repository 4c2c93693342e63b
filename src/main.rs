use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use voiceline::application::services::{Capabilities, VoiceSessionService};
use voiceline::infrastructure::bootstrap::InitSupervisor;
use voiceline::infrastructure::observability::init_tracing;
use voiceline::infrastructure::storage::TempAudioStore;
use voiceline::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(&settings.logging, settings.server.port);

    let capabilities = Arc::new(Capabilities::new());

    let init = InitSupervisor::spawn(settings.clone(), Arc::clone(&capabilities));
    tokio::spawn(async move {
        match init.await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                tracing::error!(error = %error, "Initialization failed; affected capabilities stay unavailable");
            }
            Err(error) => {
                tracing::error!(error = %error, "Initialization task panicked");
            }
        }
    });

    let clips = Arc::new(TempAudioStore::new(std::env::temp_dir()));
    let sessions = Arc::new(VoiceSessionService::new(Arc::clone(&capabilities), clips));

    let state = AppState {
        sessions,
        capabilities,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
