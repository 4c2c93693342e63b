use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::application::ports::{Agent, TranscriptionEngine};

/// Holds the shared collaborator handles as they become available.
///
/// Each capability is a set-once cell: not-ready transitions to ready exactly
/// once and never back. Request handlers read through `transcription` and
/// `agent`; a `None` means the capability has not finished (or failed)
/// initialization and callers must answer "not ready" rather than crash.
#[derive(Default)]
pub struct Capabilities {
    transcription: OnceLock<Arc<dyn TranscriptionEngine>>,
    agent: OnceLock<Arc<dyn Agent>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install_transcription(&self, engine: Arc<dyn TranscriptionEngine>) {
        if self.transcription.set(engine).is_err() {
            tracing::warn!("transcription engine already installed, ignoring");
        }
    }

    pub fn install_agent(&self, agent: Arc<dyn Agent>) {
        if self.agent.set(agent).is_err() {
            tracing::warn!("agent already installed, ignoring");
        }
    }

    pub fn transcription(&self) -> Option<Arc<dyn TranscriptionEngine>> {
        self.transcription.get().cloned()
    }

    pub fn agent(&self) -> Option<Arc<dyn Agent>> {
        self.agent.get().cloned()
    }

    pub fn snapshot(&self) -> ReadinessSnapshot {
        ReadinessSnapshot {
            transcription_ready: self.transcription.get().is_some(),
            agent_ready: self.agent.get().is_some(),
        }
    }
}

/// Point-in-time readiness of each capability, reported by the health
/// endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReadinessSnapshot {
    pub transcription_ready: bool,
    pub agent_ready: bool,
}

impl ReadinessSnapshot {
    pub fn is_ready(&self) -> bool {
        self.transcription_ready && self.agent_ready
    }
}
