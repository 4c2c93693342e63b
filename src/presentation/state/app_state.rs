use std::sync::Arc;

use crate::application::services::{Capabilities, VoiceSessionService};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<VoiceSessionService>,
    pub capabilities: Arc<Capabilities>,
}
