mod agent_reply;
mod audio_format;
mod voice_result;

pub use agent_reply::{AgentReply, ToolInvocation};
pub use audio_format::AudioFormat;
pub use voice_result::{
    APOLOGY_MESSAGE, CLARIFICATION_MESSAGE, FALLBACK_MESSAGE, VoiceResult,
};
