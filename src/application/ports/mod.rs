mod agent;
mod chat_model;
mod clip_store;
mod search_tool;
mod transcription_engine;

pub use agent::{Agent, AgentError};
pub use chat_model::{ChatModel, ChatModelError, ChatRole, ChatTurn, ToolCallRequest, ToolDefinition};
pub use clip_store::{ClipStore, ClipStoreError, StoredClip};
pub use search_tool::{SEARCH_TOOL_DESCRIPTION, SEARCH_TOOL_NAME, SearchTool, SearchToolError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
