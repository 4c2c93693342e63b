mod groq_client;
mod tool_agent;

pub use groq_client::GroqChatClient;
pub use tool_agent::ToolAgent;
