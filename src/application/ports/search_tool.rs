use async_trait::async_trait;

/// Identifier the agent's tool list exposes the web search under. The
/// invocation trace is matched against this exact name.
pub const SEARCH_TOOL_NAME: &str = "WebSearch";

pub const SEARCH_TOOL_DESCRIPTION: &str = "Useful for answering questions about current events, \
     products, or topics requiring up-to-date information. Use when user asks about things that \
     might change frequently or when you need recent data.";

/// Web-search collaborator, only ever called by the agent.
#[async_trait]
pub trait SearchTool: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, SearchToolError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SearchToolError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
