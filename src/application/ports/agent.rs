use async_trait::async_trait;

use crate::domain::AgentReply;

/// The reasoning collaborator: answers a query directly or via tool calls,
/// reporting every tool it invoked in the reply's trace.
#[async_trait]
pub trait Agent: Send + Sync {
    async fn run(&self, query: &str) -> Result<AgentReply, AgentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("chat completion failed: {0}")]
    ChatFailed(String),
    #[error("tool loop exceeded {0} steps without a final answer")]
    StepLimitExceeded(usize),
}
