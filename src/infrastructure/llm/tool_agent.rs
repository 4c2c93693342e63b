use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    Agent, AgentError, ChatModel, ChatTurn, SEARCH_TOOL_DESCRIPTION, SEARCH_TOOL_NAME, SearchTool,
    ToolCallRequest, ToolDefinition,
};
use crate::domain::{AgentReply, ToolInvocation};

const SYSTEM_PROMPT: &str = "You are a helpful voice assistant. Answer the user's question \
     concisely. Use the WebSearch tool when the question needs current or frequently changing \
     information; otherwise answer directly.";

const DEFAULT_MAX_STEPS: usize = 4;

/// Tool-calling agent: binds the chat model to a single WebSearch tool,
/// constructed once and shared across requests. The query text is the only
/// per-call variable.
pub struct ToolAgent {
    model: Arc<dyn ChatModel>,
    search: Arc<dyn SearchTool>,
    max_steps: usize,
}

impl ToolAgent {
    pub fn new(model: Arc<dyn ChatModel>, search: Arc<dyn SearchTool>) -> Self {
        Self {
            model,
            search,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    async fn execute(&self, call: &ToolCallRequest) -> String {
        if call.name != SEARCH_TOOL_NAME {
            tracing::warn!(tool = %call.name, "Model requested an unknown tool");
            return format!("Unknown tool: {}", call.name);
        }

        let query = parse_query_argument(&call.arguments);
        match self.search.search(&query).await {
            Ok(result) => result,
            // The failure is reported back to the model as a tool result;
            // the invocation stays in the trace.
            Err(error) => {
                tracing::error!(error = %error, "Search tool failed");
                format!("The search tool failed: {}", error)
            }
        }
    }
}

#[async_trait]
impl Agent for ToolAgent {
    async fn run(&self, query: &str) -> Result<AgentReply, AgentError> {
        let tools = [ToolDefinition {
            name: SEARCH_TOOL_NAME,
            description: SEARCH_TOOL_DESCRIPTION,
        }];

        let mut turns = vec![ChatTurn::system(SYSTEM_PROMPT), ChatTurn::user(query)];
        let mut trace = Vec::new();

        for _ in 0..self.max_steps {
            let reply = self
                .model
                .chat(&turns, &tools)
                .await
                .map_err(|e| AgentError::ChatFailed(e.to_string()))?;

            if reply.tool_calls.is_empty() {
                let output = Some(reply.content).filter(|content| !content.trim().is_empty());
                return Ok(AgentReply { output, trace });
            }

            let calls = reply.tool_calls.clone();
            turns.push(reply);

            for call in calls {
                tracing::debug!(tool = %call.name, "Agent invoking tool");
                trace.push(ToolInvocation {
                    tool: call.name.clone(),
                    input: call.arguments.clone(),
                });
                let result = self.execute(&call).await;
                turns.push(ChatTurn::tool(call.id, result));
            }
        }

        Err(AgentError::StepLimitExceeded(self.max_steps))
    }
}

/// Pulls the `query` field out of the tool-call argument object, falling
/// back to the raw argument string when the model sent something else.
fn parse_query_argument(arguments: &str) -> String {
    serde_json::from_str::<serde_json::Value>(arguments)
        .ok()
        .and_then(|value| {
            value
                .get("query")
                .and_then(|q| q.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| arguments.to_string())
}
