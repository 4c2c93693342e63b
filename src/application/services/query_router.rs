use std::sync::Arc;

use crate::application::ports::SEARCH_TOOL_NAME;
use crate::application::services::Capabilities;
use crate::domain::{APOLOGY_MESSAGE, CLARIFICATION_MESSAGE, FALLBACK_MESSAGE};

/// Turns a transcribed utterance into an answer.
///
/// Empty input short-circuits to a clarification without touching the agent.
/// Agent faults are masked into a fixed apology: a failed reasoning attempt
/// must never fail the whole user-facing request.
pub struct QueryRouter {
    capabilities: Arc<Capabilities>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedReply {
    pub response: String,
    pub search_triggered: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("agent not initialized yet")]
    ServiceUnavailable,
}

impl QueryRouter {
    pub fn new(capabilities: Arc<Capabilities>) -> Self {
        Self { capabilities }
    }

    pub async fn route(&self, query: &str) -> Result<RoutedReply, RouteError> {
        let Some(agent) = self.capabilities.agent() else {
            return Err(RouteError::ServiceUnavailable);
        };

        if query.is_empty() {
            return Ok(RoutedReply {
                response: CLARIFICATION_MESSAGE.to_string(),
                search_triggered: false,
            });
        }

        match agent.run(query).await {
            Ok(reply) => {
                let search_triggered = reply.invoked(SEARCH_TOOL_NAME);
                let response = reply
                    .output
                    .filter(|output| !output.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

                tracing::info!(search_triggered, "Query routed");
                Ok(RoutedReply {
                    response,
                    search_triggered,
                })
            }
            Err(error) => {
                tracing::error!(error = %error, "Agent invocation failed");
                Ok(RoutedReply {
                    response: APOLOGY_MESSAGE.to_string(),
                    search_triggered: false,
                })
            }
        }
    }
}
