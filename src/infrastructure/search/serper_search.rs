use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{SearchTool, SearchToolError};

const NO_RESULT_MESSAGE: &str = "No good search result found";
const MAX_SNIPPETS: usize = 3;

/// Web search via the Serper API (google.serper.dev).
pub struct SerperSearchTool {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerperSearchTool {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://google.serper.dev".to_string()),
        }
    }
}

#[async_trait]
impl SearchTool for SerperSearchTool {
    async fn search(&self, query: &str) -> Result<String, SearchToolError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Running web search");

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&serde_json::json!({ "q": query }))
            .send()
            .await
            .map_err(|e| SearchToolError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SearchToolError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchToolError::InvalidResponse(format!("body: {}", e)))?;

        Ok(summarize(results))
    }
}

/// Prefers the answer box; otherwise joins the top organic snippets.
fn summarize(results: SearchResponse) -> String {
    if let Some(answer_box) = results.answer_box {
        if let Some(answer) = answer_box.answer.filter(|a| !a.is_empty()) {
            return answer;
        }
        if let Some(snippet) = answer_box.snippet.filter(|s| !s.is_empty()) {
            return snippet;
        }
    }

    let snippets: Vec<String> = results
        .organic
        .into_iter()
        .filter_map(|result| result.snippet)
        .filter(|snippet| !snippet.is_empty())
        .take(MAX_SNIPPETS)
        .collect();

    if snippets.is_empty() {
        NO_RESULT_MESSAGE.to_string()
    } else {
        snippets.join("\n")
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "answerBox")]
    answer_box: Option<AnswerBox>,
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct AnswerBox {
    answer: Option<String>,
    snippet: Option<String>,
}

#[derive(Deserialize)]
struct OrganicResult {
    snippet: Option<String>,
}
