use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use voiceline::application::ports::{
    Agent, AgentError, TranscriptionEngine, TranscriptionError,
};
use voiceline::application::services::{Capabilities, VoiceSessionService};
use voiceline::domain::{AgentReply, ToolInvocation};
use voiceline::infrastructure::storage::TempAudioStore;
use voiceline::presentation::{AppState, create_router};

const CLARIFICATION: &str = "I didn't catch that. Could you please repeat?";
const APOLOGY: &str = "I encountered an error processing your request.";

struct FixedTranscriptionEngine {
    text: String,
    calls: AtomicUsize,
}

impl FixedTranscriptionEngine {
    fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for FixedTranscriptionEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

struct StubAgent {
    output: Option<String>,
    trace: Vec<ToolInvocation>,
    calls: AtomicUsize,
}

impl StubAgent {
    fn new(output: Option<&str>, trace: Vec<ToolInvocation>) -> Arc<Self> {
        Arc::new(Self {
            output: output.map(String::from),
            trace,
            calls: AtomicUsize::new(0),
        })
    }

    fn answering(output: &str) -> Arc<Self> {
        Self::new(Some(output), Vec::new())
    }
}

#[async_trait]
impl Agent for StubAgent {
    async fn run(&self, _query: &str) -> Result<AgentReply, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AgentReply {
            output: self.output.clone(),
            trace: self.trace.clone(),
        })
    }
}

struct FailingAgent;

#[async_trait]
impl Agent for FailingAgent {
    async fn run(&self, _query: &str) -> Result<AgentReply, AgentError> {
        Err(AgentError::ChatFailed("model exploded".to_string()))
    }
}

fn search_trace(input: &str) -> Vec<ToolInvocation> {
    vec![ToolInvocation {
        tool: "WebSearch".to_string(),
        input: input.to_string(),
    }]
}

fn build_app(
    engine: Option<Arc<dyn TranscriptionEngine>>,
    agent: Option<Arc<dyn Agent>>,
    clip_dir: &Path,
) -> Router {
    let capabilities = Arc::new(Capabilities::new());
    if let Some(engine) = engine {
        capabilities.install_transcription(engine);
    }
    if let Some(agent) = agent {
        capabilities.install_agent(agent);
    }

    let clips = Arc::new(TempAudioStore::new(clip_dir.to_path_buf()));
    let sessions = Arc::new(VoiceSessionService::new(Arc::clone(&capabilities), clips));

    create_router(AppState {
        sessions,
        capabilities,
    })
}

fn multipart_request(filename: &str, data: &[u8]) -> Request<Body> {
    let boundary = "voiceline-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/chat/voice")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn text_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat/text")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "text": text }).to_string(),
        ))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn given_unsupported_extension_when_uploading_then_400_and_no_side_effects() {
    let clip_dir = tempfile::tempdir().unwrap();
    let engine = FixedTranscriptionEngine::new("should never run");
    let app = build_app(
        Some(engine.clone()),
        Some(StubAgent::answering("unused")),
        clip_dir.path(),
    );

    let response = app
        .oneshot(multipart_request("clip.mp4", b"not audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "Unsupported file format. Supported formats: WAV, MP3, OGG, FLAC"
    );
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    assert!(dir_is_empty(clip_dir.path()));
}

#[tokio::test]
async fn given_uppercase_extension_when_uploading_then_400() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        Some(FixedTranscriptionEngine::new("unused")),
        Some(StubAgent::answering("unused")),
        clip_dir.path(),
    );

    let response = app
        .oneshot(multipart_request("clip.WAV", b"audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_all_supported_extensions_when_uploading_then_200() {
    for filename in ["clip.wav", "clip.mp3", "clip.ogg", "clip.flac"] {
        let clip_dir = tempfile::tempdir().unwrap();
        let app = build_app(
            Some(FixedTranscriptionEngine::new("hello")),
            Some(StubAgent::answering("hi there")),
            clip_dir.path(),
        );

        let response = app
            .oneshot(multipart_request(filename, b"audio bytes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "failed for {filename}");
    }
}

#[tokio::test]
async fn given_no_capabilities_when_uploading_then_503() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(None, None, clip_dir.path());

    let response = app
        .oneshot(multipart_request("clip.wav", b"audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Models not initialized yet");
}

#[tokio::test]
async fn given_no_agent_when_posting_text_then_503() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        Some(FixedTranscriptionEngine::new("unused")),
        None,
        clip_dir.path(),
    );

    let response = app.oneshot(text_request("hello")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_whitespace_transcript_when_uploading_then_clarification_and_router_skipped() {
    let clip_dir = tempfile::tempdir().unwrap();
    let agent = StubAgent::answering("should never run");
    let app = build_app(
        Some(FixedTranscriptionEngine::new("  \n ")),
        Some(agent.clone()),
        clip_dir.path(),
    );

    let response = app
        .oneshot(multipart_request("clip.wav", b"silence"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"], "");
    assert_eq!(body["response"], CLARIFICATION);
    assert_eq!(body["search_triggered"], false);
    assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_direct_answer_when_posting_text_then_search_not_triggered() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        None,
        Some(StubAgent::answering("4")),
        clip_dir.path(),
    );

    let response = app.oneshot(text_request("What is 2+2?")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"], "What is 2+2?");
    assert_eq!(body["response"], "4");
    assert_eq!(body["search_triggered"], false);
}

#[tokio::test]
async fn given_web_search_in_trace_when_posting_text_then_search_triggered() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        None,
        Some(StubAgent::new(
            Some("Sunny, 18°C"),
            search_trace("weather in Paris"),
        )),
        clip_dir.path(),
    );

    let response = app
        .oneshot(text_request("What's the weather in Paris today?"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["response"], "Sunny, 18°C");
    assert_eq!(body["search_triggered"], true);
}

#[tokio::test]
async fn given_unrelated_tool_in_trace_when_posting_text_then_search_not_triggered() {
    let clip_dir = tempfile::tempdir().unwrap();
    let trace = vec![ToolInvocation {
        tool: "Calculator".to_string(),
        input: "2+2".to_string(),
    }];
    let app = build_app(
        None,
        Some(StubAgent::new(Some("4"), trace)),
        clip_dir.path(),
    );

    let response = app.oneshot(text_request("What is 2+2?")).await.unwrap();

    let body = json_body(response).await;
    assert_eq!(body["search_triggered"], false);
}

#[tokio::test]
async fn given_failing_agent_when_posting_text_then_200_with_apology() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(None, Some(Arc::new(FailingAgent)), clip_dir.path());

    let response = app.oneshot(text_request("anything")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["response"], APOLOGY);
    assert_eq!(body["search_triggered"], false);
}

#[tokio::test]
async fn given_identical_uploads_when_repeated_then_results_are_identical() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        Some(FixedTranscriptionEngine::new("what time is it")),
        Some(StubAgent::new(Some("It is noon."), search_trace("time"))),
        clip_dir.path(),
    );

    let first = app
        .clone()
        .oneshot(multipart_request("clip.wav", b"same bytes"))
        .await
        .unwrap();
    let second = app
        .oneshot(multipart_request("clip.wav", b"same bytes"))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(json_body(first).await, json_body(second).await);
}

#[tokio::test]
async fn given_no_file_when_uploading_then_400() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(None, None, clip_dir.path());

    let boundary = "voiceline-test-boundary";
    let body = format!("--{boundary}--\r\n");
    let request = Request::builder()
        .method("POST")
        .uri("/chat/voice")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_partial_initialization_when_checking_health_then_reports_each_capability() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        Some(FixedTranscriptionEngine::new("unused")),
        None,
        clip_dir.path(),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "initializing");
    assert_eq!(body["transcription_ready"], true);
    assert_eq!(body["agent_ready"], false);
}

#[tokio::test]
async fn given_full_initialization_when_checking_health_then_ready() {
    let clip_dir = tempfile::tempdir().unwrap();
    let app = build_app(
        Some(FixedTranscriptionEngine::new("unused")),
        Some(StubAgent::answering("unused")),
        clip_dir.path(),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
}
