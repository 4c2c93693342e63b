use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voiceline::application::ports::{SearchTool, SearchToolError};
use voiceline::infrastructure::search::SerperSearchTool;

async fn start_mock_serper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/search",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn tool_for(base_url: &str) -> SerperSearchTool {
    SerperSearchTool::new("test-key".to_string(), Some(base_url.to_string()))
}

#[tokio::test]
async fn given_answer_box_when_searching_then_answer_is_preferred() {
    let body = r#"{
        "answerBox": {"answer": "18°C", "snippet": "Paris weather today"},
        "organic": [{"snippet": "ignored"}]
    }"#;
    let (base_url, shutdown_tx) = start_mock_serper_server(200, body).await;

    let result = tool_for(&base_url).search("weather in Paris").await;

    assert_eq!(result.unwrap(), "18°C");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_answer_box_without_answer_when_searching_then_snippet_is_used() {
    let body = r#"{"answerBox": {"snippet": "Paris weather today"}, "organic": []}"#;
    let (base_url, shutdown_tx) = start_mock_serper_server(200, body).await;

    let result = tool_for(&base_url).search("weather in Paris").await;

    assert_eq!(result.unwrap(), "Paris weather today");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_only_organic_results_when_searching_then_top_snippets_are_joined() {
    let body = r#"{"organic": [
        {"snippet": "first"},
        {"snippet": "second"},
        {"snippet": "third"},
        {"snippet": "fourth"}
    ]}"#;
    let (base_url, shutdown_tx) = start_mock_serper_server(200, body).await;

    let result = tool_for(&base_url).search("anything").await;

    assert_eq!(result.unwrap(), "first\nsecond\nthird");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_results_when_searching_then_fixed_no_result_message() {
    let (base_url, shutdown_tx) = start_mock_serper_server(200, r#"{"organic": []}"#).await;

    let result = tool_for(&base_url).search("gibberish").await;

    assert_eq!(result.unwrap(), "No good search result found");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_searching_then_api_request_failed() {
    let (base_url, shutdown_tx) =
        start_mock_serper_server(403, r#"{"message": "bad key"}"#).await;

    let result = tool_for(&base_url).search("anything").await;

    assert!(matches!(result, Err(SearchToolError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
