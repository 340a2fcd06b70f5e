use axum::Json;
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voicebrief::application::ports::{SummarizationError, Summarizer};
use voicebrief::infrastructure::llm::OpenAiSummarizer;

async fn serve_router(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

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

async fn start_mock_chat_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    serve_router(app).await
}

// Echoes the first message's content back as the completion so tests can
// inspect the prompt the summarizer built.
async fn start_echoing_chat_server() -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/chat/completions",
        post(|Json(body): Json<Value>| async move {
            let content = body["messages"][0]["content"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            Json(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            }))
        }),
    );

    serve_router(app).await
}

fn create_summarizer(base_url: &str) -> OpenAiSummarizer {
    OpenAiSummarizer::new("test-key", base_url, "gpt-4o-mini", 256, 0.2)
}

#[tokio::test]
async fn given_valid_completion_when_summarizing_then_returns_first_choice_content() {
    let response_body =
        r#"{"choices": [{"message": {"role": "assistant", "content": "a concise summary"}}]}"#;
    let (base_url, shutdown_tx) = start_mock_chat_server(200, response_body).await;

    let summarizer = create_summarizer(&base_url);

    let result = summarizer.summarize("a long transcript").await;

    assert_eq!(result.unwrap(), "a concise summary");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_summarizing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_chat_server(200, r#"{"choices": []}"#).await;

    let summarizer = create_summarizer(&base_url);

    let result = summarizer.summarize("a long transcript").await;

    assert!(matches!(result, Err(SummarizationError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_summarizing_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_chat_server(429, "slow down").await;

    let summarizer = create_summarizer(&base_url);

    let result = summarizer.summarize("a long transcript").await;

    assert!(matches!(result, Err(SummarizationError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_summarizing_then_error_contains_provider_body() {
    let (base_url, shutdown_tx) = start_mock_chat_server(500, "upstream exploded").await;

    let summarizer = create_summarizer(&base_url);

    let err = summarizer.summarize("a long transcript").await.unwrap_err();

    match err {
        SummarizationError::ApiRequestFailed(msg) => assert!(msg.contains("upstream exploded")),
        other => panic!("unexpected error: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_prompt_embeds_transcript() {
    let (base_url, shutdown_tx) = start_echoing_chat_server().await;

    let summarizer = create_summarizer(&base_url);

    let echoed = summarizer
        .summarize("the quarterly numbers look strong")
        .await
        .unwrap();

    assert!(echoed.starts_with("Summarize the following transcript:"));
    assert!(echoed.contains("the quarterly numbers look strong"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_transcript_when_summarizing_then_still_returns_completion() {
    let response_body =
        r#"{"choices": [{"message": {"role": "assistant", "content": "nothing to summarize"}}]}"#;
    let (base_url, shutdown_tx) = start_mock_chat_server(200, response_body).await;

    let summarizer = create_summarizer(&base_url);

    let result = summarizer.summarize("").await;

    assert_eq!(result.unwrap(), "nothing to summarize");
    shutdown_tx.send(()).ok();
}
