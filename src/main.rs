use std::sync::Arc;

use tokio::net::TcpListener;

use voicebrief::application::services::BriefingService;
use voicebrief::infrastructure::audio::OpenAiWhisperEngine;
use voicebrief::infrastructure::llm::OpenAiSummarizer;
use voicebrief::infrastructure::observability::{TracingConfig, init_tracing};
use voicebrief::infrastructure::storage::TempDirSpool;
use voicebrief::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::for_environment(environment.as_str()));

    // Absence is not an error here: provider calls fail with 401 instead.
    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

    let transcriber = Arc::new(OpenAiWhisperEngine::new(
        &api_key,
        &settings.provider.base_url,
        &settings.transcription.model,
    ));
    let summarizer = Arc::new(OpenAiSummarizer::new(
        &api_key,
        &settings.provider.base_url,
        &settings.summarization.model,
        settings.summarization.max_tokens,
        settings.summarization.temperature,
    ));

    let spool_dir = settings
        .upload
        .spool_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    let spool = Arc::new(TempDirSpool::new(spool_dir)?);

    let briefing_service = Arc::new(BriefingService::new(transcriber, summarizer, spool));

    let state = AppState {
        briefing_service,
        upload_limit_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(environment = %environment, "Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
