use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{Summarizer, Transcriber};
use crate::domain::UploadedAudio;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<T, S>(
    State(state): State<AppState<T, S>>,
    mut multipart: Multipart,
) -> Response
where
    T: Transcriber + 'static,
    S: Summarizer + 'static,
{
    // Single-file form: the first field is the upload, anything after it is
    // ignored.
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            tracing::warn!("Transcribe request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    let upload = UploadedAudio::new(filename, data);

    match state.briefing_service.process(upload).await {
        Ok(briefing) => {
            tracing::info!(
                transcript_chars = briefing.transcript.len(),
                summary_chars = briefing.summary.len(),
                "Briefing completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcript: briefing.transcript,
                    summary: briefing.summary,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Briefing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
