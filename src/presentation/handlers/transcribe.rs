use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::ClipStoreError;
use crate::domain::{AudioClip, TranscriptionOutcome};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    pub filename: String,
    pub providers: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub filename: String,
    pub results: Vec<OutcomeDto>,
    pub summary: SummaryDto,
}

#[derive(Serialize)]
pub struct OutcomeDto {
    pub provider: String,
    pub status: String,
    pub transcript: Option<String>,
    pub error: Option<String>,
    pub processing_time: f64,
}

#[derive(Serialize)]
pub struct SummaryDto {
    pub total_providers: usize,
    pub successful: usize,
    pub failed: usize,
}

impl From<&TranscriptionOutcome> for OutcomeDto {
    fn from(outcome: &TranscriptionOutcome) -> Self {
        Self {
            provider: outcome.provider.clone(),
            status: outcome.status.as_str().to_string(),
            transcript: outcome.transcript.clone(),
            error: outcome.error.clone(),
            processing_time: outcome.elapsed.as_secs_f64(),
        }
    }
}

#[tracing::instrument(skip(state, request), fields(filename = %request.filename))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse {
    let data = match state.clip_store.fetch(&request.filename).await {
        Ok(d) => d,
        Err(ClipStoreError::NotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("File not found: {}", request.filename),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read clip");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let clip = AudioClip::new(request.filename.clone(), data);

    let requested: Vec<String> = match request.providers {
        Some(list) => list,
        None => state
            .dispatcher
            .available_providers()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
    };

    let outcomes = state.dispatcher.dispatch(&clip, &requested).await;

    for outcome in outcomes.iter().filter(|o| o.is_success()) {
        if let Some(text) = &outcome.transcript {
            if let Err(e) = state
                .transcript_store
                .save(clip.stem(), &outcome.provider, text)
                .await
            {
                tracing::warn!(
                    error = %e,
                    provider = %outcome.provider,
                    "Failed to persist transcript"
                );
            }
        }
    }

    let successful = outcomes.iter().filter(|o| o.is_success()).count();
    let response = TranscribeResponse {
        filename: request.filename,
        summary: SummaryDto {
            total_providers: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
        },
        results: outcomes.iter().map(OutcomeDto::from).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
