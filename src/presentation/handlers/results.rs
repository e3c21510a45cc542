use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ResultsResponse {
    pub filename: String,
    pub results: Vec<StoredResultDto>,
}

#[derive(Serialize)]
pub struct StoredResultDto {
    pub provider: String,
    pub transcript: String,
}

#[derive(Serialize)]
pub struct DeleteResultsResponse {
    pub message: String,
    pub deleted: Vec<String>,
}

#[tracing::instrument(skip(state))]
pub async fn results_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(&filename);

    match state.transcript_store.load_all(stem).await {
        Ok(transcripts) if transcripts.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No results found for: {}", filename),
            }),
        )
            .into_response(),
        Ok(transcripts) => {
            let results = transcripts
                .into_iter()
                .map(|t| StoredResultDto {
                    provider: t.provider,
                    transcript: t.text,
                })
                .collect();
            (
                StatusCode::OK,
                Json(ResultsResponse { filename, results }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load transcripts");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to load results: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_results_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(&filename);

    match state.transcript_store.delete_all(stem).await {
        Ok(deleted) if deleted.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No results found for: {}", filename),
            }),
        )
            .into_response(),
        Ok(deleted) => {
            tracing::info!(filename = %filename, count = deleted.len(), "Transcripts deleted");
            (
                StatusCode::OK,
                Json(DeleteResultsResponse {
                    message: format!("Deleted {} results", deleted.len()),
                    deleted,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete transcripts");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to delete results: {}", e),
                }),
            )
                .into_response()
        }
    }
}
