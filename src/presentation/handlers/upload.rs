use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::{AudioClip, SUPPORTED_EXTENSIONS};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // The upload form sends the audio under a field named "file"; other
    // fields are skipped.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No file provided".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let original_name = field.file_name().unwrap_or_default().to_string();
    let sanitized = sanitize_filename(&original_name);
    if sanitized.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file selected".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upload body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let clip = AudioClip::new(sanitized, data);
    if !clip.is_supported() {
        tracing::warn!(filename = %clip.filename, "Unsupported audio format");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "Invalid file type, expected one of: {}",
                    SUPPORTED_EXTENSIONS.join(", ")
                ),
            }),
        )
            .into_response();
    }

    let stored_name = format!(
        "{}_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        clip.filename
    );

    if let Err(e) = state.clip_store.store(&stored_name, clip.data).await {
        tracing::error!(error = %e, filename = %stored_name, "Failed to store clip");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to store file: {}", e),
            }),
        )
            .into_response();
    }

    tracing::info!(filename = %stored_name, "Clip uploaded");
    (
        StatusCode::OK,
        Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            filename: stored_name,
        }),
    )
        .into_response()
}

/// Keeps only the final path component of a client-supplied filename.
fn sanitize_filename(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
