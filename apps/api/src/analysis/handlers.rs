//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::{run_analysis, AnalysisReport, AnalyzeRequest};
use crate::document::{extract_and_sectionize, is_extraction_error};
use crate::errors::AppError;
use crate::footprint::{validate_optional_link, LinkVerdict};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractDocumentResponse {
    /// Sectioned résumé text, or the marked soft-failure string.
    pub sectioned_text: String,
    pub extraction_failed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ValidateLinkRequest {
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Full pipeline: validation gates → footprint collection → archetype
/// classification + trajectory simulation. Upstream failures degrade inside
/// the report; only input-validation failures produce a non-200.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = run_analysis(&state, &request).await?;
    Ok(Json(report))
}

/// POST /api/v1/documents/extract
///
/// Accepts a multipart PDF upload and returns the sectioned text digest.
/// Extraction failures are reported inside the response body, not as an
/// error status — the caller decides how to present them.
pub async fn handle_extract_document(
    mut multipart: Multipart,
) -> Result<Json<ExtractDocumentResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let sectioned_text = extract_and_sectionize(&bytes);
        let extraction_failed = is_extraction_error(&sectioned_text);
        return Ok(Json(ExtractDocumentResponse {
            sectioned_text,
            extraction_failed,
        }));
    }

    Err(AppError::Validation(
        "Multipart upload must contain a 'file' field".to_string(),
    ))
}

/// POST /api/v1/links/validate
///
/// Reachability probe for a user-supplied URL. Always 200: the verdict
/// carries validity and the user-facing reason.
pub async fn handle_validate_link(
    State(state): State<AppState>,
    Json(request): Json<ValidateLinkRequest>,
) -> Json<LinkVerdict> {
    Json(validate_optional_link(&state.http, &request.url).await)
}
