use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use caresheet::{generate_profile_sheet, suggested_filename, DutyTaxonomy, StaffProfile};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SheetRequest {
    pub subject: StaffProfile,
    pub taxonomy: DutyTaxonomy,
}

/// Synchronous profile sheet generation endpoint
/// Returns PDF bytes immediately
pub async fn generate_sheet(
    State(state): State<AppState>,
    Json(req): Json<SheetRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("sheet generation request for subject '{}'", req.subject.name);

    // 1. Acquire semaphore permit (blocks if too many concurrent requests)
    let _permit = state
        .sync_semaphore
        .acquire()
        .await
        .map_err(|_| ServiceError::ServiceOverloaded)?;

    // 2. Layout and rendering are CPU-bound; keep them off the async runtime
    let worker_state = state.clone();
    let (pdf_bytes, filename) = tokio::task::spawn_blocking(move || {
        let bytes = generate_profile_sheet(
            &req.subject,
            &req.taxonomy,
            &worker_state.options,
            worker_state.measurer.as_ref(),
        )?;
        Ok::<_, ServiceError>((bytes, suggested_filename(&req.subject)))
    })
    .await
    .map_err(|e| ServiceError::Internal(e.to_string()))??;

    tracing::info!(
        "sheet generation completed for '{}' ({} bytes)",
        filename,
        pdf_bytes.len()
    );

    // 3. Return PDF as response with proper headers
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        pdf_bytes,
    ))
}
