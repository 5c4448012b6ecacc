//! Claim extraction route
//!
//! `POST /extract` accepts a multipart upload with a `file` field holding
//! one scanned claim form and responds with the structured extraction
//! result. Decode and OCR failures surface as typed errors; a form whose
//! places cannot be geocoded still extracts successfully.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::pipeline::ExtractionResult;
use crate::state::AppState;

/// Create the extraction router
pub fn router() -> Router<AppState> {
    Router::new().route("/extract", post(extract_claim))
}

/// POST /extract
async fn extract_claim(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResult>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        tracing::info!("extracting claim form ({} bytes)", data.len());
        let result = state.pipeline().run(&data).await?;
        return Ok(Json(result));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}
