//! Error types for the FRA Atlas server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::ocr::{ExtractError, OcrError};

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Extract(e) => match e {
                ExtractError::Decode(msg) => (
                    StatusCode::BAD_REQUEST,
                    "invalid_image",
                    format!("Uploaded file is not a decodable image: {}", msg),
                ),
                ExtractError::Recognition(OcrError::Timeout(secs)) => {
                    tracing::error!("OCR timed out after {}s", secs);
                    (
                        StatusCode::GATEWAY_TIMEOUT,
                        "ocr_timeout",
                        format!("Text recognition timed out after {} seconds", secs),
                    )
                }
                ExtractError::Recognition(ocr) => {
                    tracing::error!("OCR failed: {}", ocr);
                    (
                        StatusCode::BAD_GATEWAY,
                        "ocr_failed",
                        "Text recognition failed".to_string(),
                    )
                }
            },
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "bad_upload",
                format!("Malformed multipart upload: {}", e),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_maps_to_bad_request() {
        let err = AppError::from(ExtractError::Decode("bad header".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn ocr_timeout_maps_to_gateway_timeout() {
        let err = AppError::from(ExtractError::Recognition(OcrError::Timeout(60)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn ocr_provider_failure_maps_to_bad_gateway() {
        let err = AppError::from(ExtractError::Recognition(OcrError::Api(
            "connection refused".to_string(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
