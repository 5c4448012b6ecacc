//! OCR Types
//!
//! Backend selection and the error taxonomy for the extraction stage.

use serde::{Deserialize, Serialize};

/// OCR backend selector, used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackend {
    /// Tesseract OCR (local subprocess)
    Tesseract,
    /// Ollama vision model (local LLM)
    Ollama,
}

impl Default for OcrBackend {
    fn default() -> Self {
        Self::Ollama
    }
}

/// Backend-level OCR failures.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("OCR API error: {0}")]
    Api(String),

    #[error("OCR timed out after {0} seconds")]
    Timeout(u64),
}

/// Failures of the extraction stage as seen by the pipeline caller.
///
/// `Decode` means the upload was not a parseable raster image; `Recognition`
/// wraps any collaborator failure, timeout included. Later pipeline stages
/// never fail, so this is the whole pipeline error surface.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("could not decode uploaded image: {0}")]
    Decode(String),

    #[error("text recognition failed: {0}")]
    Recognition(#[from] OcrError),
}
