//! OCR Module
//!
//! Converts an uploaded claim-form image into plain text.
//!
//! Supports multiple backends:
//! - Tesseract (local subprocess, feature `ocr-tesseract`)
//! - Ollama vision models (local LLM over HTTP)
//!
//! The pipeline only sees [`TextExtractor`], which validates the image,
//! applies the configured timeout and maps backend failures into the
//! extraction error taxonomy.

mod extractor;
mod provider;
mod types;

pub use extractor::TextExtractor;
pub use provider::{OcrProvider, OllamaProvider};
pub use types::{ExtractError, OcrBackend, OcrError};

#[cfg(feature = "ocr-tesseract")]
pub use provider::TesseractProvider;

#[cfg(test)]
pub use provider::MockOcr;
