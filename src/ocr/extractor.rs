//! Text Extractor
//!
//! Stage one of the extraction pipeline. Decodes the upload, re-encodes it
//! as PNG and hands that to the configured OCR provider under a timeout,
//! so every backend sees one canonical format. Failure here is terminal
//! for the request; there is no retry and no caching, identical images are
//! re-OCR'd on every call.

use std::sync::Arc;
use std::time::Duration;

use super::provider::OcrProvider;
use super::types::{ExtractError, OcrError};

pub struct TextExtractor {
    provider: Arc<dyn OcrProvider>,
    timeout: Duration,
    language: Option<String>,
}

impl TextExtractor {
    pub fn new(provider: Arc<dyn OcrProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            language: None,
        }
    }

    /// Language hint forwarded to the provider (ISO 639 code).
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Extract plain text from one scanned form.
    ///
    /// The OCR call dominates pipeline latency and is the only blocking
    /// point of this stage.
    pub async fn extract(&self, image_data: &[u8]) -> Result<String, ExtractError> {
        // Rejects garbage before spending an OCR round trip on it.
        let img =
            image::load_from_memory(image_data).map_err(|e| ExtractError::Decode(e.to_string()))?;

        // Backends get PNG regardless of the uploaded format.
        let mut png = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            ExtractError::Recognition(OcrError::Processing(format!(
                "failed to re-encode image as PNG: {}",
                e
            )))
        })?;

        let recognition = self.provider.recognize(&png, self.language.as_deref());

        match tokio::time::timeout(self.timeout, recognition).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ExtractError::Recognition(OcrError::Timeout(
                self.timeout.as_secs(),
            ))),
        }
    }
}
