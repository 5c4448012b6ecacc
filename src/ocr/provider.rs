//! OCR Providers
//!
//! Defines the provider trait and implementations for different OCR backends.

use async_trait::async_trait;

use super::types::{OcrBackend, OcrError};

/// OCR provider trait
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Get the backend type
    fn backend(&self) -> OcrBackend;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Recognize text in an image. `image_data` is always PNG: the
    /// extractor re-encodes the upload before calling, so backends never
    /// see formats they cannot handle.
    async fn recognize(&self, image_data: &[u8], language: Option<&str>)
        -> Result<String, OcrError>;
}

/// Tesseract OCR provider, shelling out to the `tesseract` binary.
///
/// All file and subprocess work goes through tokio's async APIs so the
/// extractor's timeout can cancel a stuck recognition and the runtime
/// worker is never blocked for the OCR duration.
#[cfg(feature = "ocr-tesseract")]
pub struct TesseractProvider {
    default_language: String,
}

#[cfg(feature = "ocr-tesseract")]
impl TesseractProvider {
    pub fn new(default_language: &str) -> Self {
        Self {
            default_language: default_language.to_string(),
        }
    }
}

#[cfg(feature = "ocr-tesseract")]
#[async_trait]
impl OcrProvider for TesseractProvider {
    fn backend(&self) -> OcrBackend {
        OcrBackend::Tesseract
    }

    async fn is_available(&self) -> bool {
        tokio::process::Command::new("tesseract")
            .arg("--version")
            .output()
            .await
            .is_ok()
    }

    async fn recognize(
        &self,
        image_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, OcrError> {
        let lang = language.unwrap_or(&self.default_language);

        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", uuid::Uuid::new_v4()));
        let output_path = temp_dir.join(format!("ocr_output_{}", uuid::Uuid::new_v4()));

        tokio::fs::write(&input_path, image_data)
            .await
            .map_err(|e| OcrError::Processing(format!("Failed to write temp file: {}", e)))?;

        let output = tokio::process::Command::new("tesseract")
            .arg(&input_path)
            .arg(&output_path)
            .arg("-l")
            .arg(lang)
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("3")
            .output()
            .await
            .map_err(|e| OcrError::Processing(format!("Failed to run tesseract: {}", e)))?;

        let _ = tokio::fs::remove_file(&input_path).await;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Processing(format!(
                "Tesseract failed: {}",
                stderr
            )));
        }

        let output_file = format!("{}.txt", output_path.display());
        let text = tokio::fs::read_to_string(&output_file)
            .await
            .map_err(|e| OcrError::Processing(format!("Failed to read output: {}", e)))?;

        let _ = tokio::fs::remove_file(&output_file).await;

        Ok(text)
    }
}

/// Ollama vision model provider
pub struct OllamaProvider {
    /// Ollama API URL
    base_url: String,
    /// Model name (e.g., "llava", "bakllava")
    model: String,
}

impl OllamaProvider {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl OcrProvider for OllamaProvider {
    fn backend(&self) -> OcrBackend {
        OcrBackend::Ollama
    }

    async fn is_available(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/api/tags", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn recognize(
        &self,
        image_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, OcrError> {
        use base64::Engine;

        let client = reqwest::Client::new();
        let url = format!("{}/api/generate", self.base_url);

        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image_data);

        let lang_hint = language
            .map(|l| format!(" The text is in {}.", l))
            .unwrap_or_default();

        let prompt = format!(
            "Extract all text from this image exactly as written.{} Return only the extracted text, nothing else.",
            lang_hint
        );

        let request = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "images": [image_base64],
            "stream": false
        });

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Api(format!("Failed to call Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Api(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OcrError::Api(format!("Failed to parse response: {}", e)))?;

        Ok(result["response"].as_str().unwrap_or("").to_string())
    }
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockOcr {
    pub response: Result<String, String>,
}

#[cfg(test)]
impl MockOcr {
    pub fn text(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl OcrProvider for MockOcr {
    fn backend(&self) -> OcrBackend {
        OcrBackend::Ollama
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn recognize(
        &self,
        _image_data: &[u8],
        _language: Option<&str>,
    ) -> Result<String, OcrError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(OcrError::Processing(message.clone())),
        }
    }
}
