//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::eligibility::EligibilityEngine;
use crate::geo::{GeoEnricher, GeocodingProvider, NominatimProvider};
use crate::ner::{EntityRecognizer, Gazetteer};
use crate::ocr::{OcrBackend, OcrProvider, OllamaProvider, TextExtractor};
use crate::pipeline::ExtractionPipeline;

/// Shared application state
///
/// Everything in here is immutable after startup (the gazetteer is built
/// once, provider handles are read-only), so no locking is needed across
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    pipeline: ExtractionPipeline,
    engine: EligibilityEngine,
}

impl AppState {
    /// Wire the production providers from configuration.
    pub fn new(config: Config) -> Self {
        let ocr = build_ocr_provider(&config);
        let geocoder: Arc<dyn GeocodingProvider> = Arc::new(NominatimProvider::new(
            &config.geocoder.base_url,
            &config.geocoder.user_agent,
        ));
        Self::with_providers(config, ocr, geocoder)
    }

    /// Wire explicit providers. Tests use this with deterministic fakes.
    pub fn with_providers(
        config: Config,
        ocr: Arc<dyn OcrProvider>,
        geocoder: Arc<dyn GeocodingProvider>,
    ) -> Self {
        let extractor =
            TextExtractor::new(ocr, config.ocr.timeout()).with_language(&config.ocr.language);
        let recognizer = EntityRecognizer::new(Arc::new(Gazetteer::default()));
        let enricher = GeoEnricher::new(geocoder, config.geocoder.timeout());
        let pipeline = ExtractionPipeline::new(extractor, recognizer, enricher);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pipeline,
                engine: EligibilityEngine::new(),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.inner.pipeline
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.inner.engine
    }
}

fn build_ocr_provider(config: &Config) -> Arc<dyn OcrProvider> {
    match config.ocr.backend {
        OcrBackend::Ollama => Arc::new(OllamaProvider::new(
            &config.ocr.ollama_url,
            &config.ocr.ollama_model,
        )),
        #[cfg(feature = "ocr-tesseract")]
        OcrBackend::Tesseract => Arc::new(crate::ocr::TesseractProvider::new(&config.ocr.language)),
        #[cfg(not(feature = "ocr-tesseract"))]
        OcrBackend::Tesseract => {
            tracing::warn!("tesseract backend requested but the ocr-tesseract feature is off, using ollama");
            Arc::new(OllamaProvider::new(
                &config.ocr.ollama_url,
                &config.ocr.ollama_model,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MockGeocoder;
    use crate::ocr::MockOcr;

    #[test]
    fn state_exposes_the_wired_config() {
        let mut config = Config::default();
        config.server.port = 8123;

        let state = AppState::with_providers(
            config,
            Arc::new(MockOcr::text("")),
            Arc::new(MockGeocoder::new()),
        );

        assert_eq!(state.config().server.port, 8123);
        assert_eq!(state.config().ocr.backend, OcrBackend::Ollama);
    }
}
