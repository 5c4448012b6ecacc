//! Configuration management for FRA Atlas Server

use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::ocr::OcrBackend;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub backend: OcrBackend,
    pub ollama_url: String,
    pub ollama_model: String,
    /// ISO 639 language hint forwarded to the backend
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim requires an identifying User-Agent
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl OcrConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl GeocoderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            ocr: OcrConfig {
                backend: OcrBackend::default(),
                ollama_url: "http://localhost:11434".to_string(),
                ollama_model: "llava".to_string(),
                language: "eng".to_string(),
                timeout_secs: 60,
            },
            geocoder: GeocoderConfig {
                base_url: "https://nominatim.openstreetmap.org".to_string(),
                user_agent: "fra_atlas_demo".to_string(),
                timeout_secs: 10,
            },
        }
    }
}

impl Config {
    /// Build configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            ocr: OcrConfig {
                backend: match env::var("OCR_BACKEND").as_deref() {
                    Ok("tesseract") => OcrBackend::Tesseract,
                    Ok("ollama") => OcrBackend::Ollama,
                    _ => defaults.ocr.backend,
                },
                ollama_url: env::var("OLLAMA_URL").unwrap_or(defaults.ocr.ollama_url),
                ollama_model: env::var("OLLAMA_MODEL").unwrap_or(defaults.ocr.ollama_model),
                language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr.language),
                timeout_secs: env::var("OCR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.ocr.timeout_secs),
            },
            geocoder: GeocoderConfig {
                base_url: env::var("GEOCODER_URL").unwrap_or(defaults.geocoder.base_url),
                user_agent: env::var("GEOCODER_USER_AGENT")
                    .unwrap_or(defaults.geocoder.user_agent),
                timeout_secs: env::var("GEOCODER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.geocoder.timeout_secs),
            },
        }
    }
}
