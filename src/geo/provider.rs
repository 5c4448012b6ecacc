//! Geocoding Providers
//!
//! Defines the provider trait plus the Nominatim-backed implementation.
//! "No match" is a normal outcome, modeled in [`GeocodeOutcome`] rather than
//! as an error; [`GeocodeError`] is reserved for provider/network failures.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Latitude in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Result of a geocoding lookup that reached the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeocodeOutcome {
    Found(GeoCoordinate),
    NotFound,
}

/// Provider/network failures. Absorbed by the enricher, never surfaced to
/// the pipeline caller.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(String),

    #[error("unexpected geocoder response: {0}")]
    Response(String),
}

/// Geocoding provider trait
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a place name to coordinates.
    async fn geocode(&self, name: &str) -> Result<GeocodeOutcome, GeocodeError>;
}

/// OpenStreetMap Nominatim provider.
///
/// Nominatim's usage policy requires an identifying User-Agent; it is sent
/// with every request.
pub struct NominatimProvider {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

/// One hit in a Nominatim search response. Nominatim serializes lat/lon as
/// strings.
#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

impl NominatimProvider {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// The public OSM instance with the demo user agent.
    pub fn public(user_agent: &str) -> Self {
        Self::new("https://nominatim.openstreetmap.org", user_agent)
    }

    fn parse_coordinate(hit: &NominatimHit) -> Result<GeoCoordinate, GeocodeError> {
        let lat: f64 = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::Response(format!("bad latitude: {}", hit.lat)))?;
        let lon: f64 = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::Response(format!("bad longitude: {}", hit.lon)))?;
        Ok(GeoCoordinate { lat, lon })
    }
}

#[async_trait]
impl GeocodingProvider for NominatimProvider {
    async fn geocode(&self, name: &str) -> Result<GeocodeOutcome, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(name)
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Response(format!(
                "geocoder returned {}",
                response.status()
            )));
        }

        let hits: Vec<NominatimHit> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Response(e.to_string()))?;

        match hits.first() {
            Some(hit) => Ok(GeocodeOutcome::Found(Self::parse_coordinate(hit)?)),
            None => Ok(GeocodeOutcome::NotFound),
        }
    }
}

/// Deterministic geocoder for tests.
#[cfg(test)]
pub struct MockGeocoder {
    known: std::collections::HashMap<String, GeoCoordinate>,
    /// Names that should simulate a provider failure
    failing: std::collections::HashSet<String>,
    /// Call log, for asserting one-lookup-per-mention behavior
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockGeocoder {
    pub fn new() -> Self {
        Self {
            known: std::collections::HashMap::new(),
            failing: std::collections::HashSet::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_place(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.known.insert(name.to_string(), GeoCoordinate { lat, lon });
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

#[cfg(test)]
#[async_trait]
impl GeocodingProvider for MockGeocoder {
    async fn geocode(&self, name: &str) -> Result<GeocodeOutcome, GeocodeError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.failing.contains(name) {
            return Err(GeocodeError::Request("simulated outage".to_string()));
        }
        Ok(match self.known.get(name) {
            Some(coord) => GeocodeOutcome::Found(*coord),
            None => GeocodeOutcome::NotFound,
        })
    }
}
