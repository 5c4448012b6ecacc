//! Geocoding
//!
//! Resolves recognized place names to coordinates so the frontend can plot
//! them. The provider is abstracted behind [`GeocodingProvider`] so the
//! pipeline can be tested with deterministic fakes; production wiring uses
//! [`NominatimProvider`] against an OpenStreetMap Nominatim instance.

mod enricher;
mod provider;

pub use enricher::GeoEnricher;
pub use provider::{
    GeoCoordinate, GeocodeError, GeocodeOutcome, GeocodingProvider, NominatimProvider,
};

#[cfg(test)]
pub use provider::MockGeocoder;
