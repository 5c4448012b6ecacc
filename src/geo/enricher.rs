//! Geo Enricher
//!
//! Attaches coordinates to place mentions. Lookups fan out concurrently,
//! one per place mention, and the output keeps the input order regardless
//! of completion order. A lookup that misses, errors or times out leaves
//! that single mention unresolved; it never fails the extraction.

use std::sync::Arc;
use std::time::Duration;

use super::provider::{GeocodeOutcome, GeocodingProvider};
use crate::ner::{EntityLabel, EntityMention};

pub struct GeoEnricher {
    provider: Arc<dyn GeocodingProvider>,
    timeout: Duration,
}

impl GeoEnricher {
    pub fn new(provider: Arc<dyn GeocodingProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Enrich place mentions with coordinates. Same order, same count as
    /// the input. Repeated mentions of the same place are each looked up;
    /// the geocoder sees exactly one call per place mention.
    pub async fn enrich(&self, mentions: Vec<EntityMention>) -> Vec<EntityMention> {
        let lookups = mentions.into_iter().map(|mention| self.resolve(mention));
        // join_all yields results in future order, which is input order.
        futures::future::join_all(lookups).await
    }

    async fn resolve(&self, mut mention: EntityMention) -> EntityMention {
        if mention.label != EntityLabel::Place {
            return mention;
        }

        match tokio::time::timeout(self.timeout, self.provider.geocode(&mention.text)).await {
            Ok(Ok(GeocodeOutcome::Found(coord))) => {
                mention.coordinates = Some(coord);
            }
            Ok(Ok(GeocodeOutcome::NotFound)) => {
                tracing::debug!("no geocoding match for {:?}", mention.text);
            }
            Ok(Err(e)) => {
                tracing::warn!("geocoding {:?} failed: {}", mention.text, e);
            }
            Err(_) => {
                tracing::warn!(
                    "geocoding {:?} timed out after {:?}",
                    mention.text,
                    self.timeout
                );
            }
        }
        mention
    }
}
