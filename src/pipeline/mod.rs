//! Extraction Pipeline
//!
//! Composes the three request-scoped stages into one operation:
//! text extraction, entity recognition, coordinate enrichment. Only the
//! first stage can fail; recognition and enrichment are best-effort and
//! never abort a request. No partial result is produced when extraction
//! fails.

use serde::Serialize;

use crate::geo::GeoEnricher;
use crate::ner::{EntityMention, EntityRecognizer};
use crate::ocr::{ExtractError, TextExtractor};

/// Structured output for one scanned form: the full OCR text plus entity
/// mentions in order of first occurrence, places carrying coordinates when
/// the geocoder resolved them.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub text: String,
    pub entities: Vec<EntityMention>,
}

pub struct ExtractionPipeline {
    extractor: TextExtractor,
    recognizer: EntityRecognizer,
    enricher: GeoEnricher,
}

impl ExtractionPipeline {
    pub fn new(
        extractor: TextExtractor,
        recognizer: EntityRecognizer,
        enricher: GeoEnricher,
    ) -> Self {
        Self {
            extractor,
            recognizer,
            enricher,
        }
    }

    /// Run the full pipeline over one uploaded image.
    pub async fn run(&self, image_data: &[u8]) -> Result<ExtractionResult, ExtractError> {
        let text = self.extractor.extract(image_data).await?;
        tracing::debug!("extracted {} bytes of text", text.len());

        let mentions = self.recognizer.recognize(&text);
        tracing::debug!("recognized {} entity mentions", mentions.len());

        let entities = self.enricher.enrich(mentions).await;
        Ok(ExtractionResult { text, entities })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::geo::MockGeocoder;
    use crate::ner::{EntityLabel, EntityRecognizer, Gazetteer};
    use crate::ocr::MockOcr;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut buffer),
                image::ImageFormat::Png,
            )
            .unwrap();
        buffer
    }

    fn pipeline(ocr: MockOcr, geocoder: MockGeocoder) -> ExtractionPipeline {
        ExtractionPipeline::new(
            TextExtractor::new(Arc::new(ocr), Duration::from_secs(5)),
            EntityRecognizer::new(Arc::new(Gazetteer::default())),
            GeoEnricher::new(Arc::new(geocoder), Duration::from_secs(5)),
        )
    }

    #[tokio::test]
    async fn resolvable_places_come_back_ordered_with_coordinates() {
        let ocr = MockOcr::text("Claim filed at Salem, forwarded to Chennai office.");
        let geocoder = MockGeocoder::new()
            .with_place("Salem", 11.65, 78.16)
            .with_place("Chennai", 13.08, 80.27);

        let result = pipeline(ocr, geocoder).run(&tiny_png()).await.unwrap();

        assert_eq!(result.entities.len(), 2);
        assert_eq!(result.entities[0].text, "Salem");
        assert_eq!(result.entities[1].text, "Chennai");
        assert!(result.entities.iter().all(|e| e.coordinates.is_some()));
    }

    #[tokio::test]
    async fn unresolved_place_still_yields_success() {
        let ocr = MockOcr::text("Village near Mumbai");
        let result = pipeline(ocr, MockGeocoder::new())
            .run(&tiny_png())
            .await
            .unwrap();

        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].label, EntityLabel::Place);
        assert_eq!(result.entities[0].text, "Mumbai");
        assert_eq!(result.entities[0].coordinates, None);
    }

    #[tokio::test]
    async fn ocr_failure_aborts_with_no_result() {
        let ocr = MockOcr::failing("provider down");
        let result = pipeline(ocr, MockGeocoder::new()).run(&tiny_png()).await;
        assert!(matches!(result, Err(ExtractError::Recognition(_))));
    }

    #[tokio::test]
    async fn noisy_text_without_entities_is_fine() {
        let ocr = MockOcr::text("~~ smudged scan, nothing legible ~~");
        let result = pipeline(ocr, MockGeocoder::new())
            .run(&tiny_png())
            .await
            .unwrap();

        assert_eq!(result.text, "~~ smudged scan, nothing legible ~~");
        assert!(result.entities.is_empty());
    }

    #[tokio::test]
    async fn result_serializes_to_wire_shape() {
        let ocr = MockOcr::text("Ramesh of Salem");
        let geocoder = MockGeocoder::new().with_place("Salem", 11.65, 78.16);
        let result = pipeline(ocr, geocoder).run(&tiny_png()).await.unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "Ramesh of Salem");
        assert_eq!(json["entities"][0]["label"], "NAME");
        assert!(json["entities"][0].get("coordinates").is_none());
        assert_eq!(json["entities"][1]["label"], "PLACE");
        assert_eq!(json["entities"][1]["coordinates"]["lat"], 11.65);
    }
}
