//! Entity types shared by the recognizer and the enrichment stage.

use serde::{Deserialize, Serialize};

use crate::geo::GeoCoordinate;

/// Label vocabulary for gazetteer entries and recognized mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// A place name, candidate for geocoding
    Place,
    /// A person name, passed through untouched
    Name,
}

/// Byte span of a mention within the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One recognized entity mention.
///
/// `text` is always a verbatim substring of the extracted text it was
/// recognized in. `coordinates` is only ever populated for `Place` mentions,
/// and stays `None` when the geocoder has no match or fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityMention {
    pub label: EntityLabel,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoCoordinate>,
}

impl EntityMention {
    /// Mention as produced by the recognizer, before enrichment.
    pub fn new(label: EntityLabel, text: impl Into<String>, span: Span) -> Self {
        Self {
            label,
            text: text.into(),
            span: Some(span),
            coordinates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&EntityLabel::Place).unwrap(),
            "\"PLACE\""
        );
        assert_eq!(
            serde_json::to_string(&EntityLabel::Name).unwrap(),
            "\"NAME\""
        );
    }

    #[test]
    fn unresolved_mention_omits_coordinates() {
        let mention = EntityMention::new(EntityLabel::Place, "Salem", Span { start: 0, end: 5 });
        let json = serde_json::to_value(&mention).unwrap();
        assert_eq!(json["label"], "PLACE");
        assert_eq!(json["text"], "Salem");
        assert!(json.get("coordinates").is_none());
    }
}
