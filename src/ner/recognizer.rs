//! Entity Recognizer
//!
//! Scans extracted text for gazetteer matches and emits mentions in the
//! order they occur in the text.

use std::sync::Arc;

use super::gazetteer::Gazetteer;
use super::types::{EntityMention, Span};

/// Gazetteer-backed recognizer.
///
/// Stateless apart from the shared read-only gazetteer, so one instance
/// serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    gazetteer: Arc<Gazetteer>,
}

impl EntityRecognizer {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self { gazetteer }
    }

    /// Recognize all gazetteer mentions in `text`.
    ///
    /// Greedy left-to-right scan: at each offset the longest matching
    /// pattern produces one mention and the scan resumes past it, so
    /// mentions never overlap. OCR noise that matches nothing yields an
    /// empty vec, never an error.
    pub fn recognize(&self, text: &str) -> Vec<EntityMention> {
        let mut mentions = Vec::new();
        let mut offset = 0;
        while offset < text.len() {
            if !text.is_char_boundary(offset) {
                offset += 1;
                continue;
            }
            match self.gazetteer.longest_match_at(text, offset) {
                Some((pattern, label)) => {
                    let end = offset + pattern.len();
                    mentions.push(EntityMention::new(
                        label,
                        &text[offset..end],
                        Span { start: offset, end },
                    ));
                    offset = end;
                }
                None => offset += 1,
            }
        }
        mentions
    }
}
