//! Named Entity Recognition
//!
//! Recognizes place and person mentions in OCR output using a fixed
//! gazetteer of literal patterns. No statistical model is involved: label
//! assignment is exact, case-sensitive string matching, which keeps the
//! stage deterministic and safe to share read-only across requests.

mod gazetteer;
mod recognizer;
mod types;

pub use gazetteer::{Gazetteer, GazetteerBuilder};
pub use recognizer::EntityRecognizer;
pub use types::{EntityLabel, EntityMention, Span};
