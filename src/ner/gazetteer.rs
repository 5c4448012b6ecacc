//! Gazetteer
//!
//! A fixed lookup table of literal patterns to entity labels, built once at
//! startup and shared read-only across all requests. Registration order is
//! significant: it is the tie-break for overlapping patterns of equal length.

use super::types::EntityLabel;

/// One registered pattern.
#[derive(Debug, Clone)]
struct GazetteerEntry {
    pattern: String,
    label: EntityLabel,
}

/// Immutable pattern table consulted by [`EntityRecognizer`](super::EntityRecognizer).
///
/// Constructed via [`Gazetteer::builder`]; never mutated afterwards, so an
/// `Arc<Gazetteer>` can be shared across concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    pub fn builder() -> GazetteerBuilder {
        GazetteerBuilder {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest pattern matching at `offset` in `text`.
    ///
    /// Matching is exact and case-sensitive. When two patterns of the same
    /// length match, the earlier-registered one wins; the strict `>`
    /// comparison below is what enforces that.
    pub(crate) fn longest_match_at(&self, text: &str, offset: usize) -> Option<(&str, EntityLabel)> {
        let rest = &text[offset..];
        let mut best: Option<(&str, EntityLabel)> = None;
        for entry in &self.entries {
            if rest.starts_with(entry.pattern.as_str()) {
                let longer = best
                    .map(|(pattern, _)| entry.pattern.len() > pattern.len())
                    .unwrap_or(true);
                if longer {
                    best = Some((entry.pattern.as_str(), entry.label));
                }
            }
        }
        best
    }
}

impl Default for Gazetteer {
    /// The claim-form vocabulary shipped with the service: the pilot-district
    /// place names plus known claimant names.
    fn default() -> Self {
        Gazetteer::builder()
            .pattern("Salem", EntityLabel::Place)
            .pattern("Chennai", EntityLabel::Place)
            .pattern("Delhi", EntityLabel::Place)
            .pattern("Mumbai", EntityLabel::Place)
            .pattern("Ramesh", EntityLabel::Name)
            .build()
    }
}

/// Builder for [`Gazetteer`]. Patterns are kept in registration order.
pub struct GazetteerBuilder {
    entries: Vec<GazetteerEntry>,
}

impl GazetteerBuilder {
    /// Register a pattern. Empty patterns are ignored: they would match at
    /// every offset and produce empty mentions.
    pub fn pattern(mut self, pattern: impl Into<String>, label: EntityLabel) -> Self {
        let pattern = pattern.into();
        if !pattern.is_empty() {
            self.entries.push(GazetteerEntry { pattern, label });
        }
        self
    }

    pub fn build(self) -> Gazetteer {
        Gazetteer {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gazetteer_has_shipped_vocabulary() {
        let gazetteer = Gazetteer::default();
        assert_eq!(gazetteer.len(), 5);
        assert_eq!(
            gazetteer.longest_match_at("Salem", 0),
            Some(("Salem", EntityLabel::Place))
        );
        assert_eq!(
            gazetteer.longest_match_at("Ramesh", 0),
            Some(("Ramesh", EntityLabel::Name))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let gazetteer = Gazetteer::default();
        assert_eq!(gazetteer.longest_match_at("salem", 0), None);
        assert_eq!(gazetteer.longest_match_at("CHENNAI", 0), None);
    }

    #[test]
    fn longest_pattern_wins_at_same_offset() {
        let gazetteer = Gazetteer::builder()
            .pattern("Salem", EntityLabel::Place)
            .pattern("Salem East", EntityLabel::Place)
            .build();
        assert_eq!(
            gazetteer.longest_match_at("Salem East block", 0),
            Some(("Salem East", EntityLabel::Place))
        );
    }

    #[test]
    fn equal_length_tie_goes_to_earlier_registration() {
        // Same literal registered twice with different labels: the first
        // registration decides.
        let gazetteer = Gazetteer::builder()
            .pattern("Salem", EntityLabel::Name)
            .pattern("Salem", EntityLabel::Place)
            .build();
        assert_eq!(
            gazetteer.longest_match_at("Salem", 0),
            Some(("Salem", EntityLabel::Name))
        );
    }

    #[test]
    fn empty_patterns_are_dropped() {
        let gazetteer = Gazetteer::builder()
            .pattern("", EntityLabel::Place)
            .pattern("Salem", EntityLabel::Place)
            .build();
        assert_eq!(gazetteer.len(), 1);
    }
}
