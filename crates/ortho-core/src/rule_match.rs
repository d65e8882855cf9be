// Public result type: one reported spelling issue

use serde::{Deserialize, Serialize};

use crate::enums::Provenance;

/// A finalized spelling issue over a span of the original sentence text.
///
/// `start` and `end` are half-open character offsets in original-text
/// coordinates. Matches of one sentence are sorted by `start` and never
/// overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Start offset in characters (inclusive).
    pub start: usize,
    /// End offset in characters (exclusive).
    pub end: usize,
    /// Human-readable message.
    pub message: String,
    /// Suggested replacements, best first, without duplicates.
    pub suggestions: Vec<String>,
    /// Which generator produced the accepted candidate.
    pub provenance: Provenance,
}

impl Match {
    /// Create a new match with suggestions.
    pub fn new(
        start: usize,
        end: usize,
        message: impl Into<String>,
        suggestions: Vec<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            start,
            end,
            message: message.into(),
            suggestions,
            provenance,
        }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two matches share at least one character.
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The best suggestion, if any.
    pub fn top_suggestion(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(start: usize, end: usize) -> Match {
        Match::new(start, end, "msg", vec!["x".to_string()], Provenance::DictionaryNeighbor)
    }

    #[test]
    fn span_length() {
        assert_eq!(m(4, 13).len(), 9);
        assert!(!m(4, 13).is_empty());
    }

    #[test]
    fn adjacent_spans_do_not_overlap() {
        assert!(!m(0, 3).overlaps(&m(3, 5)));
        assert!(m(0, 4).overlaps(&m(3, 5)));
        assert!(m(3, 5).overlaps(&m(0, 4)));
    }

    #[test]
    fn top_suggestion_is_first() {
        let mut a = m(0, 1);
        assert_eq!(a.top_suggestion(), Some("x"));
        a.suggestions.clear();
        assert_eq!(a.top_suggestion(), None);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(m(18, 30)).unwrap();
        assert_eq!(json["start"], 18);
        assert_eq!(json["end"], 30);
        assert_eq!(json["provenance"], "dictionary-neighbor");
    }
}
